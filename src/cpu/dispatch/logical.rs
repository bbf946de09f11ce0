/*!
logical.rs - Bitwise opcode family handler (AND/ORA/EOR/BIT).

AND/ORA/EOR combine the operand into the accumulator and update
Zero/Negative only. BIT is the odd one out: the AND result is discarded,
Zero comes from it, and Negative/Overflow are copied from the operand's own
bits 7 and 6.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{and, bit, eor, ora};
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(super) fn handle(
    op: OpcodeInfo,
    operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
) -> bool {
    let f = match op.mnemonic {
        Mnemonic::And => and,
        Mnemonic::Ora => ora,
        Mnemonic::Eor => eor,
        Mnemonic::Bit => bit,
        _ => return false,
    };
    let v = operand.value(state, memory);
    f(state, v);
    true
}
