/*!
compare.rs - CMP / CPX / CPY opcode family handler.

A compare is a subtraction whose result byte is thrown away: Carry is set
when the register is at least the operand, Zero when they are equal, and
Negative from bit 7 of the wrapped difference. The register itself is never
written.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::compare;
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(super) fn handle(
    op: OpcodeInfo,
    operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
) -> bool {
    let reg = match op.mnemonic {
        Mnemonic::Cmp => state.a,
        Mnemonic::Cpx => state.x,
        Mnemonic::Cpy => state.y,
        _ => return false,
    };
    let v = operand.value(state, memory);
    compare(state, reg, v);
    true
}
