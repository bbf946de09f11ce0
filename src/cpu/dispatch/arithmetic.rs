/*!
arithmetic.rs - ADC / SBC opcode family handler.

Both instructions flow through the shared add-with-carry rule in
`execute::adc`; SBC feeds it the one's complement of the operand so the
borrow falls out of the carry logic. Decimal mode is not implemented: the
DECIMAL flag can be set and cleared but never changes arithmetic.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{adc, sbc};
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::CpuState;
use crate::memory::Memory;

pub(super) fn handle(
    op: OpcodeInfo,
    operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
) -> bool {
    match op.mnemonic {
        Mnemonic::Adc => {
            let v = operand.value(state, memory);
            adc(state, v);
        }
        Mnemonic::Sbc => {
            let v = operand.value(state, memory);
            sbc(state, v);
        }
        _ => return false,
    }
    true
}
