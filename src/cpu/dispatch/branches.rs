/*!
branches.rs - Conditional branch opcode family handler.

All eight branches share one shape: test a flag, and when the condition
holds add the signed displacement to PC. The operand bytes are already
consumed by resolution, so a not-taken branch needs no PC adjustment (net
advance of 2) and a taken branch lands at `2 + displacement` past the
opcode. Branches read flags and never write them.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::branch;
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, ZERO};
use crate::memory::Memory;

pub(super) fn handle(
    op: OpcodeInfo,
    operand: Operand,
    state: &mut CpuState,
    _memory: &mut Memory,
) -> bool {
    let take = match op.mnemonic {
        Mnemonic::Bcc => !state.is_flag_set(CARRY),
        Mnemonic::Bcs => state.is_flag_set(CARRY),
        Mnemonic::Bne => !state.is_flag_set(ZERO),
        Mnemonic::Beq => state.is_flag_set(ZERO),
        Mnemonic::Bpl => !state.is_flag_set(NEGATIVE),
        Mnemonic::Bmi => state.is_flag_set(NEGATIVE),
        Mnemonic::Bvc => !state.is_flag_set(OVERFLOW),
        Mnemonic::Bvs => state.is_flag_set(OVERFLOW),
        _ => return false,
    };
    if take {
        branch(state, operand.displacement());
    }
    true
}
