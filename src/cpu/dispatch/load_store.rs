/*!
load_store.rs - Load / store opcode family handler.

LDA/LDX/LDY load the resolved operand into the named register and update
Zero/Negative, leaving the other registers untouched. STA/STX/STY write the
register to the effective address and update no flags at all; they are
address-consumers and never read the operand byte.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{lda, ldx, ldy};
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::CpuState;
use crate::memory::Memory;

/// Attempt to execute a load/store mnemonic. Returns false if the mnemonic
/// belongs to another family.
pub(super) fn handle(
    op: OpcodeInfo,
    operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
) -> bool {
    match op.mnemonic {
        Mnemonic::Lda => {
            let v = operand.value(state, memory);
            lda(state, v);
        }
        Mnemonic::Ldx => {
            let v = operand.value(state, memory);
            ldx(state, v);
        }
        Mnemonic::Ldy => {
            let v = operand.value(state, memory);
            ldy(state, v);
        }
        Mnemonic::Sta => memory.write(operand.address(), state.a),
        Mnemonic::Stx => memory.write(operand.address(), state.x),
        Mnemonic::Sty => memory.write(operand.address(), state.y),
        _ => return false,
    }
    true
}
