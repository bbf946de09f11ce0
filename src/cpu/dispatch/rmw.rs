/*!
rmw.rs - Shift / rotate / increment / decrement opcode family handler.

Covers both operand shapes:
- ASL/LSR/ROL/ROR in accumulator form (operand is the A register) and
  memory form (read-modify-write through the effective address).
- INC/DEC against memory, INX/INY/DEX/DEY against the index registers.

All of them update Zero/Negative from the written result; the shifts and
rotates additionally move the outgoing bit into Carry.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{
    asl_acc, asl_mem, dec_mem, dex, dey, inc_mem, inx, iny, lsr_acc, lsr_mem, rol_acc, rol_mem,
    ror_acc, ror_mem,
};
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
        Mnemonic::Asl => shift(operand, state, memory, asl_acc, asl_mem),
        Mnemonic::Lsr => shift(operand, state, memory, lsr_acc, lsr_mem),
        Mnemonic::Rol => shift(operand, state, memory, rol_acc, rol_mem),
        Mnemonic::Ror => shift(operand, state, memory, ror_acc, ror_mem),
        Mnemonic::Inc => inc_mem(state, memory, operand.address()),
        Mnemonic::Dec => dec_mem(state, memory, operand.address()),
        Mnemonic::Inx => inx(state),
        Mnemonic::Iny => iny(state),
        Mnemonic::Dex => dex(state),
        Mnemonic::Dey => dey(state),
        _ => return false,
    }
    true
}

#[inline]
fn shift(
    operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
    acc_form: fn(&mut CpuState),
    mem_form: fn(&mut CpuState, &mut Memory, u16),
) {
    match operand {
        Operand::Accumulator => acc_form(state),
        _ => mem_form(state, memory, operand.address()),
    }
}
