/*!
execute.rs - Shared instruction semantic helpers (ALU, flags, stack, RMW).

Overview
========
Centralizes the side-effect logic for instructions so every dispatch family
shares a single implementation of each semantic. Helpers mutate `CpuState`
(and `Memory` where the instruction targets it) and update exactly the flags
the instruction defines; nothing here touches PC except the branch helper.

Flag rules
==========
- ZERO: result byte == 0.
- NEGATIVE: bit 7 of the result byte.
- CARRY (additive): the pre-truncation 16-bit sum exceeded 0xFF.
- OVERFLOW (ADC/SBC): both operands share a sign bit that differs from the
  result's, i.e. `(!(a ^ m)) & (a ^ r) & 0x80`.

SBC is ADC of the one's complement of the operand; the borrow is the
inverted carry, which the shared carry rule already produces.
*/

use crate::cpu::state::{CARRY, CpuState, NEGATIVE, OVERFLOW, UNUSED, ZERO};
use crate::memory::Memory;

// ---------------------------------------------------------------------------
// Loads / transfers
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn lda(state: &mut CpuState, v: u8) {
    state.a = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn ldx(state: &mut CpuState, v: u8) {
    state.x = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn ldy(state: &mut CpuState, v: u8) {
    state.y = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn tax(state: &mut CpuState) {
    state.x = state.a;
    state.update_zn(state.x);
}

#[inline]
pub(crate) fn tay(state: &mut CpuState) {
    state.y = state.a;
    state.update_zn(state.y);
}

#[inline]
pub(crate) fn txa(state: &mut CpuState) {
    state.a = state.x;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn tya(state: &mut CpuState) {
    state.a = state.y;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn tsx(state: &mut CpuState) {
    state.x = state.sp;
    state.update_zn(state.x);
}

/// TXS is the one transfer that updates no flags.
#[inline]
pub(crate) fn txs(state: &mut CpuState) {
    state.sp = state.x;
}

// ---------------------------------------------------------------------------
// Logical / bit test
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn and(state: &mut CpuState, v: u8) {
    state.a &= v;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn ora(state: &mut CpuState, v: u8) {
    state.a |= v;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn eor(state: &mut CpuState, v: u8) {
    state.a ^= v;
    state.update_zn(state.a);
}

/// BIT: Zero from A & operand, Negative/Overflow from the operand's own
/// bits 7 and 6. The AND result itself is discarded.
#[inline]
pub(crate) fn bit(state: &mut CpuState, v: u8) {
    state.assign_flag(ZERO, (state.a & v) == 0);
    state.assign_flag(NEGATIVE, (v & 0x80) != 0);
    state.assign_flag(OVERFLOW, (v & 0x40) != 0);
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn adc(state: &mut CpuState, v: u8) {
    let a = state.a;
    let carry_in = if state.is_flag_set(CARRY) { 1u16 } else { 0 };
    // Widen before summing; truncate-then-compare loses the carry.
    let sum = a as u16 + v as u16 + carry_in;
    let result = sum as u8;

    state.assign_flag(CARRY, sum > 0xFF);
    state.assign_flag(OVERFLOW, ((!(a ^ v)) & (a ^ result) & 0x80) != 0);
    state.a = result;
    state.update_zn(result);
}

#[inline]
pub(crate) fn sbc(state: &mut CpuState, v: u8) {
    adc(state, v ^ 0xFF);
}

/// CMP/CPX/CPY against the named register value: Carry iff reg >= operand,
/// Zero/Negative from the wrapped difference. The register is not written.
#[inline]
pub(crate) fn compare(state: &mut CpuState, reg: u8, v: u8) {
    state.assign_flag(CARRY, reg >= v);
    state.update_zn(reg.wrapping_sub(v));
}

// ---------------------------------------------------------------------------
// Register increment / decrement
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn inx(state: &mut CpuState) {
    state.x = state.x.wrapping_add(1);
    state.update_zn(state.x);
}

#[inline]
pub(crate) fn iny(state: &mut CpuState) {
    state.y = state.y.wrapping_add(1);
    state.update_zn(state.y);
}

#[inline]
pub(crate) fn dex(state: &mut CpuState) {
    state.x = state.x.wrapping_sub(1);
    state.update_zn(state.x);
}

#[inline]
pub(crate) fn dey(state: &mut CpuState) {
    state.y = state.y.wrapping_sub(1);
    state.update_zn(state.y);
}

// ---------------------------------------------------------------------------
// Shifts / rotates
// ---------------------------------------------------------------------------
//
// Each shift comes in an accumulator and a memory form sharing one bit-level
// rule; the memory form goes through `rmw_memory`.

#[inline]
pub(crate) fn asl_acc(state: &mut CpuState) {
    let v = state.a;
    state.assign_flag(CARRY, (v & 0x80) != 0);
    state.a = v << 1;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn lsr_acc(state: &mut CpuState) {
    let v = state.a;
    state.assign_flag(CARRY, (v & 0x01) != 0);
    state.a = v >> 1;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn rol_acc(state: &mut CpuState) {
    let v = state.a;
    let carry_in = if state.is_flag_set(CARRY) { 1 } else { 0 };
    state.assign_flag(CARRY, (v & 0x80) != 0);
    state.a = (v << 1) | carry_in;
    state.update_zn(state.a);
}

#[inline]
pub(crate) fn ror_acc(state: &mut CpuState) {
    let v = state.a;
    let carry_in = if state.is_flag_set(CARRY) { 0x80 } else { 0 };
    state.assign_flag(CARRY, (v & 0x01) != 0);
    state.a = (v >> 1) | carry_in;
    state.update_zn(state.a);
}

/// Read-modify-write a memory operand and return the written value.
pub(crate) fn rmw_memory<F>(
    state: &mut CpuState,
    memory: &mut Memory,
    addr: u16,
    transform: F,
) -> u8
where
    F: FnOnce(&mut CpuState, u8) -> u8,
{
    let old = memory.read(addr);
    let new = transform(state, old);
    memory.write(addr, new);
    new
}

#[inline]
pub(crate) fn asl_mem(state: &mut CpuState, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(state, memory, addr, |s, old| {
        s.assign_flag(CARRY, (old & 0x80) != 0);
        old << 1
    });
    state.update_zn(r);
}

#[inline]
pub(crate) fn lsr_mem(state: &mut CpuState, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(state, memory, addr, |s, old| {
        s.assign_flag(CARRY, (old & 0x01) != 0);
        old >> 1
    });
    state.update_zn(r);
}

#[inline]
pub(crate) fn rol_mem(state: &mut CpuState, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(state, memory, addr, |s, old| {
        let carry_in = if s.is_flag_set(CARRY) { 1 } else { 0 };
        s.assign_flag(CARRY, (old & 0x80) != 0);
        (old << 1) | carry_in
    });
    state.update_zn(r);
}

#[inline]
pub(crate) fn ror_mem(state: &mut CpuState, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(state, memory, addr, |s, old| {
        let carry_in = if s.is_flag_set(CARRY) { 0x80 } else { 0 };
        s.assign_flag(CARRY, (old & 0x01) != 0);
        (old >> 1) | carry_in
    });
    state.update_zn(r);
}

#[inline]
pub(crate) fn inc_mem(state: &mut CpuState, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(state, memory, addr, |_, old| old.wrapping_add(1));
    state.update_zn(r);
}

#[inline]
pub(crate) fn dec_mem(state: &mut CpuState, memory: &mut Memory, addr: u16) {
    let r = rmw_memory(state, memory, addr, |_, old| old.wrapping_sub(1));
    state.update_zn(r);
}

// ---------------------------------------------------------------------------
// Stack instructions
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn pha(state: &mut CpuState, memory: &mut Memory) {
    let a = state.a;
    state.push_u8(memory, a);
}

#[inline]
pub(crate) fn pla(state: &mut CpuState, memory: &Memory) {
    let v = state.pop_u8(memory);
    state.a = v;
    state.update_zn(v);
}

#[inline]
pub(crate) fn php(state: &mut CpuState, memory: &mut Memory) {
    let v = state.compose_status_for_push();
    state.push_u8(memory, v);
}

/// PLP restores the status byte but forces UNUSED set and BREAK clear; the
/// two are artifacts of the push encoding, not real state.
#[inline]
pub(crate) fn plp(state: &mut CpuState, memory: &Memory) {
    use crate::cpu::state::BREAK;
    let v = state.pop_u8(memory);
    state.status = (v | UNUSED) & !BREAK;
}

// ---------------------------------------------------------------------------
// Branch helper
// ---------------------------------------------------------------------------

/// Apply a taken branch: add the signed displacement to the PC, which
/// already points at the next instruction. Returns nothing; a not-taken
/// branch leaves PC alone and needs no help.
#[inline]
pub(crate) fn branch(state: &mut CpuState, displacement: i8) {
    state.pc = state.pc.wrapping_add(displacement as i16 as u16);
}
