/*!
addressing.rs - Addressing modes and operand resolution.

Overview
========
Given a descriptor's addressing mode, `resolve` consumes the instruction's
operand bytes from the stream (advancing PC past them) and produces an
`Operand`. PC therefore lands on the next opcode without a separate
length-based advance; branch and jump handlers assign PC directly afterwards.

The `Operand` type preserves the distinction the execution engine depends on:
- `Address` is address-producing: stores, jumps, and read-modify-write
  targets consume the address itself.
- `Immediate` / `Accumulator` are value-producing with no effective address.
- `Relative` is a signed displacement used only by branches.

Resolution rules
================
- Zero-page value fetches are single-byte reads; indexed zero-page addresses
  wrap within 8 bits and never escape the zero page.
- Absolute indexing wraps at 16 bits.
- IndirectX/IndirectY dereference a zero-page pointer whose high byte wraps
  within the zero page.
- JMP (indirect) preserves the NMOS page-wrap quirk: a vector at $xxFF reads
  its high byte from $xx00.
*/

use crate::cpu::state::CpuState;
use crate::memory::Memory;

/// The addressing modes of the documented 6502 instruction set.
///
/// `Implied` and `Accumulator` are both register-implied (no operand bytes);
/// they are kept distinct so shift/rotate instructions can tell the
/// A-register form from the memory forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    Implied,
    Accumulator,
}

/// A resolved operand, ready for the dispatch layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (register-implied instruction).
    Implied,
    /// The accumulator itself (shift/rotate A-register form).
    Accumulator,
    /// A literal byte from the instruction stream.
    Immediate(u8),
    /// An effective memory address.
    Address(u16),
    /// A signed branch displacement.
    Relative(i8),
}

impl Operand {
    /// Read the operand as a byte value (loads, ALU, compares).
    #[inline]
    pub(crate) fn value(self, state: &CpuState, memory: &Memory) -> u8 {
        match self {
            Operand::Immediate(v) => v,
            Operand::Address(addr) => memory.read(addr),
            Operand::Accumulator => state.a,
            Operand::Implied | Operand::Relative(_) => {
                unreachable!("operand {self:?} has no byte value")
            }
        }
    }

    /// The effective address (stores, jumps, memory RMW targets).
    #[inline]
    pub(crate) fn address(self) -> u16 {
        match self {
            Operand::Address(addr) => addr,
            _ => unreachable!("operand {self:?} has no effective address"),
        }
    }

    /// The branch displacement.
    #[inline]
    pub(crate) fn displacement(self) -> i8 {
        match self {
            Operand::Relative(d) => d,
            _ => unreachable!("operand {self:?} is not a branch displacement"),
        }
    }
}

/// Resolve the operand for `mode`, consuming operand bytes from the
/// instruction stream.
pub(crate) fn resolve(mode: AddressingMode, state: &mut CpuState, memory: &Memory) -> Operand {
    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(state.fetch_u8(memory)),
        AddressingMode::ZeroPage => Operand::Address(state.fetch_u8(memory) as u16),
        AddressingMode::ZeroPageX => {
            Operand::Address(state.fetch_u8(memory).wrapping_add(state.x) as u16)
        }
        AddressingMode::ZeroPageY => {
            Operand::Address(state.fetch_u8(memory).wrapping_add(state.y) as u16)
        }
        AddressingMode::Absolute => Operand::Address(state.fetch_u16(memory)),
        AddressingMode::AbsoluteX => {
            Operand::Address(state.fetch_u16(memory).wrapping_add(state.x as u16))
        }
        AddressingMode::AbsoluteY => {
            Operand::Address(state.fetch_u16(memory).wrapping_add(state.y as u16))
        }
        AddressingMode::Indirect => {
            let ptr = state.fetch_u16(memory);
            Operand::Address(read_word_indirect_wrap(memory, ptr))
        }
        AddressingMode::IndirectX => {
            let zp = state.fetch_u8(memory).wrapping_add(state.x);
            Operand::Address(read_word_zp(memory, zp))
        }
        AddressingMode::IndirectY => {
            let zp = state.fetch_u8(memory);
            Operand::Address(read_word_zp(memory, zp).wrapping_add(state.y as u16))
        }
        AddressingMode::Relative => Operand::Relative(state.fetch_u8(memory) as i8),
    }
}

/// Read a 16-bit little-endian pointer from the zero page; the high byte
/// wraps within the zero page (standard 6502 indirect behavior).
#[inline]
pub(crate) fn read_word_zp(memory: &Memory, base: u8) -> u16 {
    let lo = memory.read(base as u16) as u16;
    let hi = memory.read(base.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// Read the JMP (indirect) vector with the NMOS page-wrap quirk: when the
/// low byte of the pointer is $FF, the high byte comes from the start of the
/// same page rather than the next one.
#[inline]
pub(crate) fn read_word_indirect_wrap(memory: &Memory, addr: u16) -> u16 {
    let lo = memory.read(addr) as u16;
    let hi_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
    let hi = memory.read(hi_addr) as u16;
    (hi << 8) | lo
}
