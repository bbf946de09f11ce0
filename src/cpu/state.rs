/*!
state.rs - Architectural 6502 register state, flag helpers, and stack
discipline.

Overview
========
`CpuState` is the single owner of every architecturally visible register plus
the execution-control `halted` flag. It intentionally excludes instruction
decode, dispatch, and the memory array itself; those live in the sibling
modules and the `Cpu` facade.

6502 status register bit layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (always reads as 1)
  B = BREAK
  D = DECIMAL (stored but never interpreted; decimal arithmetic is out of scope)
  I = IRQ_DISABLE (stored but never interpreted; no interrupt dispatch)
  Z = ZERO
  C = CARRY

Stack discipline
================
The stack lives on page $0100 and grows downward. Push writes at $0100|SP
then decrements SP; pop increments SP then reads. SP wraps modulo 256 on
under/overflow; the wraparound is well-defined and deliberate, not a fault.
16-bit pushes store the high byte first so the low byte pops first.
*/

use crate::memory::{Memory, RESET_VECTOR, STACK_PAGE};

/// Processor status flag bit masks (canonical definitions).
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000; // Always set when read.
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Pure architectural register / flag container for the 6502 CPU.
#[derive(Debug, Clone, Copy)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: u8,
    pub halted: bool, // Execution halted (BRK or a fatal decode error)
}

impl Default for CpuState {
    fn default() -> Self {
        // Power-on defaults: SP=0xFD, IRQ disabled, UNUSED bit set.
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFD,
            pc: 0x0000,
            status: IRQ_DISABLE | UNUSED,
            halted: false,
        }
    }
}

impl CpuState {
    /// Create a new CPU state using power-up defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset registers to power-up defaults and load PC from the reset
    /// vector at $FFFC/$FFFD.
    pub fn reset(&mut self, memory: &Memory) {
        *self = Self::default();
        self.pc = memory.read_word(RESET_VECTOR);
    }

    // ---------------------------------------------------------------------
    // Program counter helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    /// Advance PC by 1 (common path).
    #[inline]
    pub fn advance_pc_one(&mut self) {
        self.advance_pc(1);
    }

    /// Fetch a byte at the current PC and advance PC by 1.
    #[inline]
    pub fn fetch_u8(&mut self, memory: &Memory) -> u8 {
        let b = memory.read(self.pc);
        self.advance_pc_one();
        b
    }

    /// Fetch a little-endian word (low then high) at the current PC and
    /// advance PC by 2.
    #[inline]
    pub fn fetch_u16(&mut self, memory: &Memory) -> u16 {
        let lo = self.fetch_u8(memory) as u16;
        let hi = self.fetch_u8(memory) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Flag operations
    // ---------------------------------------------------------------------

    /// Return true if a status flag (bit mask) is set.
    #[inline]
    pub fn is_flag_set(&self, mask: u8) -> bool {
        (self.status & mask) != 0
    }

    /// Assign a flag bit based on boolean `value`.
    #[inline]
    pub fn assign_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    /// Composite helper to update ZERO + NEGATIVE from a result byte.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.assign_flag(ZERO, result == 0);
        self.assign_flag(NEGATIVE, (result & 0x80) != 0);
    }

    /// Compose the status byte for a stack push (PHP): UNUSED forced set and
    /// BREAK included.
    #[inline]
    pub fn compose_status_for_push(&self) -> u8 {
        self.status | UNUSED | BREAK
    }

    // ---------------------------------------------------------------------
    // Stack helpers
    // ---------------------------------------------------------------------

    /// Push a byte onto the stack. SP wraps past $00.
    #[inline]
    pub fn push_u8(&mut self, memory: &mut Memory, value: u8) {
        let addr = STACK_PAGE | (self.sp as u16);
        memory.write(addr, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pop a byte from the stack. SP wraps past $FF.
    #[inline]
    pub fn pop_u8(&mut self, memory: &Memory) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let addr = STACK_PAGE | (self.sp as u16);
        memory.read(addr)
    }

    /// Push a 16-bit value, high byte first (return-address layout).
    #[inline]
    pub fn push_u16(&mut self, memory: &mut Memory, value: u16) {
        self.push_u8(memory, (value >> 8) as u8);
        self.push_u8(memory, value as u8);
    }

    /// Pop a 16-bit value, low byte first.
    #[inline]
    pub fn pop_u16(&mut self, memory: &Memory) -> u16 {
        let lo = self.pop_u8(memory) as u16;
        let hi = self.pop_u8(memory) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Misc
    // ---------------------------------------------------------------------

    /// Mark execution halted.
    #[inline]
    pub fn halt(&mut self) {
        self.halted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_power_up() {
        let s = CpuState::new();
        assert_eq!(s.a, 0);
        assert_eq!(s.x, 0);
        assert_eq!(s.y, 0);
        assert_eq!(s.sp, 0xFD);
        assert!(s.is_flag_set(IRQ_DISABLE));
        assert!(s.is_flag_set(UNUSED));
        assert!(!s.halted);
    }

    #[test]
    fn reset_sets_pc_from_vector() {
        let mut mem = Memory::new();
        mem.write_word(RESET_VECTOR, 0x0600);
        let mut s = CpuState::new();
        s.a = 0x55;
        s.halted = true;
        s.reset(&mem);
        assert_eq!(s.pc, 0x0600);
        assert_eq!(s.a, 0);
        assert!(!s.halted);
    }

    #[test]
    fn flag_assignment() {
        let mut s = CpuState::new();
        s.assign_flag(CARRY, true);
        assert!(s.is_flag_set(CARRY));
        s.assign_flag(CARRY, false);
        assert!(!s.is_flag_set(CARRY));
    }

    #[test]
    fn update_zn_behavior() {
        let mut s = CpuState::new();
        s.update_zn(0x00);
        assert!(s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
        s.update_zn(0x80);
        assert!(!s.is_flag_set(ZERO));
        assert!(s.is_flag_set(NEGATIVE));
        s.update_zn(0x7F);
        assert!(!s.is_flag_set(ZERO));
        assert!(!s.is_flag_set(NEGATIVE));
    }

    #[test]
    fn pc_advance_wraps() {
        let mut s = CpuState::new();
        s.pc = 0xFFFF;
        s.advance_pc_one();
        assert_eq!(s.pc, 0x0000);
    }

    #[test]
    fn stack_push_pop_round_trip() {
        let mut mem = Memory::new();
        let mut s = CpuState::new();
        let original_sp = s.sp;
        s.push_u8(&mut mem, 0xAB);
        s.push_u8(&mut mem, 0xCD);
        assert_eq!(s.sp, original_sp.wrapping_sub(2));
        assert_eq!(s.pop_u8(&mem), 0xCD);
        assert_eq!(s.pop_u8(&mem), 0xAB);
        assert_eq!(s.sp, original_sp);
    }

    #[test]
    fn word_push_pops_low_byte_first() {
        let mut mem = Memory::new();
        let mut s = CpuState::new();
        s.push_u16(&mut mem, 0x1234);
        // Low byte sits at the lower stack address and pops first.
        assert_eq!(s.pop_u8(&mem), 0x34);
        assert_eq!(s.pop_u8(&mem), 0x12);
    }

    #[test]
    fn stack_pointer_wraps_silently() {
        let mut mem = Memory::new();
        let mut s = CpuState::new();
        s.sp = 0x00;
        s.push_u8(&mut mem, 0x42);
        assert_eq!(s.sp, 0xFF);
        s.sp = 0xFF;
        let _ = s.pop_u8(&mem);
        assert_eq!(s.sp, 0x00);
    }

    #[test]
    fn compose_status_forces_unused_and_break() {
        let s = CpuState::new();
        let pushed = s.compose_status_for_push();
        assert_ne!(pushed & UNUSED, 0);
        assert_ne!(pushed & BREAK, 0);
    }
}
