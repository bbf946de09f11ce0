/*!
core::Cpu - Canonical 6502 CPU façade owning `CpuState` and `Memory`.

Overview
========
`Cpu` is the type embedders drive: it owns the register file and the 64KB
address space, wires the two into the dispatch orchestrator, and keeps a
running cycle total. Everything here is a thin delegation; the semantics
live in `dispatch`, `execute`, and `addressing`.

Execution model
===============
- `step` executes exactly one instruction (or fails on an unknown opcode)
  and accumulates its base cycle cost.
- `run` steps until the CPU halts (BRK) or a step fails. The error carries
  the address of the offending byte so callers can report it.
- `load` / `load_at` place a program image and point the reset vector at
  it; `reset` then routes PC there. `load_and_run` bundles the common
  load/reset/run sequence for small programs.
*/

use crate::cpu::dispatch;
use crate::cpu::state::CpuState;
use crate::error::CpuError;
use crate::memory::Memory;

#[derive(Debug, Clone)]
pub struct Cpu {
    state: CpuState,
    memory: Memory,
    cycles: u64,
}

impl Cpu {
    /// Construct a CPU with power-up register defaults and zeroed memory.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            memory: Memory::new(),
            cycles: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Program loading / execution
    // ---------------------------------------------------------------------

    /// Copy a program image to the default program origin and point the
    /// reset vector at it. Memory outside the image is untouched.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.memory.load(program)
    }

    /// Copy a program image to an arbitrary origin and point the reset
    /// vector at it.
    pub fn load_at(&mut self, program: &[u8], base: u16) -> Result<(), CpuError> {
        self.memory.load_at(program, base)
    }

    /// Reset registers to power-up defaults and load PC from the reset
    /// vector. Memory contents and the cycle total survive a reset.
    pub fn reset(&mut self) {
        self.state.reset(&self.memory);
    }

    /// Execute one instruction, accumulating its cycle cost.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let cycles = dispatch::step(&mut self.state, &mut self.memory)?;
        self.cycles += cycles as u64;
        Ok(())
    }

    /// Step until the CPU halts or an instruction fails to decode.
    pub fn run(&mut self) -> Result<(), CpuError> {
        while !self.state.halted {
            self.step()?;
        }
        Ok(())
    }

    /// Load a program, reset, and run it to completion.
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.load(program)?;
        self.reset();
        self.run()
    }

    // ---------------------------------------------------------------------
    // Register / flag accessors
    // ---------------------------------------------------------------------

    pub fn a(&self) -> u8 {
        self.state.a
    }

    pub fn x(&self) -> u8 {
        self.state.x
    }

    pub fn y(&self) -> u8 {
        self.state.y
    }

    pub fn sp(&self) -> u8 {
        self.state.sp
    }

    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    pub fn status(&self) -> u8 {
        self.state.status
    }

    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }

    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }

    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }

    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }

    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }

    /// Test a status flag by bit mask (see the `cpu::state` constants).
    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    /// Set or clear a status flag by bit mask.
    pub fn set_flag(&mut self, mask: u8, value: bool) {
        self.state.assign_flag(mask, value);
    }

    /// True once BRK or a decode failure has stopped the run loop.
    pub fn is_halted(&self) -> bool {
        self.state.halted
    }

    /// Total base cycles consumed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ---------------------------------------------------------------------
    // State / memory access
    // ---------------------------------------------------------------------

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn mem_read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub fn mem_write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub fn mem_read_word(&self, addr: u16) -> u16 {
        self.memory.read_word(addr)
    }

    pub fn mem_write_word(&mut self, addr: u16, value: u16) {
        self.memory.write_word(addr, value);
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::state::{CARRY, OVERFLOW, ZERO};
    use crate::memory::PROGRAM_BASE;

    #[test]
    fn load_and_run_small_program() {
        let mut cpu = Cpu::new();
        // LDA #$10; ADC #$10; BRK
        cpu.load_and_run(&[0xA9, 0x10, 0x69, 0x10, 0x00]).unwrap();
        assert_eq!(cpu.a(), 0x20);
        assert!(!cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(OVERFLOW));
        assert!(cpu.is_halted());
    }

    #[test]
    fn adc_negative_operands_set_carry_and_overflow() {
        let mut cpu = Cpu::new();
        // LDA #$D0; ADC #$90; BRK
        cpu.load_and_run(&[0xA9, 0xD0, 0x69, 0x90, 0x00]).unwrap();
        assert_eq!(cpu.a(), 0x60);
        assert!(cpu.get_flag(CARRY));
        assert!(cpu.get_flag(OVERFLOW));
    }

    #[test]
    fn transfer_then_increment() {
        let mut cpu = Cpu::new();
        // LDA #$C0; TAX; INX; BRK
        cpu.load_and_run(&[0xA9, 0xC0, 0xAA, 0xE8, 0x00]).unwrap();
        assert_eq!(cpu.x(), 0xC1);
    }

    #[test]
    fn inx_overflow_wraps_to_one() {
        let mut cpu = Cpu::new();
        // LDX #$FF; INX; INX; BRK
        cpu.load_and_run(&[0xA2, 0xFF, 0xE8, 0xE8, 0x00]).unwrap();
        assert_eq!(cpu.x(), 0x01);
        assert!(!cpu.get_flag(ZERO));
    }

    #[test]
    fn unknown_opcode_stops_the_run() {
        let mut cpu = Cpu::new();
        let err = cpu.load_and_run(&[0xA9, 0x01, 0x02]).unwrap_err();
        match err {
            CpuError::UnknownOpcode { opcode, pc } => {
                assert_eq!(opcode, 0x02);
                assert_eq!(pc, PROGRAM_BASE + 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(cpu.is_halted());
        assert_eq!(cpu.a(), 0x01); // work before the bad byte sticks
    }

    #[test]
    fn cycles_accumulate_across_steps() {
        let mut cpu = Cpu::new();
        cpu.load(&[0xA9, 0x01, 0xEA, 0x00]).unwrap();
        cpu.reset();
        cpu.step().unwrap(); // LDA # = 2
        cpu.step().unwrap(); // NOP   = 2
        cpu.step().unwrap(); // BRK   = 7
        assert_eq!(cpu.cycles(), 11);
    }

    #[test]
    fn reset_keeps_memory_and_cycles() {
        let mut cpu = Cpu::new();
        cpu.mem_write(0x0010, 0x42);
        cpu.load_and_run(&[0xA9, 0x05, 0x00]).unwrap();
        let cycles = cpu.cycles();
        cpu.reset();
        assert_eq!(cpu.a(), 0);
        assert!(!cpu.is_halted());
        assert_eq!(cpu.pc(), PROGRAM_BASE);
        assert_eq!(cpu.mem_read(0x0010), 0x42);
        assert_eq!(cpu.cycles(), cycles);
    }

    #[test]
    fn load_at_alternate_origin() {
        let mut cpu = Cpu::new();
        cpu.load_at(&[0xA9, 0x07, 0x00], 0x8000).unwrap();
        cpu.reset();
        assert_eq!(cpu.pc(), 0x8000);
        cpu.run().unwrap();
        assert_eq!(cpu.a(), 0x07);
    }

    #[test]
    fn store_load_through_memory() {
        let mut cpu = Cpu::new();
        // LDA #$AA; STA $0200; LDX $0200; BRK
        cpu.load_and_run(&[0xA9, 0xAA, 0x8D, 0x00, 0x02, 0xAE, 0x00, 0x02, 0x00])
            .unwrap();
        assert_eq!(cpu.mem_read(0x0200), 0xAA);
        assert_eq!(cpu.x(), 0xAA);
    }
}
