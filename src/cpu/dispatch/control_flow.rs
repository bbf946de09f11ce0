/*!
control_flow.rs - Control-flow / system opcode family handler.

  JMP abs / (ind)   — assign PC directly (indirect vector already resolved,
                      page-wrap quirk included)
  JSR / RTS         — call/return pair: JSR pushes PC-1 (the address of the
                      JSR's last byte), RTS pops and adds 1
  RTI               — pop status, then PC (no interrupt entry is modeled,
                      but the return path is honored for guest code that
                      builds its own frames)
  BRK               — set the Break flag and halt the run loop; vector
                      dispatch is out of scope for this core

None of these fall through to the generic PC advance: resolution already
consumed the operand bytes and the handlers assign PC themselves where the
instruction requires it.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::plp;
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::{BREAK, CpuState};
use crate::memory::Memory;

pub(super) fn handle(
    op: OpcodeInfo,
    operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
) -> bool {
    match op.mnemonic {
        Mnemonic::Jmp => state.pc = operand.address(),
        Mnemonic::Jsr => {
            // PC already points past the operand; push the last byte of
            // this instruction so RTS can +1 back onto the next one.
            let ret = state.pc.wrapping_sub(1);
            state.push_u16(memory, ret);
            state.pc = operand.address();
        }
        Mnemonic::Rts => {
            let ret = state.pop_u16(memory);
            state.pc = ret.wrapping_add(1);
        }
        Mnemonic::Rti => {
            plp(state, memory);
            state.pc = state.pop_u16(memory);
        }
        Mnemonic::Brk => {
            state.assign_flag(BREAK, true);
            state.halt();
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::Cpu;
    use crate::cpu::state::{BREAK, CARRY};
    use crate::memory::PROGRAM_BASE;

    #[test]
    fn jmp_absolute_assigns_pc() {
        let mut cpu = Cpu::new();
        // JMP $0605; (garbage); LDA #$33; BRK
        cpu.load_and_run(&[0x4C, 0x05, 0x06, 0xFF, 0xFF, 0xA9, 0x33, 0x00])
            .unwrap();
        assert_eq!(cpu.a(), 0x33);
    }

    #[test]
    fn jmp_indirect_reads_vector() {
        let mut cpu = Cpu::new();
        cpu.mem_write_word(0x0250, PROGRAM_BASE + 5);
        // JMP ($0250); (skipped); LDA #$44; BRK
        cpu.load_and_run(&[0x6C, 0x50, 0x02, 0xFF, 0xFF, 0xA9, 0x44, 0x00])
            .unwrap();
        assert_eq!(cpu.a(), 0x44);
    }

    #[test]
    fn jsr_rts_round_trip() {
        let mut cpu = Cpu::new();
        // JSR $0606; LDA #$01; BRK; sub: LDX #$09; RTS
        cpu.load_and_run(&[0x20, 0x06, 0x06, 0xA9, 0x01, 0x00, 0xA2, 0x09, 0x60])
            .unwrap();
        assert_eq!(cpu.x(), 0x09); // subroutine ran
        assert_eq!(cpu.a(), 0x01); // and returned to the next instruction
    }

    #[test]
    fn jsr_pushes_address_of_last_instruction_byte() {
        let mut cpu = Cpu::new();
        cpu.load(&[0x20, 0x06, 0x06, 0x00, 0x00, 0x00, 0x60, 0x00]).unwrap();
        cpu.reset();
        let sp_before = cpu.sp();
        cpu.step().unwrap(); // JSR
        let pushed = cpu.mem_read_word(0x0100 | cpu.sp().wrapping_add(1) as u16);
        assert_eq!(pushed, PROGRAM_BASE + 2);
        assert_eq!(cpu.sp(), sp_before.wrapping_sub(2));
    }

    #[test]
    fn jsr_rts_preserves_registers_and_flags() {
        let mut cpu = Cpu::new();
        // SEC; LDA #$21; JSR $0608; BRK; sub: RTS
        cpu.load_and_run(&[0x38, 0xA9, 0x21, 0x20, 0x08, 0x06, 0x00, 0xFF, 0x60])
            .unwrap();
        assert_eq!(cpu.a(), 0x21);
        assert!(cpu.get_flag(CARRY));
    }

    #[test]
    fn rti_restores_status_then_pc() {
        let mut cpu = Cpu::new();
        cpu.load(&[0x40, 0x00, 0xA9, 0x66, 0x00]).unwrap();
        cpu.reset();
        // Hand-build an interrupt-style frame: return PC at the top of the
        // stack, status (carry set) below it, SP pointing underneath.
        let target = PROGRAM_BASE + 2;
        cpu.mem_write(0x01FD, (target >> 8) as u8);
        cpu.mem_write(0x01FC, target as u8);
        cpu.mem_write(0x01FB, CARRY);
        cpu.set_sp(0xFA);
        cpu.run().unwrap();
        assert_eq!(cpu.a(), 0x66);
        assert!(cpu.get_flag(CARRY));
    }

    #[test]
    fn brk_sets_break_flag_and_halts() {
        let mut cpu = Cpu::new();
        cpu.load_and_run(&[0x00]).unwrap();
        assert!(cpu.is_halted());
        assert!(cpu.get_flag(BREAK));
    }
}
