/*!
misc.rs - Register transfers, stack push/pop, flag set/clear, and NOP.

Everything here is implied-mode:
- TAX/TAY/TXA/TYA/TSX/TXS copy between registers (TXS updates no flags).
- PHA/PHP push to the stack; PLA/PLP pop (PLP masks the pushed BREAK bit).
- The seven flag instructions write exactly one status bit. SED and CLD
  toggle the DECIMAL flag even though arithmetic never consults it; CLI
  and SEI likewise store IRQ_DISABLE without any interrupt machinery
  behind it.
*/

use crate::cpu::addressing::Operand;
use crate::cpu::execute::{pha, php, pla, plp, tax, tay, tsx, txa, txs, tya};
use crate::cpu::opcodes::{Mnemonic, OpcodeInfo};
use crate::cpu::state::{CARRY, CpuState, DECIMAL, IRQ_DISABLE, OVERFLOW};
use crate::memory::Memory;

pub(super) fn handle(
    op: OpcodeInfo,
    _operand: Operand,
    state: &mut CpuState,
    memory: &mut Memory,
) -> bool {
    match op.mnemonic {
        Mnemonic::Tax => tax(state),
        Mnemonic::Tay => tay(state),
        Mnemonic::Txa => txa(state),
        Mnemonic::Tya => tya(state),
        Mnemonic::Tsx => tsx(state),
        Mnemonic::Txs => txs(state),
        Mnemonic::Pha => pha(state, memory),
        Mnemonic::Php => php(state, memory),
        Mnemonic::Pla => pla(state, memory),
        Mnemonic::Plp => plp(state, memory),
        Mnemonic::Clc => state.assign_flag(CARRY, false),
        Mnemonic::Sec => state.assign_flag(CARRY, true),
        Mnemonic::Cld => state.assign_flag(DECIMAL, false),
        Mnemonic::Sed => state.assign_flag(DECIMAL, true),
        Mnemonic::Cli => state.assign_flag(IRQ_DISABLE, false),
        Mnemonic::Sei => state.assign_flag(IRQ_DISABLE, true),
        Mnemonic::Clv => state.assign_flag(OVERFLOW, false),
        Mnemonic::Nop => {}
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::Cpu;
    use crate::cpu::state::{BREAK, CARRY, DECIMAL, IRQ_DISABLE, NEGATIVE, UNUSED, ZERO};

    #[test]
    fn transfers_copy_and_flag() {
        let mut cpu = Cpu::new();
        // LDA #$C0; TAX; BRK
        cpu.load_and_run(&[0xA9, 0xC0, 0xAA, 0x00]).unwrap();
        assert_eq!(cpu.x(), 0xC0);
        assert!(cpu.get_flag(NEGATIVE));

        let mut cpu = Cpu::new();
        // LDX #$00; TXA; BRK
        cpu.load_and_run(&[0xA2, 0x00, 0x8A, 0x00]).unwrap();
        assert_eq!(cpu.a(), 0x00);
        assert!(cpu.get_flag(ZERO));
    }

    #[test]
    fn txs_and_tsx_move_the_stack_pointer() {
        let mut cpu = Cpu::new();
        // LDX #$80; TXS; LDX #$00; TSX; BRK
        cpu.load_and_run(&[0xA2, 0x80, 0x9A, 0xA2, 0x00, 0xBA, 0x00])
            .unwrap();
        assert_eq!(cpu.sp(), 0x80);
        assert_eq!(cpu.x(), 0x80);
        assert!(cpu.get_flag(NEGATIVE)); // from TSX, not TXS
    }

    #[test]
    fn pha_pla_round_trip() {
        let mut cpu = Cpu::new();
        // LDA #$5A; PHA; LDA #$00; PLA; BRK
        cpu.load_and_run(&[0xA9, 0x5A, 0x48, 0xA9, 0x00, 0x68, 0x00])
            .unwrap();
        assert_eq!(cpu.a(), 0x5A);
        assert!(!cpu.get_flag(ZERO));
    }

    #[test]
    fn php_pushes_break_and_unused_set() {
        let mut cpu = Cpu::new();
        // SEC; PHP; BRK
        cpu.load(&[0x38, 0x08, 0x00]).unwrap();
        cpu.reset();
        cpu.step().unwrap();
        cpu.step().unwrap();
        let pushed = cpu.mem_read(0x0100 | cpu.sp().wrapping_add(1) as u16);
        assert_ne!(pushed & CARRY, 0);
        assert_ne!(pushed & BREAK, 0);
        assert_ne!(pushed & UNUSED, 0);
    }

    #[test]
    fn plp_masks_break_but_restores_the_rest() {
        let mut cpu = Cpu::new();
        // SEC; PHP; CLC; PLP; BRK
        cpu.load(&[0x38, 0x08, 0x18, 0x28, 0x00]).unwrap();
        cpu.reset();
        for _ in 0..4 {
            cpu.step().unwrap();
        }
        assert!(cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(BREAK));
        assert!(cpu.get_flag(UNUSED));
    }

    #[test]
    fn flag_instructions_write_single_bits() {
        let mut cpu = Cpu::new();
        // SEC; SED; SEI; BRK
        cpu.load_and_run(&[0x38, 0xF8, 0x78, 0x00]).unwrap();
        assert!(cpu.get_flag(CARRY));
        assert!(cpu.get_flag(DECIMAL));
        assert!(cpu.get_flag(IRQ_DISABLE));

        let mut cpu = Cpu::new();
        // SEC; SED; CLC; CLD; CLI; BRK
        cpu.load_and_run(&[0x38, 0xF8, 0x18, 0xD8, 0x58, 0x00]).unwrap();
        assert!(!cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(DECIMAL));
        assert!(!cpu.get_flag(IRQ_DISABLE));
    }

    #[test]
    fn clv_clears_overflow() {
        let mut cpu = Cpu::new();
        // LDA #$50; ADC #$50 (V set); CLV; BRK
        cpu.load_and_run(&[0xA9, 0x50, 0x69, 0x50, 0xB8, 0x00]).unwrap();
        assert!(!cpu.get_flag(crate::cpu::state::OVERFLOW));
    }

    #[test]
    fn nop_changes_nothing_but_pc() {
        let mut cpu = Cpu::new();
        cpu.load(&[0xEA, 0x00]).unwrap();
        cpu.reset();
        let pc = cpu.pc();
        let status = cpu.status();
        cpu.step().unwrap();
        assert_eq!(cpu.pc(), pc + 1);
        assert_eq!(cpu.status(), status);
    }
}
