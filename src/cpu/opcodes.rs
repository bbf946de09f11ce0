/*!
opcodes.rs - Static instruction table for the 151 documented 6502 opcodes.

Overview
========
Maps each one-byte opcode to an immutable descriptor:
  { mnemonic, addressing mode, instruction length in bytes, base cycle cost }

The table is a plain `static` built once at compile time and shared by every
CPU instance; it is never mutated, so no synchronization is needed.

Undocumented/illegal opcodes are `None`; fetching one surfaces as
`CpuError::UnknownOpcode` in the execution engine.

Cycle counts are base costs only. Page-cross and branch-taken penalties are
deliberately not modeled, and decimal mode is not implemented.
*/

use crate::cpu::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// Immutable per-opcode descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub mnemonic: Mnemonic,
    pub mode: AddressingMode,
    /// Instruction length in bytes, opcode included.
    pub bytes: u8,
    /// Base cycle cost (no penalties).
    pub cycles: u8,
}

/// Look up the descriptor for an opcode byte. `None` means the opcode is
/// undocumented and not part of this core.
#[inline]
pub fn fetch(opcode: u8) -> Option<OpcodeInfo> {
    OPCODE_TABLE[opcode as usize]
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, bytes: u8, cycles: u8) -> Option<OpcodeInfo> {
    Some(OpcodeInfo {
        mnemonic,
        mode,
        bytes,
        cycles,
    })
}

/// The 256-entry opcode table, indexed by opcode byte.
pub static OPCODE_TABLE: [Option<OpcodeInfo>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut t: [Option<OpcodeInfo>; 256] = [None; 256];

    // System
    t[0x00] = op(Brk, Implied, 1, 7);
    t[0xEA] = op(Nop, Implied, 1, 2);

    // Loads
    t[0xA9] = op(Lda, Immediate, 2, 2);
    t[0xA5] = op(Lda, ZeroPage, 2, 3);
    t[0xB5] = op(Lda, ZeroPageX, 2, 4);
    t[0xAD] = op(Lda, Absolute, 3, 4);
    t[0xBD] = op(Lda, AbsoluteX, 3, 4);
    t[0xB9] = op(Lda, AbsoluteY, 3, 4);
    t[0xA1] = op(Lda, IndirectX, 2, 6);
    t[0xB1] = op(Lda, IndirectY, 2, 5);

    t[0xA2] = op(Ldx, Immediate, 2, 2);
    t[0xA6] = op(Ldx, ZeroPage, 2, 3);
    t[0xB6] = op(Ldx, ZeroPageY, 2, 4);
    t[0xAE] = op(Ldx, Absolute, 3, 4);
    t[0xBE] = op(Ldx, AbsoluteY, 3, 4);

    t[0xA0] = op(Ldy, Immediate, 2, 2);
    t[0xA4] = op(Ldy, ZeroPage, 2, 3);
    t[0xB4] = op(Ldy, ZeroPageX, 2, 4);
    t[0xAC] = op(Ldy, Absolute, 3, 4);
    t[0xBC] = op(Ldy, AbsoluteX, 3, 4);

    // Stores
    t[0x85] = op(Sta, ZeroPage, 2, 3);
    t[0x95] = op(Sta, ZeroPageX, 2, 4);
    t[0x8D] = op(Sta, Absolute, 3, 4);
    t[0x9D] = op(Sta, AbsoluteX, 3, 5);
    t[0x99] = op(Sta, AbsoluteY, 3, 5);
    t[0x81] = op(Sta, IndirectX, 2, 6);
    t[0x91] = op(Sta, IndirectY, 2, 6);

    t[0x86] = op(Stx, ZeroPage, 2, 3);
    t[0x96] = op(Stx, ZeroPageY, 2, 4);
    t[0x8E] = op(Stx, Absolute, 3, 4);

    t[0x84] = op(Sty, ZeroPage, 2, 3);
    t[0x94] = op(Sty, ZeroPageX, 2, 4);
    t[0x8C] = op(Sty, Absolute, 3, 4);

    // Register transfers
    t[0xAA] = op(Tax, Implied, 1, 2);
    t[0xA8] = op(Tay, Implied, 1, 2);
    t[0xBA] = op(Tsx, Implied, 1, 2);
    t[0x8A] = op(Txa, Implied, 1, 2);
    t[0x9A] = op(Txs, Implied, 1, 2);
    t[0x98] = op(Tya, Implied, 1, 2);

    // Stack
    t[0x48] = op(Pha, Implied, 1, 3);
    t[0x08] = op(Php, Implied, 1, 3);
    t[0x68] = op(Pla, Implied, 1, 4);
    t[0x28] = op(Plp, Implied, 1, 4);

    // Arithmetic
    t[0x69] = op(Adc, Immediate, 2, 2);
    t[0x65] = op(Adc, ZeroPage, 2, 3);
    t[0x75] = op(Adc, ZeroPageX, 2, 4);
    t[0x6D] = op(Adc, Absolute, 3, 4);
    t[0x7D] = op(Adc, AbsoluteX, 3, 4);
    t[0x79] = op(Adc, AbsoluteY, 3, 4);
    t[0x61] = op(Adc, IndirectX, 2, 6);
    t[0x71] = op(Adc, IndirectY, 2, 5);

    t[0xE9] = op(Sbc, Immediate, 2, 2);
    t[0xE5] = op(Sbc, ZeroPage, 2, 3);
    t[0xF5] = op(Sbc, ZeroPageX, 2, 4);
    t[0xED] = op(Sbc, Absolute, 3, 4);
    t[0xFD] = op(Sbc, AbsoluteX, 3, 4);
    t[0xF9] = op(Sbc, AbsoluteY, 3, 4);
    t[0xE1] = op(Sbc, IndirectX, 2, 6);
    t[0xF1] = op(Sbc, IndirectY, 2, 5);

    // Logical
    t[0x29] = op(And, Immediate, 2, 2);
    t[0x25] = op(And, ZeroPage, 2, 3);
    t[0x35] = op(And, ZeroPageX, 2, 4);
    t[0x2D] = op(And, Absolute, 3, 4);
    t[0x3D] = op(And, AbsoluteX, 3, 4);
    t[0x39] = op(And, AbsoluteY, 3, 4);
    t[0x21] = op(And, IndirectX, 2, 6);
    t[0x31] = op(And, IndirectY, 2, 5);

    t[0x09] = op(Ora, Immediate, 2, 2);
    t[0x05] = op(Ora, ZeroPage, 2, 3);
    t[0x15] = op(Ora, ZeroPageX, 2, 4);
    t[0x0D] = op(Ora, Absolute, 3, 4);
    t[0x1D] = op(Ora, AbsoluteX, 3, 4);
    t[0x19] = op(Ora, AbsoluteY, 3, 4);
    t[0x01] = op(Ora, IndirectX, 2, 6);
    t[0x11] = op(Ora, IndirectY, 2, 5);

    t[0x49] = op(Eor, Immediate, 2, 2);
    t[0x45] = op(Eor, ZeroPage, 2, 3);
    t[0x55] = op(Eor, ZeroPageX, 2, 4);
    t[0x4D] = op(Eor, Absolute, 3, 4);
    t[0x5D] = op(Eor, AbsoluteX, 3, 4);
    t[0x59] = op(Eor, AbsoluteY, 3, 4);
    t[0x41] = op(Eor, IndirectX, 2, 6);
    t[0x51] = op(Eor, IndirectY, 2, 5);

    t[0x24] = op(Bit, ZeroPage, 2, 3);
    t[0x2C] = op(Bit, Absolute, 3, 4);

    // Compare
    t[0xC9] = op(Cmp, Immediate, 2, 2);
    t[0xC5] = op(Cmp, ZeroPage, 2, 3);
    t[0xD5] = op(Cmp, ZeroPageX, 2, 4);
    t[0xCD] = op(Cmp, Absolute, 3, 4);
    t[0xDD] = op(Cmp, AbsoluteX, 3, 4);
    t[0xD9] = op(Cmp, AbsoluteY, 3, 4);
    t[0xC1] = op(Cmp, IndirectX, 2, 6);
    t[0xD1] = op(Cmp, IndirectY, 2, 5);

    t[0xE0] = op(Cpx, Immediate, 2, 2);
    t[0xE4] = op(Cpx, ZeroPage, 2, 3);
    t[0xEC] = op(Cpx, Absolute, 3, 4);

    t[0xC0] = op(Cpy, Immediate, 2, 2);
    t[0xC4] = op(Cpy, ZeroPage, 2, 3);
    t[0xCC] = op(Cpy, Absolute, 3, 4);

    // Shifts / rotates
    t[0x0A] = op(Asl, Accumulator, 1, 2);
    t[0x06] = op(Asl, ZeroPage, 2, 5);
    t[0x16] = op(Asl, ZeroPageX, 2, 6);
    t[0x0E] = op(Asl, Absolute, 3, 6);
    t[0x1E] = op(Asl, AbsoluteX, 3, 7);

    t[0x4A] = op(Lsr, Accumulator, 1, 2);
    t[0x46] = op(Lsr, ZeroPage, 2, 5);
    t[0x56] = op(Lsr, ZeroPageX, 2, 6);
    t[0x4E] = op(Lsr, Absolute, 3, 6);
    t[0x5E] = op(Lsr, AbsoluteX, 3, 7);

    t[0x2A] = op(Rol, Accumulator, 1, 2);
    t[0x26] = op(Rol, ZeroPage, 2, 5);
    t[0x36] = op(Rol, ZeroPageX, 2, 6);
    t[0x2E] = op(Rol, Absolute, 3, 6);
    t[0x3E] = op(Rol, AbsoluteX, 3, 7);

    t[0x6A] = op(Ror, Accumulator, 1, 2);
    t[0x66] = op(Ror, ZeroPage, 2, 5);
    t[0x76] = op(Ror, ZeroPageX, 2, 6);
    t[0x6E] = op(Ror, Absolute, 3, 6);
    t[0x7E] = op(Ror, AbsoluteX, 3, 7);

    // Increment / decrement (memory)
    t[0xE6] = op(Inc, ZeroPage, 2, 5);
    t[0xF6] = op(Inc, ZeroPageX, 2, 6);
    t[0xEE] = op(Inc, Absolute, 3, 6);
    t[0xFE] = op(Inc, AbsoluteX, 3, 7);

    t[0xC6] = op(Dec, ZeroPage, 2, 5);
    t[0xD6] = op(Dec, ZeroPageX, 2, 6);
    t[0xCE] = op(Dec, Absolute, 3, 6);
    t[0xDE] = op(Dec, AbsoluteX, 3, 7);

    // Increment / decrement (register)
    t[0xE8] = op(Inx, Implied, 1, 2);
    t[0xC8] = op(Iny, Implied, 1, 2);
    t[0xCA] = op(Dex, Implied, 1, 2);
    t[0x88] = op(Dey, Implied, 1, 2);

    // Control flow
    t[0x4C] = op(Jmp, Absolute, 3, 3);
    t[0x6C] = op(Jmp, Indirect, 3, 5);
    t[0x20] = op(Jsr, Absolute, 3, 6);
    t[0x60] = op(Rts, Implied, 1, 6);
    t[0x40] = op(Rti, Implied, 1, 6);

    // Branches
    t[0x90] = op(Bcc, Relative, 2, 2);
    t[0xB0] = op(Bcs, Relative, 2, 2);
    t[0xF0] = op(Beq, Relative, 2, 2);
    t[0xD0] = op(Bne, Relative, 2, 2);
    t[0x30] = op(Bmi, Relative, 2, 2);
    t[0x10] = op(Bpl, Relative, 2, 2);
    t[0x50] = op(Bvc, Relative, 2, 2);
    t[0x70] = op(Bvs, Relative, 2, 2);

    // Flag manipulation
    t[0x18] = op(Clc, Implied, 1, 2);
    t[0xD8] = op(Cld, Implied, 1, 2);
    t[0x58] = op(Cli, Implied, 1, 2);
    t[0xB8] = op(Clv, Implied, 1, 2);
    t[0x38] = op(Sec, Implied, 1, 2);
    t[0xF8] = op(Sed, Implied, 1, 2);
    t[0x78] = op(Sei, Implied, 1, 2);

    t
};
