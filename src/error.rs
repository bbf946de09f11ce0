/*!
error.rs - Error taxonomy for the execution core.

All three variants are fatal to the current `run` invocation: the execution
loop halts and a fresh load/reset is required to continue. Flag and register
updates in the nominal instruction path are total functions and never error.

`UnknownOpcode` and `UnknownInstruction` are deliberately distinct: the first
means the opcode byte has no table entry at all, the second means the table
produced a mnemonic that no dispatch family claims. Externally both look like
a halted CPU, but diagnostics should not conflate a hole in the table with a
hole in the dispatcher.
*/

use thiserror::Error;

use crate::cpu::opcodes::Mnemonic;

/// Errors surfaced by program loading and instruction execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The opcode byte fetched at `pc` has no entry in the instruction table.
    #[error("unknown opcode 0x{opcode:02X} at 0x{pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    /// The instruction table produced a mnemonic no dispatch family handles.
    #[error("no handler for mnemonic {mnemonic:?}")]
    UnknownInstruction { mnemonic: Mnemonic },

    /// The program image would overwrite the vector region at the top of
    /// memory. Reported before any byte is copied.
    #[error("program of {len} bytes exceeds the {capacity} bytes available before the vector region")]
    ProgramTooLarge { len: usize, capacity: usize },
}
