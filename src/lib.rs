#![doc = r#"
MOS 6502 instruction-execution core.

This crate exposes the emulator core modules for use by binaries and tests.

Modules:
- cpu: 6502 CPU core (facade + state + opcode table + dispatch + execute)
- memory: flat 64 KiB address space, region constants, program loading
- error: error taxonomy shared by loading and execution
- video: 32x32 framebuffer palette decode over the $0200 video page
  (windowed display and PNG capture behind the `display` / `screenshot`
  features)
"#]

pub mod cpu;
pub mod error;
pub mod memory;
pub mod video;

// Re-export commonly used types at the crate root for convenience.
pub use cpu::core::Cpu;
pub use cpu::state::CpuState;
pub use error::CpuError;
pub use memory::Memory;
