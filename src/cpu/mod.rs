/*!
cpu::mod - Public façade for the 6502 CPU core.

Module layout:

```text
    state.rs        - Register file, status flags, stack discipline.
    opcodes.rs      - Mnemonic enum and the static 256-entry opcode table.
    addressing.rs   - Addressing mode enum & operand resolution.
    execute.rs      - Instruction semantic helpers (ALU, stack, RMW, branch).
    dispatch/       - Family handlers plus the per-step orchestrator.
    core.rs         - `Cpu`: the facade owning state + memory that embedders
                      drive via `load` / `reset` / `step` / `run`.
```

The public surface is the `Cpu` facade plus the types needed to inspect it
(`CpuState`, the flag mask constants, `AddressingMode`, `Mnemonic`).
Internal module organization may evolve; downstream code should stick to
the facade.

Usage:
```rust
use mos_core::Cpu;

let mut cpu = Cpu::new();
cpu.load_and_run(&[0xA9, 0x01, 0x00])?;
assert_eq!(cpu.a(), 0x01);
# Ok::<(), mos_core::CpuError>(())
```
*/

pub mod addressing;
pub mod core;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod opcodes;
pub mod state;

pub use addressing::AddressingMode;
pub use core::Cpu;
pub use opcodes::{Mnemonic, OpcodeInfo};
pub use state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
