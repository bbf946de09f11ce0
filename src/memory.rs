/*!
memory.rs - Flat 64 KiB byte-addressable memory and program loading.

Address map (by convention, not enforcement):
- $0000-$00FF: zero page (fast-addressed scratch data)
- $0100-$01FF: stack page (SP is the low-byte offset into this page)
- $0200-$05FF: video region (one palette index per pixel, 32x32)
- $0600-     : default program load area ($8000 also common; see `load_at`)
- $FFFA-$FFFF: vector region (NMI, reset, IRQ/BRK)

Every 16-bit address is a valid index, so reads and writes are total and
never fail. Writes outside the conventional regions are legal and unguarded;
the CPU is the sole writer while a run is in progress.

Word access is little-endian: low byte at `addr`, high byte at `addr + 1`.
*/

use crate::error::CpuError;

/// Total addressable memory (the full 16-bit space).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// Base address of the stack page.
pub const STACK_PAGE: u16 = 0x0100;

/// First byte of the video region read by the presentation adapter.
pub const VIDEO_BASE: u16 = 0x0200;

/// Size of the video region in bytes (32 * 32 pixels).
pub const VIDEO_SIZE: usize = 0x0400;

/// Default base address for loaded programs.
pub const PROGRAM_BASE: u16 = 0x0600;

/// First byte of the vector region; program images must end below this.
pub const VECTOR_BASE: u16 = 0xFFFA;

/// Address of the 16-bit reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the 16-bit IRQ/BRK vector (reserved, not dispatched to).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Flat 64 KiB memory, heap-allocated, zero-initialized.
#[derive(Debug, Clone)]
pub struct Memory {
    // Always exactly MEMORY_SIZE bytes, so u16 indexing cannot go out of bounds.
    data: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Create a new memory instance initialized to 0.
    pub fn new() -> Self {
        Self {
            data: vec![0u8; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Clear all memory to 0.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Read a byte. Total over the full 16-bit address space.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Write a byte. Total over the full 16-bit address space.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Read a little-endian word. The high byte wraps to $0000 when
    /// `addr` is $FFFF.
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write a little-endian word (low byte at `addr`).
    #[inline]
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, value as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copy `program` into memory at the default program base and point the
    /// reset vector at it.
    ///
    /// Fails with `ProgramTooLarge` before any byte is copied if the image
    /// would reach the vector region.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.load_at(program, PROGRAM_BASE)
    }

    /// Copy `program` into memory starting at `base` and write `base` into
    /// the reset vector, so a subsequent reset lands on the program.
    pub fn load_at(&mut self, program: &[u8], base: u16) -> Result<(), CpuError> {
        let capacity = (VECTOR_BASE - base) as usize;
        if program.len() > capacity {
            return Err(CpuError::ProgramTooLarge {
                len: program.len(),
                capacity,
            });
        }
        let start = base as usize;
        self.data[start..start + program.len()].copy_from_slice(program);
        self.write_word(RESET_VECTOR, base);
        Ok(())
    }

    /// Borrow a conventional region as a slice (used by the video adapter).
    pub fn region(&self, base: u16, len: usize) -> &[u8] {
        let start = base as usize;
        &self.data[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memory_is_zeroed() {
        let mem = Memory::new();
        assert_eq!(mem.read(0x0000), 0);
        assert_eq!(mem.read(0xFFFF), 0);
    }

    #[test]
    fn byte_round_trip() {
        let mut mem = Memory::new();
        mem.write(0x1234, 0xAB);
        assert_eq!(mem.read(0x1234), 0xAB);
    }

    #[test]
    fn word_access_is_little_endian() {
        let mut mem = Memory::new();
        mem.write_word(0x0600, 0xBEEF);
        assert_eq!(mem.read(0x0600), 0xEF);
        assert_eq!(mem.read(0x0601), 0xBE);
        assert_eq!(mem.read_word(0x0600), 0xBEEF);
    }

    #[test]
    fn read_word_wraps_high_byte_at_top_of_memory() {
        let mut mem = Memory::new();
        mem.write(0xFFFF, 0x34);
        mem.write(0x0000, 0x12);
        assert_eq!(mem.read_word(0xFFFF), 0x1234);
    }

    #[test]
    fn load_places_program_and_sets_reset_vector() {
        let mut mem = Memory::new();
        mem.load(&[0xA9, 0x10, 0x00]).unwrap();
        assert_eq!(mem.read(PROGRAM_BASE), 0xA9);
        assert_eq!(mem.read(PROGRAM_BASE + 1), 0x10);
        assert_eq!(mem.read_word(RESET_VECTOR), PROGRAM_BASE);
    }

    #[test]
    fn load_at_alternate_base() {
        let mut mem = Memory::new();
        mem.load_at(&[0xEA, 0x00], 0x8000).unwrap();
        assert_eq!(mem.read(0x8000), 0xEA);
        assert_eq!(mem.read_word(RESET_VECTOR), 0x8000);
    }

    #[test]
    fn oversized_program_is_rejected_untouched() {
        let mut mem = Memory::new();
        let too_big = vec![0xFF; (VECTOR_BASE - PROGRAM_BASE) as usize + 1];
        let err = mem.load(&too_big).unwrap_err();
        assert!(matches!(err, CpuError::ProgramTooLarge { .. }));
        // Nothing was copied and the reset vector is untouched.
        assert_eq!(mem.read(PROGRAM_BASE), 0);
        assert_eq!(mem.read_word(RESET_VECTOR), 0);
    }

    #[test]
    fn largest_fitting_program_is_accepted() {
        let mut mem = Memory::new();
        let max = vec![0xEA; (VECTOR_BASE - PROGRAM_BASE) as usize];
        mem.load(&max).unwrap();
        assert_eq!(mem.read(VECTOR_BASE - 1), 0xEA);
        assert_eq!(mem.read(VECTOR_BASE), 0);
    }
}
