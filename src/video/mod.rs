/*!
video::mod - Palette decode and framebuffer rendering for the video page.

Overview
========
The CPU core knows nothing about graphics; by convention guest programs
treat memory $0200-$05FF as a 32x32 frame, one palette index byte per
pixel in row-major order. This module reads that region and produces RGB
bytes. It is pure and always compiled; the windowed presentation and PNG
capture layers sit behind the `display` / `screenshot` features.

Palette
=======
Nine colors. Indices 0 and 1 are black and white; 2..=7 repeat at 9..=14
(so the low-contrast band maps twice); everything else renders cyan.
*/

pub mod display;
pub mod screenshot;

use crate::memory::{Memory, VIDEO_BASE, VIDEO_SIZE};

/// Frame width in pixels.
pub const FRAME_WIDTH: u32 = 32;
/// Frame height in pixels.
pub const FRAME_HEIGHT: u32 = 32;
/// Bytes per rendered RGB frame.
pub const FRAME_RGB_LEN: usize = VIDEO_SIZE * 3;

pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];
pub const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];
pub const GRAY: [u8; 3] = [0xAA, 0xAA, 0xAA];
pub const RED: [u8; 3] = [0xFF, 0x00, 0x00];
pub const GREEN: [u8; 3] = [0x00, 0xFF, 0x00];
pub const BLUE: [u8; 3] = [0x00, 0x00, 0xFF];
pub const MAGENTA: [u8; 3] = [0xFF, 0x00, 0xFF];
pub const YELLOW: [u8; 3] = [0xFF, 0xFF, 0x00];
pub const CYAN: [u8; 3] = [0x00, 0xFF, 0xFF];

/// Map a palette index byte to its RGB triple.
#[inline]
pub fn color(index: u8) -> [u8; 3] {
    match index {
        0 => BLACK,
        1 => WHITE,
        2 | 9 => GRAY,
        3 | 10 => RED,
        4 | 11 => GREEN,
        5 | 12 => BLUE,
        6 | 13 => MAGENTA,
        7 | 14 => YELLOW,
        _ => CYAN,
    }
}

/// Render the video page into an RGB byte buffer of `FRAME_RGB_LEN` bytes.
///
/// Reads one palette index per pixel starting at `VIDEO_BASE`, row-major.
/// The buffer length is the caller's contract; a short buffer panics in
/// debug builds via the slice write.
pub fn render_frame(memory: &Memory, frame: &mut [u8]) {
    debug_assert!(frame.len() >= FRAME_RGB_LEN);
    let page = memory.region(VIDEO_BASE, VIDEO_SIZE);
    for (i, &index) in page.iter().enumerate() {
        frame[i * 3..i * 3 + 3].copy_from_slice(&color(index));
    }
}
