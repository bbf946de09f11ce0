/*!
video::screenshot - PNG capture of the video page (feature `screenshot`).
*/
#![cfg(feature = "screenshot")]

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::memory::{Memory, VIDEO_BASE};
use crate::video::{FRAME_HEIGHT, FRAME_WIDTH, color};

/// Render the video page and save it as a PNG (format inferred from the
/// path extension, as `image` does).
pub fn save_frame(memory: &Memory, path: &Path) -> Result<(), image::ImageError> {
    let mut img = RgbImage::new(FRAME_WIDTH, FRAME_HEIGHT);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let offset = (y * FRAME_WIDTH + x) as u16;
        let index = memory.read(VIDEO_BASE + offset);
        *pixel = Rgb(color(index));
    }
    img.save(path)
}
