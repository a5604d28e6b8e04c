//! # StarPRNT Raster Graphics
//!
//! Both documents are printed as one rasterized image, so the only graphics
//! command needed is raster mode (`ESC GS S`).
//!
//! ## Bit Packing
//!
//! Each byte carries 8 horizontal dots:
//! - Bit 7 (MSB) = leftmost dot
//! - 1 = black (print), 0 = white
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! ```

use super::commands::{ESC, GS, u16_le};
use crate::render::RawRaster;

/// # Print Raster Graphics Data (ESC GS S m xL xH yL yH n d1...dk)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 1D 53 m xL xH yL yH n d1...dk |
///
/// - `m`: 1 (monochrome)
/// - `xL, xH`: width in bytes, little-endian
/// - `yL, yH`: height in dots, little-endian
/// - `n`: 0 (black)
///
/// ```
/// use dokondor_print::protocol::graphics;
///
/// let data = vec![0xAA; 40 * 10];
/// let cmd = graphics::raster(320, 10, &data);
/// assert_eq!(&cmd[0..9], &[0x1B, 0x1D, 0x53, 1, 40, 0, 10, 0, 0]);
/// ```
pub fn raster(width_dots: u16, height: u16, data: &[u8]) -> Vec<u8> {
    let width_bytes = width_dots.div_ceil(8);

    debug_assert!(
        data.len() == width_bytes as usize * height as usize,
        "Raster data length mismatch. Expected {} ({} bytes × {} rows), got {}",
        width_bytes as usize * height as usize,
        width_bytes,
        height,
        data.len()
    );

    let [xl, xh] = u16_le(width_bytes);
    let [yl, yh] = u16_le(height);

    let mut cmd = Vec::with_capacity(9 + data.len());
    cmd.extend_from_slice(&[ESC, GS, b'S', 1, xl, xh, yl, yh, 0]);
    cmd.extend_from_slice(data);
    cmd
}

/// Split a packed raster into `ESC GS S` commands of at most `max_rows` rows.
///
/// Long receipts overflow the printer's receive buffer in one command.
pub fn raster_chunks(image: &RawRaster, max_rows: u16) -> Vec<Vec<u8>> {
    let max_rows = max_rows.max(1) as usize;
    let width_bytes = image.width_bytes();
    let width_dots = image.width as u16;

    (0..image.height)
        .step_by(max_rows)
        .map(|start| {
            let end = (start + max_rows).min(image.height);
            let bytes = &image.data[start * width_bytes..end * width_bytes];
            raster(width_dots, (end - start) as u16, bytes)
        })
        .collect()
}
