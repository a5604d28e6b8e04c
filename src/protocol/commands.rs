//! # StarPRNT Control Commands
//!
//! The handful of printer control sequences a label or receipt job needs:
//! reset at the start, feed and cut at the end.
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix, used as `ESC GS`
pub const GS: u8 = 0x1D;

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on state. Sent at the start of every job.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | Hex     | 1B 40 |
///
/// ```
/// use dokondor_print::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// # Feed to Cut Position, Then Full Cut (ESC d 2)
///
/// Feeds so the last printed line clears the cutter, then cuts.
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | Hex     | 1B 64 02 |
#[inline]
pub fn cut_full_feed() -> Vec<u8> {
    vec![ESC, b'd', 2]
}

/// # Micro Feed (ESC J n)
///
/// Feeds paper forward by n/4 millimeters.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 4A n |
#[inline]
pub fn feed_units(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// Feed paper by millimeters, clamped to the 0–63.75mm range of `ESC J`.
///
/// ```
/// use dokondor_print::protocol::commands;
///
/// assert_eq!(commands::feed_mm(5.0), vec![0x1B, 0x4A, 20]);
/// ```
#[inline]
pub fn feed_mm(mm: f32) -> Vec<u8> {
    let units = (mm * 4.0).round().clamp(0.0, 255.0) as u8;
    feed_units(units)
}

/// Encode a u16 value as little-endian bytes [low, high]
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}
