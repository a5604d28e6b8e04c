//! Glyph generation for the raster canvas.
//!
//! Uses the Spleen bitmap font family. A text style asks for a cell height
//! in dots; the closest Spleen face is scaled nearest-neighbour to that
//! height, keeping its aspect ratio.
//!
//! | Requested size | Source face | Example cell |
//! |----------------|-------------|--------------|
//! | up to 16 dots  | 6x12        | 16 → 8x16    |
//! | above 16 dots  | 12x24       | 36 → 18x36   |

use spleen_font::{FONT_6X12, FONT_12X24, PSF2Font};

/// Glyph cell dimensions for a given text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub char_width: usize,
    pub char_height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Spleen6x12,
    Spleen12x24,
}

impl Face {
    fn for_size(size: u32) -> Self {
        if size <= 16 {
            Self::Spleen6x12
        } else {
            Self::Spleen12x24
        }
    }

    fn dims(self) -> (usize, usize) {
        match self {
            Self::Spleen6x12 => (6, 12),
            Self::Spleen12x24 => (12, 24),
        }
    }

    fn data(self) -> &'static [u8] {
        match self {
            Self::Spleen6x12 => FONT_6X12,
            Self::Spleen12x24 => FONT_12X24,
        }
    }
}

impl FontMetrics {
    /// Cell size for a style of `size` dots.
    pub fn for_size(size: u32) -> Self {
        let (src_w, src_h) = Face::for_size(size).dims();
        let char_height = (size as usize).max(1);
        let char_width = (src_w * char_height / src_h).max(1);
        Self {
            char_width,
            char_height,
        }
    }
}

/// Generate a glyph bitmap for a character at the given size.
/// Returns a Vec<u8> where each byte is 0 (white) or 1 (black).
pub fn generate_glyph(size: u32, ch: char) -> Vec<u8> {
    let metrics = FontMetrics::for_size(size);
    let face = Face::for_size(size);
    let (src_w, src_h) = face.dims();
    let mut glyph = vec![0u8; metrics.char_width * metrics.char_height];

    if ch == ' ' {
        return glyph;
    }

    let Ok(mut spleen) = PSF2Font::new(face.data()) else {
        draw_box(&mut glyph, metrics.char_width, metrics.char_height);
        return glyph;
    };

    let utf8_bytes = substitute(ch).to_string();
    match spleen.glyph_for_utf8(utf8_bytes.as_bytes()) {
        Some(spleen_glyph) => {
            let mut src_bitmap = vec![0u8; src_w * src_h];
            for (row_y, row) in spleen_glyph.enumerate() {
                for (col_x, on) in row.enumerate() {
                    if row_y < src_h && col_x < src_w {
                        src_bitmap[row_y * src_w + col_x] = if on { 1 } else { 0 };
                    }
                }
            }
            scale_bitmap(
                &src_bitmap,
                src_w,
                src_h,
                &mut glyph,
                metrics.char_width,
                metrics.char_height,
            );
        }
        None => draw_box(&mut glyph, metrics.char_width, metrics.char_height),
    }

    glyph
}

/// Map typographic variants onto glyphs the font has.
///
/// Uzbek Latin writes o‘ and g‘ with U+02BB or curly quotes; the receipt
/// fonts only carry the ASCII apostrophe.
fn substitute(ch: char) -> char {
    match ch {
        '\u{02BB}' | '\u{02BC}' | '\u{2018}' | '\u{2019}' | '`' => '\'',
        '\u{00A0}' => ' ',
        _ => ch,
    }
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(
    src: &[u8],
    src_w: usize,
    src_h: usize,
    dst: &mut [u8],
    dst_w: usize,
    dst_h: usize,
) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            let src_idx = sy * src_w + sx;
            let dst_idx = dy * dst_w + dx;
            if src_idx < src.len() && dst_idx < dst.len() {
                dst[dst_idx] = src[src_idx];
            }
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}
