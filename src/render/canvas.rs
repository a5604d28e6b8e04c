//! 1-bit raster canvas.
//!
//! Implements [`Surface`] by painting into a black/white pixel buffer the
//! size of the page. The buffer can be exported as a PNG preview or packed
//! into printer raster rows.

use std::collections::HashMap;
use std::path::Path;

use image::{GrayImage, Luma};

use super::font::{FontMetrics, generate_glyph};
use crate::error::PrintError;
use crate::page::{Alignment, Page, Rect, Surface, TextStyle};

/// Packed raster output for printing.
pub struct RawRaster {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Packed 1-bit pixel data (MSB first, 1 = black)
    pub data: Vec<u8>,
}

impl RawRaster {
    /// Bytes per row.
    pub fn width_bytes(&self) -> usize {
        self.width.div_ceil(8)
    }
}

/// Black-and-white drawing buffer.
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<u8>,
    glyph_cache: HashMap<(u32, char), Vec<u8>>,
}

impl Canvas {
    /// Create a white canvas. Zero dimensions are bumped to 1.
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            buffer: vec![0u8; width * height],
            glyph_cache: HashMap::new(),
        }
    }

    /// Create a canvas sized to the page and replay it.
    pub fn render(page: &Page) -> Self {
        let mut canvas = Self::new(page.width as usize, page.height as usize);
        page.replay(&mut canvas);
        log::debug!(
            "Rendered '{}' to {}x{} canvas, {} black pixels",
            page.name,
            canvas.width,
            canvas.height,
            canvas.black_pixels()
        );
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at (x, y) is black. Out of bounds is white.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.buffer[y * self.width + x] != 0
    }

    /// Count of black pixels.
    pub fn black_pixels(&self) -> usize {
        self.buffer.iter().filter(|&&p| p != 0).count()
    }

    /// Set a pixel black. Coordinates outside the canvas are ignored.
    fn set_pixel(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.buffer[y * self.width + x] = 1;
    }

    fn glyph(&mut self, size: u32, ch: char) -> &[u8] {
        self.glyph_cache
            .entry((size, ch))
            .or_insert_with(|| generate_glyph(size, ch))
    }

    /// Pack into 1-bit rows, MSB = leftmost dot.
    pub fn to_raster(&self) -> RawRaster {
        let width_bytes = self.width.div_ceil(8);
        let mut data = vec![0u8; width_bytes * self.height];

        for y in 0..self.height {
            for x in 0..self.width {
                if self.buffer[y * self.width + x] != 0 {
                    let byte_idx = y * width_bytes + x / 8;
                    let bit_idx = 7 - (x % 8);
                    data[byte_idx] |= 1 << bit_idx;
                }
            }
        }

        RawRaster {
            width: self.width,
            height: self.height,
            data,
        }
    }

    fn to_gray_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = if self.buffer[y * self.width + x] != 0 {
                    0u8
                } else {
                    255u8
                };
                img.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }
        img
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, PrintError> {
        use image::ImageEncoder;

        let img = self.to_gray_image();
        let mut png_bytes = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
        encoder
            .write_image(
                img.as_raw(),
                self.width as u32,
                self.height as u32,
                image::ExtendedColorType::L8,
            )
            .map_err(|e: image::ImageError| PrintError::Image(e.to_string()))?;

        Ok(png_bytes)
    }

    /// Save as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), PrintError> {
        self.to_gray_image()
            .save(path)
            .map_err(|e| PrintError::Image(format!("Failed to save PNG: {}", e)))
    }
}

impl Surface for Canvas {
    fn draw_text(&mut self, rect: Rect, text: &str, style: TextStyle, align: Alignment) {
        if text.is_empty() || rect.width <= 0 || rect.height <= 0 {
            return;
        }

        let metrics = FontMetrics::for_size(style.size);
        let char_width = metrics.char_width as i32;
        let char_height = metrics.char_height as i32;
        let chars: Vec<char> = text.chars().collect();
        let text_width = chars.len() as i32 * char_width;

        let start_x = if text_width >= rect.width {
            rect.x
        } else {
            match align {
                Alignment::Left => rect.x,
                Alignment::Center => rect.x + (rect.width - text_width) / 2,
                Alignment::Right => rect.right() - text_width,
            }
        };

        let clip_right = rect.right();
        let clip_bottom = rect.bottom().min(rect.y + char_height);
        let overstrike = if style.bold { 2 } else { 1 };

        for (i, ch) in chars.into_iter().enumerate() {
            let base_x = start_x + i as i32 * char_width;
            if base_x >= clip_right {
                break;
            }

            let glyph = self.glyph(style.size, ch).to_vec();
            for gy in 0..char_height {
                let py = rect.y + gy;
                if py >= clip_bottom {
                    break;
                }
                for gx in 0..char_width {
                    if glyph[(gy * char_width + gx) as usize] == 0 {
                        continue;
                    }
                    for dx in 0..overstrike {
                        let px = base_x + gx + dx;
                        if px < clip_right {
                            self.set_pixel(px, py);
                        }
                    }
                }
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set_pixel(x, y);
            }
        }
    }

    fn draw_rule(&mut self, x1: i32, x2: i32, y: i32, thickness: u32) {
        let thickness = thickness.max(1) as i32;
        let top = y - thickness / 2;
        let (left, right) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        self.fill_rect(Rect::new(left, top, right - left + 1, thickness));
    }
}
