//! # Rendering Module
//!
//! Turns a [`Page`](crate::page::Page) into pixels.
//!
//! ## Modules
//!
//! - [`canvas`]: 1-bit canvas implementing the drawing surface
//! - [`font`]: Spleen bitmap glyphs scaled to the requested text size
//!
//! ## Usage Example
//!
//! ```
//! use dokondor_print::page::{Alignment, Page, Rect, TextStyle};
//! use dokondor_print::render::Canvas;
//!
//! let mut page = Page::new("demo", 320);
//! page.height = 40;
//! page.text(Rect::new(0, 10, 320, 20), "Choy", TextStyle::bold(14), Alignment::Center);
//!
//! let canvas = Canvas::render(&page);
//! let raster = canvas.to_raster();
//! assert_eq!(raster.width_bytes(), 40);
//! ```

pub mod canvas;
pub mod font;

pub use canvas::{Canvas, RawRaster};
