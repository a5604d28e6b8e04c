//! # StarPRNT Protocol Implementation
//!
//! Low-level command builders for Star Micronics thermal printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Basic printer commands (init, cut, feed)
//! - [`graphics`]: Raster graphics
//!
//! ## Usage Example
//!
//! ```
//! use dokondor_print::protocol::{commands, graphics};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(graphics::raster(320, 1, &[0xAA; 40]));
//! data.extend(commands::cut_full_feed());
//! ```

pub mod commands;
pub mod graphics;
