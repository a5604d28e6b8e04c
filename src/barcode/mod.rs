//! # Barcode Encoding
//!
//! Symbology encoders that turn payload text into bar/space module sequences.
//! Rendering is left to the caller: each module maps to one fixed-width
//! column that is either filled (bar) or skipped (space).
//!
//! ## Modules
//!
//! - [`ean8`]: EAN-8 two-table encoder

pub mod ean8;

pub use ean8::Ean8Pattern;
