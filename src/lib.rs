//! # Dokondor Print - Label and Receipt Printing
//!
//! Prints EAN-8 product labels and POS receipts on 203 DPI thermal
//! printers. It provides:
//!
//! - **Barcodes**: EAN-8 module patterns
//! - **Receipts**: payment classification, item parsing, heading lines
//! - **Layout**: device-independent pages of draw operations
//! - **Rendering**: 1-bit canvas with bitmap fonts, PNG previews
//! - **Protocol + transport**: StarPRNT raster jobs over a device file
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dokondor_print::{
//!     barcode::ean8,
//!     label,
//!     printer::{PrintJob, PrinterConfig},
//! };
//!
//! let pattern = ean8::encode("55123457")?;
//! let page = label::layout(&pattern, "Non 500g");
//!
//! let mut job = PrintJob::open(Path::new("/dev/usb/lp0"), PrinterConfig::LABEL_40X30, "label")?;
//! job.print_page(&page)?;
//! job.finish()?;
//!
//! # Ok::<(), dokondor_print::PrintError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`barcode`] | EAN-8 encoder |
//! | [`receipt`] | Receipt model and layout |
//! | [`label`] | Label layout |
//! | [`page`] | Draw operations and the `Surface` trait |
//! | [`render`] | Bitmap canvas |
//! | [`protocol`] | StarPRNT command builders |
//! | [`transport`] | Communication backends |
//! | [`printer`] | Printer configurations and print jobs |
//! | [`cli`] | Argument handling shared by the binaries |
//! | [`error`] | Error types |

pub mod barcode;
pub mod cli;
pub mod error;
pub mod label;
pub mod page;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::PrintError;
pub use page::Page;
pub use printer::PrinterConfig;
