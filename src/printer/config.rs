//! # Printer Configuration
//!
//! Hardware profiles for the two printers a shop counter drives.
//!
//! ## Supported Profiles
//!
//! | Profile | Width (dots) | Height | Resolution | Cutter |
//! |---------|--------------|--------|------------|--------|
//! | LABEL_40X30 | 320 | 240 dots | 203 DPI | no |
//! | RECEIPT_80MM | 540 | continuous | 203 DPI | yes |
//!
//! ## Usage
//!
//! ```
//! use dokondor_print::printer::PrinterConfig;
//!
//! let config = PrinterConfig::RECEIPT_80MM;
//! println!("Print width: {} dots ({} bytes)",
//!          config.width_dots,
//!          config.width_bytes());
//! ```

/// # Printer Configuration
///
/// Defines the hardware characteristics of a thermal printer.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
///
/// For a 40mm × 30mm label at 203 DPI:
///   dots_per_mm = 203 / 25.4 ≈ 8
///   320 × 240 dots
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Profile name
    pub name: &'static str,

    /// Printable width in dots (pixels)
    pub width_dots: u16,

    /// Fixed media height in dots; `None` for continuous roll paper
    pub height_dots: Option<u16>,

    /// Resolution in dots per inch
    pub dpi: u16,

    /// Maximum rows per raster command
    pub max_chunk_rows: u16,

    /// Whether the printer has an auto-cutter
    pub cutter: bool,
}

impl PrinterConfig {
    /// # 40mm × 30mm Label Printer
    ///
    /// ```text
    /// ├──────── 40mm ────────┤
    /// │       320 dots       │ 30mm = 240 dots
    /// ```
    pub const LABEL_40X30: Self = Self {
        name: "Label 40x30",
        width_dots: 320,
        height_dots: Some(240),
        dpi: 203,
        max_chunk_rows: 256,
        cutter: false,
    };

    /// # 80mm Receipt Printer
    ///
    /// 540 dots is the safe printable width on 80mm paper.
    pub const RECEIPT_80MM: Self = Self {
        name: "Receipt 80mm",
        width_dots: 540,
        height_dots: None,
        dpi: 203,
        max_chunk_rows: 256,
        cutter: true,
    };

    /// Print width in bytes, rounded up to whole bytes
    #[inline]
    pub fn width_bytes(&self) -> u16 {
        self.width_dots.div_ceil(8)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::RECEIPT_80MM
    }
}

// ============================================================================
// TESTS
// ============================================================================
