//! # EAN-8 Encoder
//!
//! Builds the 67-module bar pattern for an 8-digit payload.
//!
//! ## Structure
//!
//! ```text
//! ┌─────┬───────────────────┬───────┬───────────────────┬─────┐
//! │ 101 │ 4 × L-code (7 bit)│ 01010 │ 4 × R-code (7 bit)│ 101 │
//! └─────┴───────────────────┴───────┴───────────────────┴─────┘
//!   3          28              5           28             3   = 67 modules
//! ```
//!
//! All eight digits are encoded as data. The last digit is not recomputed or
//! enforced as a check digit; [`Ean8Pattern::has_valid_check_digit`] only
//! reports whether it happens to match.
//!
//! ## Example
//!
//! ```
//! use dokondor_print::barcode::ean8;
//!
//! let pattern = ean8::encode("55123457")?;
//! assert_eq!(pattern.modules().len(), 67);
//! assert!(pattern.to_bit_string().starts_with("101"));
//! # Ok::<(), dokondor_print::PrintError>(())
//! ```

use crate::error::PrintError;

/// Total number of modules in an EAN-8 symbol.
pub const MODULE_COUNT: usize = 67;

/// Number of payload digits.
pub const DIGIT_COUNT: usize = 8;

const START_GUARD: [bool; 3] = [true, false, true];
const CENTER_GUARD: [bool; 5] = [false, true, false, true, false];
const END_GUARD: [bool; 3] = [true, false, true];

/// L-code (odd parity) patterns for the left half, indexed by digit value.
static L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011, //
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

/// R-code patterns for the right half, indexed by digit value.
/// Each entry is the bitwise complement of the matching L-code.
static R_CODES: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100, //
    0b1001110, 0b1010000, 0b1000100, 0b1001000, 0b1110100,
];

/// A complete EAN-8 module sequence.
///
/// `true` is a bar, `false` is a space. Only constructed through [`encode`],
/// so a pattern always holds all 67 modules of a valid payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ean8Pattern {
    digits: [u8; DIGIT_COUNT],
    modules: [bool; MODULE_COUNT],
}

impl Ean8Pattern {
    /// Module sequence, left to right.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Render as a `'0'`/`'1'` string.
    pub fn to_bit_string(&self) -> String {
        self.modules
            .iter()
            .map(|&bar| if bar { '1' } else { '0' })
            .collect()
    }

    /// Digits separated by spaces, as printed under the bars.
    pub fn human_readable(&self) -> String {
        self.digits
            .iter()
            .map(|d| char::from(b'0' + d).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether the 8th digit equals the standard check digit of the first 7.
    pub fn has_valid_check_digit(&self) -> bool {
        let mut data = [0u8; 7];
        data.copy_from_slice(&self.digits[..7]);
        check_digit(&data) == self.digits[7]
    }
}

/// Check whether `code` is exactly 8 ASCII decimal digits.
pub fn is_valid(code: &str) -> bool {
    code.len() == DIGIT_COUNT && code.bytes().all(|b| b.is_ascii_digit())
}

/// Encode an 8-digit payload into its module sequence.
///
/// ## Errors
///
/// Returns [`PrintError::InvalidEan8`] unless `code` is exactly 8 decimal
/// digits. No partial pattern is produced.
pub fn encode(code: &str) -> Result<Ean8Pattern, PrintError> {
    if !is_valid(code) {
        return Err(PrintError::InvalidEan8(code.to_string()));
    }

    let mut digits = [0u8; DIGIT_COUNT];
    for (slot, b) in digits.iter_mut().zip(code.bytes()) {
        *slot = b - b'0';
    }

    let mut modules = [false; MODULE_COUNT];
    let mut pos = 0;

    let mut put = |bits: &[bool]| {
        modules[pos..pos + bits.len()].copy_from_slice(bits);
        pos += bits.len();
    };

    put(&START_GUARD);
    for &d in &digits[..4] {
        put(&expand(L_CODES[d as usize]));
    }
    put(&CENTER_GUARD);
    for &d in &digits[4..] {
        put(&expand(R_CODES[d as usize]));
    }
    put(&END_GUARD);

    Ok(Ean8Pattern { digits, modules })
}

/// Standard EAN-8 check digit: weights 3,1,3,1,3,1,3 from the left.
pub fn check_digit(data: &[u8; 7]) -> u8 {
    let sum: u32 = data
        .iter()
        .enumerate()
        .map(|(i, &d)| d as u32 * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Expand a 7-bit code (MSB first) into modules.
fn expand(code: u8) -> [bool; 7] {
    let mut out = [false; 7];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = (code >> (6 - i)) & 1 == 1;
    }
    out
}
