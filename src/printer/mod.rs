//! # Printer Module
//!
//! Printer hardware profiles, device lookup, and print jobs.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware specifications
//! - [`job`]: Scoped print job that owns the device for one document
//!
//! ## Device Names
//!
//! Callers name printers logically (`label`, `receipt`). A name containing
//! `/` is used as a device path directly. Any other name is looked up in the
//! environment as `DOKONDOR_PRINTER_<NAME>`:
//!
//! ```bash
//! export DOKONDOR_PRINTER_LABEL=/dev/usb/lp0
//! export DOKONDOR_PRINTER_RECEIPT=/dev/rfcomm0
//! ```

pub mod config;
pub mod job;

use std::path::PathBuf;

pub use config::PrinterConfig;
pub use job::PrintJob;

use crate::error::PrintError;

/// Prefix of the environment variables that map printer names to devices.
pub const DEVICE_ENV_PREFIX: &str = "DOKONDOR_PRINTER_";

/// Environment variable consulted for a logical printer name.
///
/// ```
/// use dokondor_print::printer::device_env_key;
///
/// assert_eq!(device_env_key("label"), "DOKONDOR_PRINTER_LABEL");
/// assert_eq!(device_env_key("back-office"), "DOKONDOR_PRINTER_BACK_OFFICE");
/// ```
pub fn device_env_key(name: &str) -> String {
    let suffix: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{}{}", DEVICE_ENV_PREFIX, suffix)
}

/// Resolve a printer name to a device path using `lookup` for variables.
pub fn resolve_device<F>(name: &str, lookup: F) -> Result<PathBuf, PrintError>
where
    F: Fn(&str) -> Option<String>,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(PrintError::Transport("Printer name is empty".to_string()));
    }

    if name.contains('/') {
        return Ok(PathBuf::from(name));
    }

    let key = device_env_key(name);
    match lookup(&key) {
        Some(path) if !path.trim().is_empty() => {
            log::debug!("Printer '{}' resolved via {} to {}", name, key, path.trim());
            Ok(PathBuf::from(path.trim()))
        }
        _ => Err(PrintError::Transport(format!(
            "Printer '{}' not found. Set {} to its device path.",
            name, key
        ))),
    }
}

/// Resolve a printer name against the process environment.
pub fn resolve_device_from_env(name: &str) -> Result<PathBuf, PrintError> {
    resolve_device(name, |key| std::env::var(key).ok())
}
