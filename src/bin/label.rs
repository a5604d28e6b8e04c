//! # Label CLI
//!
//! Prints a 40mm × 30mm product label with an EAN-8 barcode.
//!
//! ## Usage
//!
//! ```bash
//! # Print to the printer configured as DOKONDOR_PRINTER_LABEL
//! label label 55123457 "Non 500g"
//!
//! # Print straight to a device
//! label /dev/usb/lp0 55123457 "Non 500g"
//!
//! # Preview instead of printing
//! label label 55123457 "Non 500g" --png label.png
//! ```

use dokondor_print::{
    PrintError,
    cli::{self, LabelArgs},
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrintError> {
    let args: LabelArgs = cli::parse_args()?;
    args.run()
}
