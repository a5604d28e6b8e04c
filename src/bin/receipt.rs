//! # Receipt CLI
//!
//! Prints an 80mm POS receipt.
//!
//! ## Usage
//!
//! ```bash
//! receipt receipt $'CENTER Baraka\nFilial 2' "Non|2|4000|8000;Sut|1|12000|12000" \
//!     20000 0 20000 cash
//!
//! # Preview the layout as JSON draw operations
//! receipt receipt "Shop" "Non|1|4000|4000" 4000 0 4000 qarz --dump
//! ```

use chrono::Local;

use dokondor_print::{
    PrintError,
    cli::{self, ReceiptArgs},
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrintError> {
    let args: ReceiptArgs = cli::parse_args()?;
    args.run(Local::now().naive_local())
}
