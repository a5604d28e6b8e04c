//! # Shared CLI Plumbing
//!
//! Both tools take positional arguments, build a [`Page`], and then either
//! print it or write a preview. The argument lists, the parsing quirks (usage
//! errors exit 1, `--help` exits 0) and the output step live here.
//!
//! Free-text positionals accept values starting with `-`, so a discount of
//! `-500` or a store called `-Sale-` is printed rather than read as a flag.

use std::ffi::OsString;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, CommandFactory, Parser, error::ErrorKind};

use crate::barcode::ean8;
use crate::error::PrintError;
use crate::label;
use crate::page::Page;
use crate::printer::{self, PrintJob, PrinterConfig};
use crate::receipt::Receipt;
use crate::render::Canvas;

/// Preview options shared by both tools.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Write a PNG preview to FILE instead of printing
    #[arg(long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Print the page's draw operations as JSON instead of printing
    #[arg(long)]
    pub dump: bool,
}

impl OutputArgs {
    /// Whether the page goes to a file or stdout rather than a printer.
    pub fn is_preview(&self) -> bool {
        self.png.is_some() || self.dump
    }
}

/// Print an EAN-8 product label
#[derive(Parser, Debug)]
#[command(name = "label")]
#[command(author, version, about, long_about = None)]
pub struct LabelArgs {
    /// Printer name or device path
    pub printer_name: String,

    /// Barcode payload, exactly 8 digits
    #[arg(allow_hyphen_values = true)]
    pub ean8: String,

    /// Product name printed above the barcode
    #[arg(allow_hyphen_values = true)]
    pub product_name: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl LabelArgs {
    /// Validate the payload and lay out the label.
    pub fn page(&self) -> Result<Page, PrintError> {
        let pattern = ean8::encode(&self.ean8)?;
        if !pattern.has_valid_check_digit() {
            log::warn!(
                "EAN8 '{}' has a wrong check digit; printing it as given",
                self.ean8
            );
        }
        Ok(label::layout(&pattern, &self.product_name))
    }

    /// Lay out and deliver the label. The payload is rejected before the
    /// printer is looked up.
    pub fn run(&self) -> Result<(), PrintError> {
        let page = self.page()?;
        deliver(
            &page,
            &self.printer_name,
            PrinterConfig::LABEL_40X30,
            &self.output,
        )
    }
}

/// Print a POS receipt
#[derive(Parser, Debug)]
#[command(name = "receipt")]
#[command(author, version, about, long_about = None)]
pub struct ReceiptArgs {
    /// Printer name or device path
    pub printer_name: String,

    /// Store heading, may span several lines
    #[arg(allow_hyphen_values = true)]
    pub store_name: String,

    /// Items as `Name|Qty|UnitPrice|LineTotal;...`
    #[arg(allow_hyphen_values = true)]
    pub items_data: String,

    /// Subtotal, printed as given
    #[arg(allow_hyphen_values = true)]
    pub subtotal: String,

    /// Discount, printed as given
    #[arg(allow_hyphen_values = true)]
    pub discount: String,

    /// Total, printed as given
    #[arg(allow_hyphen_values = true)]
    pub total: String,

    /// Payment type (cash, card, debt, mixed, refund_cash, ...)
    #[arg(allow_hyphen_values = true)]
    pub payment_type: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ReceiptArgs {
    pub fn receipt(&self) -> Receipt {
        Receipt::from_args(
            &self.store_name,
            &self.items_data,
            &self.subtotal,
            &self.discount,
            &self.total,
            &self.payment_type,
        )
    }

    /// Lay out the receipt stamped with `printed_at` and deliver it.
    pub fn run(&self, printed_at: NaiveDateTime) -> Result<(), PrintError> {
        let receipt = self.receipt();
        log::debug!(
            "Receipt: {} heading line(s), {} item(s), payment '{}'",
            receipt.heading.len(),
            receipt.items.len(),
            receipt.payment.label
        );

        let page = receipt.layout(printed_at);
        deliver(
            &page,
            &self.printer_name,
            PrinterConfig::RECEIPT_80MM,
            &self.output,
        )
    }
}

/// Parse the process arguments.
pub fn parse_args<C: Parser>() -> Result<C, PrintError> {
    parse_args_from(std::env::args_os())
}

/// Parse an argument list, program name first.
///
/// `--help` and `--version` print and exit 0. Any other parse failure becomes
/// a [`PrintError::Usage`] carrying the usage line.
pub fn parse_args_from<C, I, T>(args: I) -> Result<C, PrintError>
where
    C: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    C::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        kind => usage_error::<C>(kind),
    })
}

fn usage_error<C: CommandFactory>(kind: ErrorKind) -> PrintError {
    let reason = match kind {
        ErrorKind::MissingRequiredArgument => "Not enough arguments.",
        other => other.as_str().unwrap_or("Invalid arguments."),
    };
    PrintError::Usage(format!("{}\n{}", reason, C::command().render_usage()))
}

/// Send a page to its destination: JSON dump, PNG preview, or the printer.
pub fn deliver(
    page: &Page,
    printer_name: &str,
    config: PrinterConfig,
    output: &OutputArgs,
) -> Result<(), PrintError> {
    if output.dump {
        println!("{}", page.to_json()?);
    }

    if let Some(path) = &output.png {
        Canvas::render(page).save_png(path)?;
        println!("Saved to {}", path.display());
    }

    if output.is_preview() {
        return Ok(());
    }

    let device = printer::resolve_device_from_env(printer_name)?;
    println!("Printing to: {}...", printer_name);

    let mut job = PrintJob::open(&device, config, page.name.clone())?;
    job.print_page(page)?;
    job.finish()?;

    println!("Success");
    Ok(())
}
