//! # Print Job Tests
//!
//! Drive the full label and receipt pipelines (arguments → layout → raster →
//! StarPRNT bytes) into an in-memory transport.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

use dokondor_print::barcode::ean8;
use dokondor_print::page::DrawOp;
use dokondor_print::printer::{PrintJob, PrinterConfig};
use dokondor_print::protocol::commands;
use dokondor_print::receipt::Receipt;
use dokondor_print::render::Canvas;
use dokondor_print::{PrintError, label};

const RASTER_HEADER: [u8; 3] = [0x1B, 0x1D, b'S'];

fn printed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(18, 30, 0)
        .unwrap()
}

fn count_headers(bytes: &[u8]) -> usize {
    bytes.windows(3).filter(|w| *w == RASTER_HEADER).count()
}

// ============================================================================
// LABEL
// ============================================================================

#[test]
fn label_matches_independent_encoder() {
    // barcoders computes the check digit itself from the first seven
    let reference = barcoders::sym::ean8::EAN8::new("5512345")
        .unwrap()
        .encode();
    let ours = ean8::encode("55123457").unwrap();

    let ours: Vec<u8> = ours.modules().iter().map(|&b| b as u8).collect();
    assert_eq!(ours, reference);
}

#[test]
fn label_job_bytes() {
    let pattern = ean8::encode("55123457").unwrap();
    let page = label::layout(&pattern, "Non 500g");

    let mut sink = Vec::new();
    let mut job = PrintJob::begin(&mut sink, PrinterConfig::LABEL_40X30, &page.name).unwrap();
    job.print_page(&page).unwrap();
    job.finish().unwrap();

    assert_eq!(&sink[..2], &commands::init()[..]);
    // 320 dots = 40 bytes, 240 rows = 0x00F0
    assert_eq!(&sink[2..11], &[0x1B, 0x1D, b'S', 1, 40, 0, 0xF0, 0, 0]);
    assert_eq!(sink.len(), 2 + 9 + 40 * 240);
}

#[test]
fn label_bars_are_printed() {
    let pattern = ean8::encode("00000000").unwrap();
    let canvas = Canvas::render(&label::layout(&pattern, ""));

    // Start guard "101" at x = 93: bar, space, bar, two dots each
    let y = 100;
    assert!(canvas.is_black(93, y));
    assert!(canvas.is_black(94, y));
    assert!(!canvas.is_black(95, y));
    assert!(!canvas.is_black(96, y));
    assert!(canvas.is_black(97, y));
    // Left quiet zone stays white
    assert!(!canvas.is_black(92, y));
    assert!(!canvas.is_black(0, y));
}

#[test]
fn invalid_label_rejected_before_printing() {
    for code in ["1234567", "123456789", "1234567a", ""] {
        let err = ean8::encode(code).unwrap_err();
        assert!(matches!(err, PrintError::InvalidEan8(_)));
        assert_eq!(
            err.to_string(),
            format!("Invalid EAN8 '{}'. Must be exactly 8 digits.", code)
        );
    }
}

// ============================================================================
// RECEIPT
// ============================================================================

#[test]
fn receipt_job_bytes() {
    let receipt = Receipt::from_args(
        "CENTER Baraka\nFilial 2",
        "Non|2|4000|8000;Sut|1|12000|12000",
        "20000",
        "0",
        "20000",
        "cash",
    );
    let page = receipt.layout(printed_at());
    assert_eq!(page.width, 540);

    let mut config = PrinterConfig::RECEIPT_80MM;
    config.max_chunk_rows = 128;

    let mut sink = Vec::new();
    let mut job = PrintJob::begin(&mut sink, config, &page.name).unwrap();
    job.print_page(&page).unwrap();
    job.finish().unwrap();

    let rows = page.height as usize;
    let chunks = rows.div_ceil(128);
    assert_eq!(count_headers(&sink), chunks);
    assert_eq!(sink.len(), 2 + 9 * chunks + 68 * rows + 3);
    assert!(sink.ends_with(&commands::cut_full_feed()));
}

#[test]
fn receipt_text_content() {
    let receipt = Receipt::from_args(
        "  \n",
        "Non|2|4000|8000",
        "8000",
        "500",
        "7500",
        "Qarz",
    );
    let page = receipt.layout(printed_at());
    let texts: Vec<&str> = page.texts().collect();

    assert_eq!(
        texts,
        vec![
            "Do'kondor POS",
            "QARZ",
            "Sana: 15/01/2026 18:30",
            "To'lov turi: Qarz",
            "MAHSULOT",
            "MIQ",
            "NARX",
            "JAMI",
            "Non",
            "2",
            "4000",
            "8000",
            "Jami: 8000 so'm",
            "Chegirma: 500 so'm",
            "Umumiy : 7500 so'm",
            "Xaridingiz uchun rahmat!",
        ]
    );
}

#[test]
fn refund_receipt_wording() {
    let receipt = Receipt::from_args("Shop", "", "1000", "0", "1000", "REFUND_CARD");
    let page = receipt.layout(printed_at());
    let texts: Vec<&str> = page.texts().collect();

    assert!(texts.contains(&"To'lov turi: Qaytarish (Karta)"));
    assert!(texts.contains(&"Qaytgan: 1000 so'm"));
    assert!(texts.contains(&"Qarzdan yechildi: 0 so'm"));
    assert!(texts.contains(&"Refund: 1000 so'm"));
    assert!(!texts.contains(&"QARZ"));
}

#[test]
fn receipt_dump_is_json() {
    let receipt = Receipt::from_args("Shop", "A|1|1|1", "1", "0", "1", "card");
    let page = receipt.layout(printed_at());

    let json: serde_json::Value = serde_json::from_str(&page.to_json().unwrap()).unwrap();
    assert_eq!(json["name"], "POS Receipt (UZ)");
    assert_eq!(json["width"], 540);

    let ops = json["ops"].as_array().unwrap();
    assert_eq!(ops.len(), page.ops.len());
    assert_eq!(ops[0]["op"], "text");
    assert_eq!(ops[0]["text"], "Shop");
    assert_eq!(ops[0]["align"], "center");

    let rules = page
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Rule { .. }))
        .count();
    assert_eq!(rules, 2);
}

#[test]
fn receipt_preview_png() {
    let receipt = Receipt::from_args("Shop", "A|1|1|1", "1", "0", "1", "card");
    let canvas = Canvas::render(&receipt.layout(printed_at()));
    assert!(canvas.black_pixels() > 0);

    let png = canvas.to_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
