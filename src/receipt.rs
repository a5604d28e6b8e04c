//! # Point-of-Sale Receipt
//!
//! Turns the receipt tool's raw arguments into a [`Page`].
//!
//! ## Layout (540 dots wide)
//!
//! ```text
//!                 STORE NAME                  ← heading, 36px bold, centered
//!                  Branch 2              QARZ ← stamp only for debt payments
//! Sana: 18/10/2026 14:05
//! To'lov turi: Naqd
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//! MAHSULOT             MIQ       NARX    JAMI
//! Bread                  2       1000    2000
//! ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//!                            Jami: 2000 so'm
//!                         Chegirma: 0 so'm
//!                       Umumiy : 2000 so'm    ← 28px bold
//!           Xaridingiz uchun rahmat!
//! ```

pub mod heading;
pub mod items;
pub mod payment;

pub use heading::heading_lines;
pub use items::{ReceiptItem, parse_items};
pub use payment::PaymentInfo;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::page::{Alignment, Page, Rect, TextStyle};
use crate::printer::PrinterConfig;

const MARGIN: i32 = 8;
const TOP: i32 = 10;

const HEADER: TextStyle = TextStyle::bold(36);
const SUB_HEADER: TextStyle = TextStyle::bold(22);
const BODY: TextStyle = TextStyle::regular(20);
const TOTAL: TextStyle = TextStyle::bold(28);
const STAMP: TextStyle = TextStyle::bold(26);

const COL_NAME: i32 = 260;
const COL_QTY: i32 = 70;
const COL_PRICE: i32 = 90;

const RULE_THICKNESS: u32 = 3;

/// Printed on the right of the heading for debt sales.
pub const DEBT_STAMP: &str = "QARZ";

/// Closing line.
pub const FOOTER: &str = "Xaridingiz uchun rahmat!";

const CURRENCY: &str = "so'm";

/// Everything printed on one receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub heading: Vec<String>,
    pub items: Vec<ReceiptItem>,
    pub subtotal: String,
    pub discount: String,
    pub total: String,
    pub payment: PaymentInfo,
}

impl Receipt {
    /// Build a receipt from the tool's raw arguments.
    ///
    /// Never fails: malformed items, unknown payment tokens and blank store
    /// names all degrade to defaults.
    pub fn from_args(
        store_name: &str,
        items_data: &str,
        subtotal: &str,
        discount: &str,
        total: &str,
        payment_type: &str,
    ) -> Self {
        Self {
            heading: heading_lines(store_name),
            items: parse_items(items_data),
            subtotal: subtotal.to_string(),
            discount: discount.to_string(),
            total: total.to_string(),
            payment: PaymentInfo::classify(payment_type),
        }
    }

    /// The three totals lines, worded for a sale or a return.
    pub fn totals_lines(&self) -> [String; 3] {
        let (sub, disc, total) = if self.payment.is_return_flow {
            ("Qaytgan: ", "Qarzdan yechildi: ", "Refund: ")
        } else {
            ("Jami: ", "Chegirma: ", "Umumiy : ")
        };
        [
            format!("{}{} {}", sub, self.subtotal, CURRENCY),
            format!("{}{} {}", disc, self.discount, CURRENCY),
            format!("{}{} {}", total, self.total, CURRENCY),
        ]
    }

    /// Lay the receipt out on an 80mm page, stamped with `printed_at`.
    pub fn layout(&self, printed_at: NaiveDateTime) -> Page {
        let width = PrinterConfig::RECEIPT_80MM.width_dots as i32;
        let mut page = Page::new("POS Receipt (UZ)", width as u32);
        let mut y = TOP;

        for line in &self.heading {
            page.text(Rect::new(0, y, width, 50), line, HEADER, Alignment::Center);
            y += 46;
        }
        y += 8;

        if self.payment.debt_stamp {
            page.text(
                Rect::new(0, y - 40, width - MARGIN, 30),
                DEBT_STAMP,
                STAMP,
                Alignment::Right,
            );
        }

        let body_line = |y: i32| Rect::new(MARGIN, y, width - 2 * MARGIN, 28);

        page.text(
            body_line(y),
            format!("Sana: {}", printed_at.format("%d/%m/%Y %H:%M")),
            BODY,
            Alignment::Left,
        );
        y += 28;

        page.text(
            body_line(y),
            format!("To'lov turi: {}", self.payment.label),
            BODY,
            Alignment::Left,
        );
        y += 30;

        page.rule(MARGIN, width - MARGIN, y, RULE_THICKNESS);
        y += 12;

        let col_total = width - MARGIN * 2 - COL_NAME - COL_QTY - COL_PRICE;
        let columns = [
            (MARGIN, COL_NAME),
            (MARGIN + COL_NAME, COL_QTY),
            (MARGIN + COL_NAME + COL_QTY, COL_PRICE),
            (MARGIN + COL_NAME + COL_QTY + COL_PRICE, col_total),
        ];

        let headers = [
            ("MAHSULOT", Alignment::Left),
            ("MIQ", Alignment::Left),
            ("NARX", Alignment::Right),
            ("JAMI", Alignment::Right),
        ];
        for ((x, w), (label, align)) in columns.iter().zip(headers) {
            page.text(Rect::new(*x, y, *w, 30), label, SUB_HEADER, align);
        }
        y += 30;

        for item in &self.items {
            let cells = [
                (&item.name, Alignment::Left),
                (&item.quantity, Alignment::Right),
                (&item.unit_price, Alignment::Right),
                (&item.line_total, Alignment::Right),
            ];
            for ((x, w), (text, align)) in columns.iter().zip(cells) {
                page.text(Rect::new(*x, y, *w, 28), text.as_str(), BODY, align);
            }
            y += 26;
        }

        y += 10;
        page.rule(MARGIN, width - MARGIN, y, RULE_THICKNESS);
        y += 12;

        let [sub_line, disc_line, total_line] = self.totals_lines();
        let totals_box = |y: i32, h: i32| Rect::new(MARGIN, y, width - MARGIN, h);

        page.text(totals_box(y, 28), sub_line, BODY, Alignment::Right);
        y += 26;
        page.text(totals_box(y, 28), disc_line, BODY, Alignment::Right);
        y += 26;
        page.text(totals_box(y, 36), total_line, TOTAL, Alignment::Right);
        y += 50;

        page.text(Rect::new(0, y, width, 30), FOOTER, BODY, Alignment::Center);
        y += 40;

        page.height = y as u32;
        log::debug!(
            "Receipt layout: {} heading lines, {} items, {} ops, {}x{} dots",
            self.heading.len(),
            self.items.len(),
            page.ops.len(),
            page.width,
            page.height
        );
        page
    }
}
