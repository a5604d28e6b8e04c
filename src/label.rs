//! # EAN-8 Product Label
//!
//! Lays out a 40mm × 30mm label: product name on top, bars in the middle,
//! spaced digits underneath.
//!
//! ```text
//! ┌────────────── 320 dots ──────────────┐
//! │            PRODUCT NAME              │ y=10, 14px bold
//! │                                      │
//! │        ▌▌ ▌▌▌ ▌ ▌▌  ▌ ▌▌▌ ▌▌         │ y=60, 100 dots tall
//! │        ▌▌ ▌▌▌ ▌ ▌▌  ▌ ▌▌▌ ▌▌         │ 67 modules × 2 dots
//! │         5 5 1 2 3 4 5 7              │ y=162, 16px
//! └──────────────────────────────────────┘
//! ```

use crate::barcode::Ean8Pattern;
use crate::barcode::ean8::MODULE_COUNT;
use crate::page::{Alignment, Page, Rect, TextStyle};
use crate::printer::PrinterConfig;

/// Width of one barcode module in dots. 2 dots is crisp at 203 DPI.
pub const MODULE_WIDTH: i32 = 2;

/// Bar height in dots.
pub const BAR_HEIGHT: i32 = 100;

/// Top of the bars.
pub const BAR_TOP: i32 = 60;

const NAME_STYLE: TextStyle = TextStyle::bold(14);
const DIGIT_STYLE: TextStyle = TextStyle::regular(16);

/// Lay out a label for an already validated pattern.
pub fn layout(pattern: &Ean8Pattern, product_name: &str) -> Page {
    let config = PrinterConfig::LABEL_40X30;
    let width = config.width_dots as i32;

    let mut page = Page::new("EAN8 Label", width as u32);
    page.height = config.height_dots.map_or(240, u32::from);

    page.text(Rect::new(0, 10, width, 40), product_name, NAME_STYLE, Alignment::Center);

    let start_x = (width - MODULE_COUNT as i32 * MODULE_WIDTH) / 2;
    for (i, &bar) in pattern.modules().iter().enumerate() {
        if bar {
            page.fill(Rect::new(
                start_x + i as i32 * MODULE_WIDTH,
                BAR_TOP,
                MODULE_WIDTH,
                BAR_HEIGHT,
            ));
        }
    }

    page.text(
        Rect::new(0, BAR_TOP + BAR_HEIGHT + 2, width, 30),
        pattern.human_readable(),
        DIGIT_STYLE,
        Alignment::Center,
    );

    log::debug!(
        "Label layout: modules {} starting at x={}, {} ops",
        pattern.to_bit_string(),
        start_x,
        page.ops.len()
    );
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::ean8;
    use crate::page::DrawOp;

    fn bars(page: &Page) -> Vec<Rect> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_one_rect_per_bar_module() {
        let pattern = ean8::encode("55123457").unwrap();
        let page = layout(&pattern, "Choy");
        let expected = pattern.modules().iter().filter(|&&b| b).count();
        assert_eq!(bars(&page).len(), expected);
    }

    #[test]
    fn test_bars_centered() {
        let pattern = ean8::encode("00000000").unwrap();
        let page = layout(&pattern, "Choy");
        let rects = bars(&page);
        // (320 - 134) / 2 = 93; first module is a bar
        assert_eq!(rects[0], Rect::new(93, 60, 2, 100));
        // last module (index 66) is a bar
        assert_eq!(rects.last().unwrap().x, 93 + 66 * 2);
    }

    #[test]
    fn test_texts() {
        let pattern = ean8::encode("12345670").unwrap();
        let page = layout(&pattern, "Non 500g");
        assert_eq!(page.texts().collect::<Vec<_>>(), vec!["Non 500g", "1 2 3 4 5 6 7 0"]);
        assert_eq!(page.width, 320);
        assert_eq!(page.height, 240);
    }

    #[test]
    fn test_digits_under_bars() {
        let pattern = ean8::encode("12345670").unwrap();
        let page = layout(&pattern, "x");
        match page.ops.last() {
            Some(DrawOp::Text { rect, align, .. }) => {
                assert_eq!(rect.y, 162);
                assert_eq!(*align, Alignment::Center);
            }
            other => panic!("expected digits last: {:?}", other),
        }
    }
}
