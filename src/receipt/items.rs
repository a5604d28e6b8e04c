//! Line-item parsing.
//!
//! Wire format: `Name|Qty|UnitPrice|LineTotal;Name|Qty|UnitPrice|LineTotal;...`
//!
//! There is no escaping, so a literal `;` or `|` inside a field always acts
//! as a separator. Fields are display text and are never parsed as numbers.

use serde::Serialize;

/// Row separator.
pub const ROW_SEPARATOR: char = ';';

/// Field separator within a row.
pub const FIELD_SEPARATOR: char = '|';

/// One receipt line, printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

impl ReceiptItem {
    /// Parse a single row. Missing trailing fields are empty, extras ignored.
    pub fn from_row(row: &str) -> Self {
        let mut fields = row.split(FIELD_SEPARATOR).map(str::to_string);
        Self {
            name: fields.next().unwrap_or_default(),
            quantity: fields.next().unwrap_or_default(),
            unit_price: fields.next().unwrap_or_default(),
            line_total: fields.next().unwrap_or_default(),
        }
    }
}

/// Parse the whole items blob. Empty rows are skipped.
pub fn parse_items(data: &str) -> Vec<ReceiptItem> {
    data.split(ROW_SEPARATOR)
        .filter(|row| !row.is_empty())
        .map(ReceiptItem::from_row)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, qty: &str, price: &str, total: &str) -> ReceiptItem {
        ReceiptItem {
            name: name.into(),
            quantity: qty.into(),
            unit_price: price.into(),
            line_total: total.into(),
        }
    }

    #[test]
    fn test_two_rows() {
        let items = parse_items("Bread|2|1000|2000;Milk|1|1500|1500");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], item("Bread", "2", "1000", "2000"));
        assert_eq!(items[1], item("Milk", "1", "1500", "1500"));
    }

    #[test]
    fn test_missing_fields_default_empty() {
        assert_eq!(parse_items("OnlyName"), vec![item("OnlyName", "", "", "")]);
        assert_eq!(parse_items("Tea|3"), vec![item("Tea", "3", "", "")]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        assert_eq!(
            parse_items("Tea|1|500|500|extra|more"),
            vec![item("Tea", "1", "500", "500")]
        );
    }

    #[test]
    fn test_empty_rows_skipped() {
        let items = parse_items(";Bread|1|1|1;;Milk|1|1|1;");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Bread");
        assert_eq!(items[1].name, "Milk");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_items("").is_empty());
        assert!(parse_items(";;;").is_empty());
    }

    #[test]
    fn test_blank_row_is_kept() {
        // Whitespace is content, not an empty row
        assert_eq!(parse_items(" "), vec![item(" ", "", "", "")]);
    }

    #[test]
    fn test_empty_fields_preserved() {
        assert_eq!(parse_items("|2||"), vec![item("", "2", "", "")]);
    }

    #[test]
    fn test_fields_not_trimmed_or_parsed() {
        assert_eq!(
            parse_items("Non (1kg) | 1.5 |12 000,00|abc"),
            vec![item("Non (1kg) ", " 1.5 ", "12 000,00", "abc")]
        );
    }
}
