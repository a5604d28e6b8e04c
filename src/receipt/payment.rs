//! Payment-type classification.
//!
//! The payment token comes from the POS front end as free text in either
//! Uzbek or English. It is matched case-insensitively by substring against
//! an ordered keyword table; the first hit wins.

use serde::Serialize;

/// Display label plus the flags that change the receipt layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInfo {
    /// Text printed after "To'lov turi: "
    pub label: String,
    /// Print the "QARZ" stamp next to the heading
    pub debt_stamp: bool,
    /// Use refund wording in the totals block
    pub is_return_flow: bool,
}

struct Rule {
    keywords: &'static [&'static str],
    label: &'static str,
    debt_stamp: bool,
    is_return_flow: bool,
}

/// Label used for an empty token.
pub const DEFAULT_LABEL: &str = "Naqd";

// Order matters: refund keywords contain "cash"/"card"/"debt".
static RULES: &[Rule] = &[
    Rule {
        keywords: &["refund_cash"],
        label: "Qaytarish (Naqd)",
        debt_stamp: false,
        is_return_flow: true,
    },
    Rule {
        keywords: &["refund_card"],
        label: "Qaytarish (Karta)",
        debt_stamp: false,
        is_return_flow: true,
    },
    Rule {
        keywords: &["debt_offset"],
        label: "Qarzdan yechildi",
        debt_stamp: false,
        is_return_flow: true,
    },
    Rule {
        keywords: &["mixed", "aralash"],
        label: "Aralash",
        debt_stamp: false,
        is_return_flow: false,
    },
    Rule {
        keywords: &["naqd", "cash"],
        label: "Naqd",
        debt_stamp: false,
        is_return_flow: false,
    },
    Rule {
        keywords: &["karta", "card"],
        label: "Karta",
        debt_stamp: false,
        is_return_flow: false,
    },
    Rule {
        keywords: &["qarz", "debt"],
        label: "Qarz",
        debt_stamp: true,
        is_return_flow: false,
    },
];

impl PaymentInfo {
    /// Classify a raw payment token.
    ///
    /// Unknown tokens are kept verbatim as the label; an empty token means cash.
    pub fn classify(raw: &str) -> Self {
        let lowered = raw.to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|k| lowered.contains(k)) {
                return Self {
                    label: rule.label.to_string(),
                    debt_stamp: rule.debt_stamp,
                    is_return_flow: rule.is_return_flow,
                };
            }
        }

        let label = if raw.is_empty() { DEFAULT_LABEL } else { raw };
        Self {
            label: label.to_string(),
            debt_stamp: false,
            is_return_flow: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str, label: &str, debt: bool, ret: bool) {
        let info = PaymentInfo::classify(raw);
        assert_eq!(info.label, label, "label for {:?}", raw);
        assert_eq!(info.debt_stamp, debt, "debt_stamp for {:?}", raw);
        assert_eq!(info.is_return_flow, ret, "is_return_flow for {:?}", raw);
    }

    #[test]
    fn test_basic_tokens() {
        check("CASH", "Naqd", false, false);
        check("refund_card", "Qaytarish (Karta)", false, true);
        check("DEBT", "Qarz", true, false);
        check("", "Naqd", false, false);
    }

    #[test]
    fn test_uzbek_keywords() {
        check("Naqd", "Naqd", false, false);
        check("KARTA", "Karta", false, false);
        check("qarz", "Qarz", true, false);
        check("Aralash", "Aralash", false, false);
    }

    #[test]
    fn test_return_flows() {
        check("REFUND_CASH", "Qaytarish (Naqd)", false, true);
        check("debt_offset", "Qarzdan yechildi", false, true);
    }

    #[test]
    fn test_first_match_wins() {
        // "refund_cash" is checked before plain "cash"
        check("refund_cash", "Qaytarish (Naqd)", false, true);
        // "debt_offset" beats "debt"
        check("debt_offset", "Qarzdan yechildi", false, true);
        // cash is checked before debt
        check("debt+cash", "Naqd", false, false);
        // mixed is checked before card
        check("mixed_card", "Aralash", false, false);
    }

    #[test]
    fn test_substring_match() {
        check("paid by credit card", "Karta", false, false);
        check("cashless", "Naqd", false, false);
    }

    #[test]
    fn test_unknown_token_verbatim() {
        check("Click", "Click", false, false);
        check("Payme QR", "Payme QR", false, false);
    }

    #[test]
    fn test_whitespace_only_is_not_empty() {
        check(" ", " ", false, false);
    }
}
