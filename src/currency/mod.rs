//! Currency string contract for the payslip ledger.
//!
//! Monetary values travel through the system as display-formatted strings
//! (`"₹40,000"`), never as a numeric type. Parsing strips the currency symbol
//! and every grouping separator before reading the remainder as a decimal;
//! formatting re-applies the symbol and 3-digit grouping. Malformed input
//! parses to `NaN` rather than raising an error, matching the observed
//! behavior of the summation this feeds.

use serde::{Deserialize, Serialize};

/// Formatting conventions for the single display currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: String,
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self {
            symbol: "₹".into(),
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl CurrencyStyle {
    /// Strips the symbol and ALL grouping separators, then parses the rest as
    /// a decimal. Returns `NaN` for anything that does not reduce to a finite
    /// number (empty string, stray text, repeated decimal points).
    pub fn parse(&self, amount: &str) -> f64 {
        let stripped: String = amount
            .replace(self.symbol.as_str(), "")
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .collect();
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            return f64::NAN;
        }
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Renders `value` as `<symbol><grouped digits>`, keeping at most two
    /// decimal places and dropping trailing zeros. Non-finite values render
    /// their debug token (`"₹NaN"`), preserving how a corrupted total shows
    /// up downstream.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{}{}", self.symbol, value);
        }
        let negative = value < 0.0;
        let rounded = (value.abs() * 100.0).round() / 100.0;
        let mut body = self.group_digits(&format!("{}", rounded.trunc() as i64));
        let cents = (rounded.fract() * 100.0).round() as i64;
        if cents > 0 {
            body.push(self.decimal_separator);
            if cents % 10 == 0 {
                body.push_str(&format!("{}", cents / 10));
            } else {
                body.push_str(&format!("{cents:02}"));
            }
        }
        let sign = if negative { "-" } else { "" };
        format!("{}{}{}", self.symbol, sign, body)
    }

    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (len - idx) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(ch);
        }
        out
    }
}

/// Why an amount string cannot participate in a meaningful sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIssue {
    Empty,
    NotANumber,
}

/// Parses a display amount with the default rupee style.
pub fn parse_currency(amount: &str) -> f64 {
    CurrencyStyle::default().parse(amount)
}

/// Formats a numeric value with the default rupee style.
pub fn format_currency(value: f64) -> String {
    CurrencyStyle::default().format(value)
}

/// Flags an amount the summation would corrupt, without altering how the
/// summation itself treats it.
pub fn amount_issue(amount: &str) -> Option<AmountIssue> {
    if amount.trim().is_empty() {
        return Some(AmountIssue::Empty);
    }
    if parse_currency(amount).is_nan() {
        return Some(AmountIssue::NotANumber);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_symbol_and_every_separator() {
        assert_eq!(parse_currency("₹1,234,567.5"), 1_234_567.5);
        assert_eq!(parse_currency("₹40,000"), 40_000.0);
        assert_eq!(parse_currency("200"), 200.0);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(parse_currency("abc").is_nan());
        assert!(parse_currency("1.2.3").is_nan());
        assert!(parse_currency("").is_nan());
        assert!(parse_currency("₹").is_nan());
    }

    #[test]
    fn format_groups_thousands() {
        assert_eq!(format_currency(41_800.0), "₹41,800");
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(-1_234.0), "₹-1,234");
        assert_eq!(format_currency(1_234.5), "₹1,234.5");
        assert_eq!(format_currency(99.99), "₹99.99");
    }

    #[test]
    fn format_round_trips_through_parse() {
        for value in [0.0, 200.0, 12_345.0, 41_800.0, 1_234.56] {
            let round_tripped = parse_currency(&format_currency(value));
            assert!((round_tripped - value).abs() < 1e-9, "value {value}");
        }
    }

    #[test]
    fn non_finite_values_keep_their_token() {
        assert_eq!(format_currency(f64::NAN), "₹NaN");
    }

    #[test]
    fn issue_distinguishes_empty_from_garbage() {
        assert_eq!(amount_issue(""), Some(AmountIssue::Empty));
        assert_eq!(amount_issue("  "), Some(AmountIssue::Empty));
        assert_eq!(amount_issue("abc"), Some(AmountIssue::NotANumber));
        assert_eq!(amount_issue("₹5,000"), None);
    }
}
