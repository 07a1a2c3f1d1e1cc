use serde::{Deserialize, Serialize};

use crate::currency::{self, AmountIssue};

use super::line_item::LineItem;

/// Which list a flagged amount belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerSide {
    Earnings,
    Deductions,
}

impl LedgerSide {
    pub fn label(&self) -> &'static str {
        match self {
            LedgerSide::Earnings => "earnings",
            LedgerSide::Deductions => "deductions",
        }
    }
}

/// A malformed amount surfaced to the presentation layer. The summation
/// itself still lets the value corrupt the total; this only lets callers
/// warn before that happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFlag {
    pub side: LedgerSide,
    pub index: usize,
    pub name: String,
    pub amount: String,
    pub issue: AmountIssue,
}

/// The earnings/deductions pair for one payslip instance.
///
/// Both lists keep insertion order, which is also display order. There is no
/// remove operation; none of the observed payslip workflows delete a line
/// once entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub earnings: Vec<LineItem>,
    #[serde(default)]
    pub deductions: Vec<LineItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample data the form starts from.
    pub fn sample() -> Self {
        Self {
            earnings: vec![
                LineItem::new("Basic Salary", "₹40,000"),
                LineItem::new("Allowances", "₹5,000"),
                LineItem::new("Bonus", "₹5,000"),
            ],
            deductions: vec![
                LineItem::new("Provident Fund", "₹5,000"),
                LineItem::new("Income Tax", "₹3,000"),
                LineItem::new("Professional Tax", "₹200"),
            ],
        }
    }

    pub fn total_earnings(&self) -> f64 {
        Self::total(&self.earnings)
    }

    pub fn total_deductions(&self) -> f64 {
        Self::total(&self.deductions)
    }

    fn total(items: &[LineItem]) -> f64 {
        items
            .iter()
            .fold(0.0, |acc, item| acc + currency::parse_currency(&item.amount))
    }

    /// Earnings total minus deductions total, in display currency format.
    /// Amounts that do not parse propagate as `NaN` into the figure; callers
    /// that want to warn first should consult [`Ledger::amount_issues`].
    pub fn net_pay(&self) -> String {
        currency::format_currency(self.total_earnings() - self.total_deductions())
    }

    /// Flags every entry whose amount would corrupt the totals.
    pub fn amount_issues(&self) -> Vec<AmountFlag> {
        let mut flags = Vec::new();
        for (side, items) in [
            (LedgerSide::Earnings, &self.earnings),
            (LedgerSide::Deductions, &self.deductions),
        ] {
            for (index, item) in items.iter().enumerate() {
                if let Some(issue) = currency::amount_issue(&item.amount) {
                    flags.push(AmountFlag {
                        side,
                        index,
                        name: item.name.clone(),
                        amount: item.amount.clone(),
                        issue,
                    });
                }
            }
        }
        flags
    }

    pub fn is_empty(&self) -> bool {
        self.earnings.is_empty() && self.deductions.is_empty()
    }
}
