//! The payslip record: opaque identity fields plus a frozen ledger snapshot.

use std::fs;
use std::path::Path;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::PayslipError;
use crate::ledger::{Ledger, LineItem};

/// A finalized payslip as consumed by the summary view and the exporter.
///
/// Every scalar field is an opaque string with no computed behavior; only
/// `net_pay` is derived, and it is derived from the two lists rather than
/// stored authoritatively (loading recomputes it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub company_name: String,
    #[serde(default)]
    pub company_logo: String,
    pub employee_name: String,
    pub employee_id: String,
    pub designation: String,
    pub department: String,
    pub pay_period_from: String,
    pub pay_period_to: String,
    pub working_days_paid_for: String,
    pub no_of_lops: String,
    pub payment_method: String,
    #[serde(default)]
    pub earnings: Vec<LineItem>,
    #[serde(default)]
    pub deductions: Vec<LineItem>,
    #[serde(default)]
    pub net_pay: String,
}

impl Payslip {
    /// Loads a payslip from a JSON file and recomputes its net pay, so a
    /// stale or missing `netPay` field in the input can never disagree with
    /// the lists.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PayslipError> {
        let raw = fs::read_to_string(path)?;
        let mut payslip: Payslip = serde_json::from_str(&raw)?;
        payslip.recompute_net_pay();
        Ok(payslip)
    }

    /// Re-derives `net_pay` from the current earnings and deductions.
    pub fn recompute_net_pay(&mut self) {
        self.net_pay = self.ledger().net_pay();
    }

    /// A borrowed-into-owned view of the two lists as a [`Ledger`].
    pub fn ledger(&self) -> Ledger {
        Ledger {
            earnings: self.earnings.clone(),
            deductions: self.deductions.clone(),
        }
    }

    /// `Payslip_<employee name>_<employee id>.pdf`
    pub fn export_file_name(&self) -> String {
        format!("Payslip_{}_{}.pdf", self.employee_name, self.employee_id)
    }
}

/// Mutable editing state behind the interactive form. Snapshotting freezes
/// the current values into an immutable [`Payslip`], recomputing net pay at
/// that instant; edits after a snapshot never leak into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayslipForm {
    pub company_name: String,
    pub company_logo: String,
    pub employee_name: String,
    pub employee_id: String,
    pub designation: String,
    pub department: String,
    pub pay_period_from: String,
    pub pay_period_to: String,
    pub working_days_paid_for: String,
    pub no_of_lops: String,
    pub payment_method: String,
    pub ledger: Ledger,
}

impl PayslipForm {
    /// Form seeded with the canonical sample data; the pay period defaults
    /// to the current calendar month.
    pub fn sample() -> Self {
        let (from, to) = month_window(Local::now().date_naive());
        Self {
            company_name: "Hela and Heed".into(),
            company_logo: "/placeholder.svg".into(),
            employee_name: "Raj Kumar".into(),
            employee_id: "EMP-0123".into(),
            designation: "Software Engineer".into(),
            department: "Engineering".into(),
            pay_period_from: from,
            pay_period_to: to,
            working_days_paid_for: "20".into(),
            no_of_lops: "2".into(),
            payment_method: "Bank Transfer".into(),
            ledger: Ledger::sample(),
        }
    }

    pub fn snapshot(&self) -> Payslip {
        Payslip {
            company_name: self.company_name.clone(),
            company_logo: self.company_logo.clone(),
            employee_name: self.employee_name.clone(),
            employee_id: self.employee_id.clone(),
            designation: self.designation.clone(),
            department: self.department.clone(),
            pay_period_from: self.pay_period_from.clone(),
            pay_period_to: self.pay_period_to.clone(),
            working_days_paid_for: self.working_days_paid_for.clone(),
            no_of_lops: self.no_of_lops.clone(),
            payment_method: self.payment_method.clone(),
            earnings: self.ledger.earnings.clone(),
            deductions: self.ledger.deductions.clone(),
            net_pay: self.ledger.net_pay(),
        }
    }
}

/// First and last day of `today`'s month, spelled out like "June 1, 2023".
fn month_window(today: NaiveDate) -> (String, String) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    (spell_out(first), spell_out(last))
}

fn spell_out(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month0()), date.day(), date.year())
}

fn month_name(month0: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month0 as usize) % 12]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{update_line_item, LineItemField};

    #[test]
    fn snapshot_freezes_net_pay() {
        let mut form = PayslipForm::sample();
        let before = form.snapshot();
        assert_eq!(before.net_pay, "₹41,800");

        form.ledger.deductions =
            update_line_item(&form.ledger.deductions, 2, LineItemField::Amount, "₹1,200");
        let after = form.snapshot();
        assert_eq!(before.net_pay, "₹41,800");
        assert_eq!(after.net_pay, "₹40,800");
    }

    #[test]
    fn export_file_name_uses_name_and_id() {
        let payslip = PayslipForm::sample().snapshot();
        assert_eq!(payslip.export_file_name(), "Payslip_Raj Kumar_EMP-0123.pdf");
    }

    #[test]
    fn month_window_spells_out_bounds() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 14).unwrap();
        let (from, to) = month_window(date);
        assert_eq!(from, "June 1, 2023");
        assert_eq!(to, "June 30, 2023");
    }
}
