//! Terminal rendering of a finalized payslip, mirroring the summary card:
//! identity block, the two amount tables, net pay, and the disclaimer.

use colored::Colorize;

use crate::ledger::LineItem;
use crate::payslip::Payslip;

use super::output;
use super::table::{Alignment, Table, TableColumn};

pub fn render_summary(payslip: &Payslip) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!("{} - Payslip", payslip.company_name).bold()
    ));
    out.push_str(&format!(
        "Pay Period: {} - {}\n\n",
        payslip.pay_period_from, payslip.pay_period_to
    ));

    for (label, value) in [
        ("Employee Name", &payslip.employee_name),
        ("Employee ID", &payslip.employee_id),
        ("Designation", &payslip.designation),
        ("Department", &payslip.department),
        ("Working Days Paid For", &payslip.working_days_paid_for),
        ("Number of LOPs", &payslip.no_of_lops),
    ] {
        out.push_str(&format!("{label}: {value}\n"));
    }

    out.push_str(&format!("\n{}\n", amount_table(&payslip.earnings, "Earnings")));
    out.push_str(&format!(
        "\n{}\n",
        amount_table(&payslip.deductions, "Deductions")
    ));

    out.push_str(&format!(
        "\nNet Pay: {}\n",
        payslip.net_pay.bold()
    ));
    out.push_str(&format!("Payment Method: {}\n\n", payslip.payment_method));
    out.push_str("This is a computer-generated payslip and does not require a signature.\n");
    out
}

fn amount_table(items: &[LineItem], title: &str) -> String {
    let table = Table {
        columns: vec![
            TableColumn::new(title, 12, Alignment::Left),
            TableColumn::new("Amount", 8, Alignment::Right),
        ],
        rows: items
            .iter()
            .map(|item| vec![item.name.clone(), item.amount.clone()])
            .collect(),
    };
    table.render()
}

/// Prints the summary, warning first about any amount that would corrupt the
/// net-pay figure.
pub fn print_summary(payslip: &Payslip) {
    for flag in payslip.ledger().amount_issues() {
        output::warning(format!(
            "{} item {} (\"{}\") has an unusable amount: \"{}\"",
            flag.side.label(),
            flag.index + 1,
            flag.name,
            flag.amount,
        ));
    }
    print!("{}", render_summary(payslip));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payslip::PayslipForm;

    #[test]
    fn summary_contains_every_section() {
        colored::control::set_override(false);
        let payslip = PayslipForm::sample().snapshot();
        let rendered = render_summary(&payslip);
        assert!(rendered.contains("Hela and Heed - Payslip"));
        assert!(rendered.contains("Raj Kumar"));
        assert!(rendered.contains("Basic Salary"));
        assert!(rendered.contains("Provident Fund"));
        assert!(rendered.contains("Net Pay: ₹41,800"));
        assert!(rendered.contains("does not require a signature"));
    }
}
