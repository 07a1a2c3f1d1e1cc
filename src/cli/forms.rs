//! Interactive payslip form: field-by-field prompts seeded with the sample
//! data, plus the add/edit loop over each amount list.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::errors::PayslipError;
use crate::ledger::{add_line_item, update_line_item, LineItem, LineItemField};
use crate::payslip::{Payslip, PayslipForm};

use super::output;
use super::table::{Alignment, Table, TableColumn};

/// Walks the user through every payslip field and returns the frozen
/// snapshot. Each prompt defaults to the current (sample) value, so enter
/// keeps it.
pub fn run_form() -> Result<Payslip, PayslipError> {
    let theme = ColorfulTheme::default();
    let mut form = PayslipForm::sample();

    output::section("Payslip details");
    form.company_name = prompt_field(&theme, "Company name", &form.company_name)?;
    form.company_logo = prompt_field(&theme, "Company logo URL", &form.company_logo)?;
    form.employee_name = prompt_field(&theme, "Employee name", &form.employee_name)?;
    form.employee_id = prompt_field(&theme, "Employee ID", &form.employee_id)?;
    form.designation = prompt_field(&theme, "Designation", &form.designation)?;
    form.department = prompt_field(&theme, "Department", &form.department)?;
    form.pay_period_from = prompt_field(&theme, "Pay period from", &form.pay_period_from)?;
    form.pay_period_to = prompt_field(&theme, "Pay period to", &form.pay_period_to)?;
    form.working_days_paid_for =
        prompt_field(&theme, "Working days paid for", &form.working_days_paid_for)?;
    form.no_of_lops = prompt_field(&theme, "Number of LOPs", &form.no_of_lops)?;
    form.payment_method = prompt_field(&theme, "Payment method", &form.payment_method)?;

    form.ledger.earnings = edit_items(&theme, "Earnings", &form.ledger.earnings)?;
    form.ledger.deductions = edit_items(&theme, "Deductions", &form.ledger.deductions)?;

    Ok(form.snapshot())
}

fn prompt_field(
    theme: &ColorfulTheme,
    label: &str,
    current: &str,
) -> Result<String, PayslipError> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(label)
        .default(current.to_string())
        .interact_text()?;
    Ok(value)
}

/// Add/edit loop over one list. Edits always pick an index out of the list
/// just rendered, so the index can never be out of range.
fn edit_items(
    theme: &ColorfulTheme,
    title: &str,
    items: &[LineItem],
) -> Result<Vec<LineItem>, PayslipError> {
    let mut items = items.to_vec();
    loop {
        output::section(title);
        output::info(render_items(&items));

        let actions = ["Add item", "Edit item", "Done"];
        let action = Select::with_theme(theme)
            .with_prompt(format!("{title}: choose an action"))
            .items(&actions)
            .default(2)
            .interact()?;
        match action {
            0 => {
                items = add_line_item(&items);
                let index = items.len() - 1;
                items = prompt_item(theme, &items, index)?;
            }
            1 => {
                if items.is_empty() {
                    output::warning("Nothing to edit yet.");
                    continue;
                }
                let labels: Vec<String> = items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| format!("{}. {} ({})", idx + 1, item.name, item.amount))
                    .collect();
                let index = Select::with_theme(theme)
                    .with_prompt("Which item?")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                items = prompt_item(theme, &items, index)?;
            }
            _ => return Ok(items),
        }
    }
}

fn prompt_item(
    theme: &ColorfulTheme,
    items: &[LineItem],
    index: usize,
) -> Result<Vec<LineItem>, PayslipError> {
    let name = prompt_field(theme, "Name", &items[index].name)?;
    let items = update_line_item(items, index, LineItemField::Name, &name);
    let amount = prompt_field(theme, "Amount", &items[index].amount)?;
    Ok(update_line_item(&items, index, LineItemField::Amount, &amount))
}

fn render_items(items: &[LineItem]) -> String {
    if items.is_empty() {
        return "(no items)".to_string();
    }
    let table = Table {
        columns: vec![
            TableColumn::new("#", 1, Alignment::Right),
            TableColumn::new("Name", 12, Alignment::Left),
            TableColumn::new("Amount", 8, Alignment::Right),
        ],
        rows: items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                vec![
                    (idx + 1).to_string(),
                    item.name.clone(),
                    item.amount.clone(),
                ]
            })
            .collect(),
    };
    table.render()
}
