use payslip_core::currency::format_currency;
use payslip_core::ledger::{
    add_line_item, update_line_item, Ledger, LedgerSide, LineItem, LineItemField,
};

fn scenario_a() -> Ledger {
    Ledger {
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

#[test]
fn net_pay_is_earnings_minus_deductions() {
    assert_eq!(scenario_a().net_pay(), "₹41,800");
}

#[test]
fn net_pay_matches_formatted_difference_of_totals() {
    let ledger = scenario_a();
    let expected = format_currency(ledger.total_earnings() - ledger.total_deductions());
    assert_eq!(ledger.net_pay(), expected);
}

#[test]
fn empty_ledger_nets_to_zero() {
    assert_eq!(Ledger::new().net_pay(), "₹0");
}

#[test]
fn add_line_item_appends_a_blank_entry() {
    let items = scenario_a().earnings;
    let next = add_line_item(&items);
    assert_eq!(items.len(), 3, "input list must stay untouched");
    assert_eq!(next.len(), 4);
    assert_eq!(next[..3], items[..]);
    assert_eq!(next[3], LineItem::new("", ""));
}

#[test]
fn update_line_item_touches_one_field_of_one_entry() {
    let items = scenario_a().deductions;
    let next = update_line_item(&items, 1, LineItemField::Name, "TDS");
    assert_eq!(next[1].name, "TDS");
    assert_eq!(next[1].amount, items[1].amount);
    assert_eq!(next[0], items[0]);
    assert_eq!(next[2], items[2]);
}

#[test]
fn appended_item_edited_in_place_counts_exactly_once() {
    let mut ledger = scenario_a();
    ledger.deductions = add_line_item(&ledger.deductions);
    let index = ledger.deductions.len() - 1;
    ledger.deductions = update_line_item(&ledger.deductions, index, LineItemField::Amount, "₹0");
    assert_eq!(ledger.net_pay(), "₹41,800");

    ledger.deductions =
        update_line_item(&ledger.deductions, index, LineItemField::Amount, "₹1,234");
    assert_eq!(ledger.net_pay(), "₹40,566");
}

#[test]
fn malformed_amount_silently_corrupts_the_total() {
    let mut ledger = scenario_a();
    ledger.earnings = update_line_item(&ledger.earnings, 0, LineItemField::Amount, "abc");
    assert!(ledger.total_earnings().is_nan());
    assert_eq!(ledger.net_pay(), "₹NaN");
}

#[test]
fn amount_issues_locate_the_offending_entries() {
    let mut ledger = scenario_a();
    ledger.earnings = update_line_item(&ledger.earnings, 2, LineItemField::Amount, "oops");
    ledger.deductions = add_line_item(&ledger.deductions);

    let flags = ledger.amount_issues();
    assert_eq!(flags.len(), 2);
    assert_eq!(flags[0].side, LedgerSide::Earnings);
    assert_eq!(flags[0].index, 2);
    assert_eq!(flags[0].amount, "oops");
    assert_eq!(flags[1].side, LedgerSide::Deductions);
    assert_eq!(flags[1].index, 3);
}

#[test]
fn duplicate_and_blank_names_are_legal_data() {
    let mut earnings = scenario_a().earnings;
    earnings = add_line_item(&earnings);
    earnings = update_line_item(&earnings, 3, LineItemField::Amount, "₹1,000");
    let mut again = add_line_item(&earnings);
    again = update_line_item(&again, 4, LineItemField::Name, "Bonus");
    again = update_line_item(&again, 4, LineItemField::Amount, "₹1,000");

    let ledger = Ledger {
        earnings: again,
        deductions: Vec::new(),
    };
    assert_eq!(ledger.net_pay(), "₹52,000");
}
