use serde::{Deserialize, Serialize};

/// A named amount entry belonging to either the earnings or deductions list.
///
/// `amount` is a display-formatted currency string, not a number. Blank names
/// and duplicate names are legal, inert data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub amount: String,
}

impl LineItem {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// The two editable fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Name,
    Amount,
}

/// Returns a new list with a blank item appended. Never fails and never
/// mutates its input.
pub fn add_line_item(items: &[LineItem]) -> Vec<LineItem> {
    let mut next = items.to_vec();
    next.push(LineItem::default());
    next
}

/// Returns a new list where the item at `index` has `field` replaced by
/// `value`; every other entry is carried over unchanged. An out-of-range
/// index leaves the list as-is, because replacement only happens where the
/// enumeration meets the index.
pub fn update_line_item(
    items: &[LineItem],
    index: usize,
    field: LineItemField,
    value: &str,
) -> Vec<LineItem> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            if idx != index {
                return item.clone();
            }
            let mut updated = item.clone();
            match field {
                LineItemField::Name => updated.name = value.to_string(),
                LineItemField::Amount => updated.amount = value.to_string(),
            }
            updated
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_blank_entry_without_touching_input() {
        let items = vec![LineItem::new("Bonus", "₹5,000")];
        let next = add_line_item(&items);
        assert_eq!(items.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1], LineItem::default());
    }

    #[test]
    fn update_changes_exactly_one_field() {
        let items = vec![
            LineItem::new("Basic Salary", "₹40,000"),
            LineItem::new("Bonus", "₹5,000"),
        ];
        let next = update_line_item(&items, 1, LineItemField::Amount, "₹6,000");
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].name, "Bonus");
        assert_eq!(next[1].amount, "₹6,000");
        assert_eq!(items[1].amount, "₹5,000");
    }

    #[test]
    fn update_out_of_range_is_a_no_op() {
        let items = vec![LineItem::new("Bonus", "₹5,000")];
        let next = update_line_item(&items, 7, LineItemField::Name, "Overtime");
        assert_eq!(next, items);
    }
}
