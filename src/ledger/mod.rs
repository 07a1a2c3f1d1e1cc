//! Ledger domain models and the pure line-item editing operations.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod line_item;

pub use ledger::{AmountFlag, Ledger, LedgerSide};
pub use line_item::{add_line_item, update_line_item, LineItem, LineItemField};
