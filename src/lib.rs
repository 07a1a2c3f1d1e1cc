#![doc(test(attr(deny(warnings))))]

//! Payslip Core offers the earnings/deductions ledger and net-pay primitives
//! that power the payslip form, summary view, and PDF exporter.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod payslip;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Payslip Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
