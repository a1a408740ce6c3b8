#![doc(test(attr(deny(warnings))))]

//! Budget Consult answers "can I afford this?" for a personal budget: it
//! normalizes the current month's records onto a monthly basis and checks a
//! proposed expense, debt, or subscription against what is left.

pub mod cli;
pub mod errors;
pub mod settings;
pub mod utils;

pub use consult_core::validation::{validate_consult, validate_snapshot};
pub use consult_core::{
    compute_affordability, AffordabilityService, BudgetBaseline, BudgetService, ConsultPolicy,
    DashboardSummary, SummaryService,
};
pub use consult_domain::{
    BillingFrequency, ConsultInput, ConsultResult, DebtConsult, DebtRecord, ExpenseConsult,
    ExpenseRecord, FinancialSnapshot, Frequency, IncomeRecord, SubscriptionConsult,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Budget Consult tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
