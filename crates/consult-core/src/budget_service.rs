//! Monthly baseline aggregation across a period snapshot.

use consult_domain::FinancialSnapshot;
use tracing::warn;

/// Monthly-equivalent totals for the current period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetBaseline {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_debt_payments: f64,
    pub available_budget: f64,
}

/// Stateless budgeting utilities that operate over [`FinancialSnapshot`]s.
pub struct BudgetService;

impl BudgetService {
    /// Normalizes every record onto a monthly basis and derives the available budget.
    pub fn baseline(snapshot: &FinancialSnapshot) -> BudgetBaseline {
        let monthly_income = Self::monthly_income(snapshot);
        let monthly_expenses = Self::monthly_expenses(snapshot);
        let monthly_debt_payments = Self::monthly_debt_payments(snapshot);
        BudgetBaseline {
            monthly_income,
            monthly_expenses,
            monthly_debt_payments,
            available_budget: monthly_income - monthly_expenses - monthly_debt_payments,
        }
    }

    pub fn monthly_income(snapshot: &FinancialSnapshot) -> f64 {
        snapshot
            .incomes
            .iter()
            .map(|income| income.monthly_amount())
            .sum()
    }

    /// Recurring burn rate. One-off expenses are already spent and count as zero.
    pub fn monthly_expenses(snapshot: &FinancialSnapshot) -> f64 {
        snapshot
            .expenses
            .iter()
            .inspect(|expense| {
                if expense.is_recurring && expense.recurring_frequency.is_none() {
                    warn!(
                        "recurring expense {} has no frequency; counting it once per month",
                        expense.id.as_deref().unwrap_or("<unsaved>")
                    );
                }
            })
            .map(|expense| expense.monthly_amount())
            .sum()
    }

    /// Minimum payments are already monthly and are summed as-is.
    pub fn monthly_debt_payments(snapshot: &FinancialSnapshot) -> f64 {
        snapshot.debts.iter().map(|debt| debt.minimum_payment).sum()
    }
}
