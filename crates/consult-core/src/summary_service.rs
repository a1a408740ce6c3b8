use consult_domain::{Amounted, FinancialSnapshot};

use crate::budget_service::{BudgetBaseline, BudgetService};

/// Totals shown on the budget dashboard for the active period.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub baseline: BudgetBaseline,
    pub one_time_expenses: f64,
    pub spent_this_period: f64,
    pub savings_rate: Option<f64>,
    pub highest_interest_rate: Option<f64>,
    pub income_count: usize,
    pub expense_count: usize,
    pub recurring_expense_count: usize,
    pub debt_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(snapshot: &FinancialSnapshot) -> DashboardSummary {
        let baseline = BudgetService::baseline(snapshot);
        let one_time_expenses: f64 = snapshot
            .expenses
            .iter()
            .filter(|expense| !expense.is_recurring)
            .map(Amounted::amount)
            .sum();
        let savings_rate = (baseline.monthly_income > 0.0)
            .then(|| baseline.available_budget / baseline.monthly_income);
        let highest_interest_rate = snapshot
            .debts
            .iter()
            .filter_map(|debt| debt.interest_rate)
            .fold(None, |acc: Option<f64>, rate| {
                Some(acc.map_or(rate, |current| current.max(rate)))
            });

        DashboardSummary {
            baseline,
            one_time_expenses,
            spent_this_period: baseline.monthly_expenses
                + one_time_expenses
                + baseline.monthly_debt_payments,
            savings_rate,
            highest_interest_rate,
            income_count: snapshot.incomes.len(),
            expense_count: snapshot.expenses.len(),
            recurring_expense_count: snapshot
                .expenses
                .iter()
                .filter(|expense| expense.is_recurring)
                .count(),
            debt_count: snapshot.debts.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{DebtRecord, ExpenseRecord, Frequency, IncomeRecord};

    fn household() -> FinancialSnapshot {
        FinancialSnapshot::new()
            .with_income(IncomeRecord::new(4000.0, Frequency::Monthly))
            .with_expense(ExpenseRecord::recurring(1500.0, Frequency::Monthly))
            .with_expense(ExpenseRecord::one_time(250.0))
            .with_debt(DebtRecord::new(200.0, Some(18.5)))
            .with_debt(DebtRecord::new(100.0, Some(4.0)))
            .with_debt(DebtRecord::new(50.0, None))
    }

    #[test]
    fn dashboard_aggregates_period_totals() {
        let summary = SummaryService::dashboard(&household());
        assert_eq!(summary.baseline.available_budget, 2150.0);
        assert_eq!(summary.one_time_expenses, 250.0);
        assert_eq!(summary.spent_this_period, 2100.0);
        assert_eq!(summary.savings_rate, Some(2150.0 / 4000.0));
        assert_eq!(summary.highest_interest_rate, Some(18.5));
        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.recurring_expense_count, 1);
        assert_eq!(summary.debt_count, 3);
    }

    #[test]
    fn dashboard_without_income_has_no_savings_rate() {
        let snapshot = FinancialSnapshot::new().with_debt(DebtRecord::new(30.0, None));
        let summary = SummaryService::dashboard(&snapshot);
        assert_eq!(summary.savings_rate, None);
        assert_eq!(summary.highest_interest_rate, None);
        assert_eq!(summary.baseline.available_budget, -30.0);
    }
}
