use colored::Colorize;
use consult_core::{BudgetBaseline, DashboardSummary};
use consult_domain::{ConsultInput, ConsultResult, Displayable, FinancialSnapshot};
use serde::Serialize;

/// Serializable view of the dashboard totals for `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_debt_payments: f64,
    pub available_budget: f64,
    pub one_time_expenses: f64,
    pub spent_this_period: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_interest_rate: Option<f64>,
    pub income_count: usize,
    pub expense_count: usize,
    pub recurring_expense_count: usize,
    pub debt_count: usize,
}

impl From<&DashboardSummary> for DashboardView {
    fn from(summary: &DashboardSummary) -> Self {
        Self {
            monthly_income: summary.baseline.monthly_income,
            monthly_expenses: summary.baseline.monthly_expenses,
            monthly_debt_payments: summary.baseline.monthly_debt_payments,
            available_budget: summary.baseline.available_budget,
            one_time_expenses: summary.one_time_expenses,
            spent_this_period: summary.spent_this_period,
            savings_rate: summary.savings_rate,
            highest_interest_rate: summary.highest_interest_rate,
            income_count: summary.income_count,
            expense_count: summary.expense_count,
            recurring_expense_count: summary.recurring_expense_count,
            debt_count: summary.debt_count,
        }
    }
}

pub fn configure_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}

pub fn render_consult(
    input: &ConsultInput,
    result: &ConsultResult,
    baseline: &BudgetBaseline,
    currency: &str,
) -> String {
    let mut lines = vec![format!("Consult: {}", input.kind())];
    let rows = [
        ("Monthly impact", result.monthly_payment_impact),
        ("Total cost over time", result.total_cost_over_time),
        ("Available before", baseline.available_budget),
        ("Available after", result.effect_on_available_budget),
    ];
    for (label, value) in rows {
        lines.push(format!("  {:<22}{:>16}", label, format_amount(value, currency)));
    }
    let verdict = if result.can_afford {
        "affordable".green().bold()
    } else {
        "cannot afford".red().bold()
    };
    lines.push(format!("Verdict: {verdict}"));
    if !result.warnings.is_empty() {
        lines.push("Warnings:".to_string());
        for warning in &result.warnings {
            lines.push(format!("  - {}", warning.yellow()));
        }
    }
    lines.join("\n")
}

pub fn render_dashboard(summary: &DashboardSummary, notes: &[String], currency: &str) -> String {
    let baseline = &summary.baseline;
    let mut lines = vec!["Monthly dashboard".bold().to_string()];
    let rows = [
        ("Income", baseline.monthly_income),
        ("Recurring expenses", baseline.monthly_expenses),
        ("Debt payments", baseline.monthly_debt_payments),
        ("One-time expenses", summary.one_time_expenses),
        ("Spent this period", summary.spent_this_period),
        ("Available budget", baseline.available_budget),
    ];
    for (label, value) in rows {
        lines.push(format!("  {:<22}{:>16}", label, format_amount(value, currency)));
    }
    if let Some(rate) = summary.savings_rate {
        lines.push(format!("  {:<22}{:>15.1}%", "Savings rate", rate * 100.0));
    }
    if let Some(rate) = summary.highest_interest_rate {
        lines.push(format!("  {:<22}{:>15.2}%", "Highest debt APR", rate));
    }
    lines.push(format!(
        "  Records: {} incomes, {} expenses ({} recurring), {} debts",
        summary.income_count,
        summary.expense_count,
        summary.recurring_expense_count,
        summary.debt_count
    ));
    for note in notes {
        lines.push(format!("  note: {}", note.dimmed()));
    }
    lines.join("\n")
}

pub fn render_records(snapshot: &FinancialSnapshot) -> String {
    let mut lines = vec!["Records".bold().to_string()];
    let labels = snapshot
        .incomes
        .iter()
        .map(Displayable::display_label)
        .chain(snapshot.expenses.iter().map(Displayable::display_label))
        .chain(snapshot.debts.iter().map(Displayable::display_label));
    for (idx, label) in labels.enumerate() {
        lines.push(format!("  {:>3}. {label}", idx + 1));
    }
    if lines.len() == 1 {
        lines.push("  (none)".to_string());
    }
    lines.join("\n")
}

/// Two-decimal amount with thousands grouping, e.g. `-1,234.50 USD`.
pub fn format_amount(value: f64, currency: &str) -> String {
    let raw = format!("{:.2}", value.abs());
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::new();
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && raw != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction} {currency}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{DebtRecord, ExpenseRecord, Frequency, IncomeRecord};

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(1234567.891, "USD"), "1,234,567.89 USD");
        assert_eq!(format_amount(-100.0, "EUR"), "-100.00 EUR");
        assert_eq!(format_amount(0.0, "USD"), "0.00 USD");
        assert_eq!(format_amount(-0.001, "USD"), "0.00 USD");
    }

    #[test]
    fn record_listing_labels_each_entry() {
        colored::control::set_override(false);
        let snapshot = FinancialSnapshot::new()
            .with_income(IncomeRecord::new(2500.0, Frequency::Biweekly))
            .with_expense(ExpenseRecord::one_time(40.0))
            .with_debt(DebtRecord::new(150.0, Some(19.9)));

        let listing = render_records(&snapshot);
        assert_eq!(
            listing,
            "Records\n    1. Income 2500.00 (Biweekly)\n    2. Expense 40.00 (one-time)\n    3. Debt 150.00/mo @ 19.90%"
        );
        assert!(render_records(&FinancialSnapshot::new()).ends_with("(none)"));
    }

    #[test]
    fn consult_report_lists_warnings() {
        colored::control::set_override(false);
        let result = ConsultResult {
            monthly_payment_impact: 200.0,
            total_cost_over_time: 200.0,
            effect_on_available_budget: -100.0,
            warnings: vec!["This will exceed your available budget".into()],
            can_afford: false,
        };
        let baseline = BudgetBaseline {
            monthly_income: 1000.0,
            monthly_expenses: 900.0,
            monthly_debt_payments: 0.0,
            available_budget: 100.0,
        };
        let report = render_consult(
            &ConsultInput::one_time_expense(200.0),
            &result,
            &baseline,
            "USD",
        );
        assert!(report.starts_with("Consult: expense"));
        assert!(report.contains("-100.00 USD"));
        assert!(report.contains("Verdict: cannot afford"));
        assert!(report.contains("  - This will exceed your available budget"));
    }
}
