//! Affordability verdicts for a proposed commitment against the current baseline.

use consult_domain::{
    monthly_equivalent, BillingFrequency, ConsultInput, ConsultResult, DebtConsult,
    ExpenseConsult, FinancialSnapshot, Frequency, SubscriptionConsult,
};
use tracing::debug;

use crate::budget_service::{BudgetBaseline, BudgetService};

pub const EXCEEDS_BUDGET_WARNING: &str = "This will exceed your available budget";
pub const HIGH_INTEREST_WARNING: &str =
    "High interest rate detected. Consider alternatives if possible.";

const DEFAULT_INCOME_SHARE_WARNING: f64 = 0.3;
const DEFAULT_HIGH_INTEREST_RATE: f64 = 20.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Thresholds that decide which advisory warnings a consult carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsultPolicy {
    /// Fraction of monthly income above which a payment is flagged.
    pub income_share_warning: f64,
    /// Annual percent above which a debt's rate is flagged.
    pub high_interest_rate: f64,
}

impl Default for ConsultPolicy {
    fn default() -> Self {
        Self {
            income_share_warning: DEFAULT_INCOME_SHARE_WARNING,
            high_interest_rate: DEFAULT_HIGH_INTEREST_RATE,
        }
    }
}

impl ConsultPolicy {
    pub fn income_share_message(&self) -> String {
        format!(
            "This payment represents more than {:.0}% of your monthly income",
            self.income_share_warning * 100.0
        )
    }
}

/// Monthly impact and projected total for a single commitment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommitmentImpact {
    pub monthly_payment: f64,
    pub total_cost_over_time: f64,
}

/// Computes the affordability verdict using the default thresholds.
pub fn compute_affordability(snapshot: &FinancialSnapshot, input: &ConsultInput) -> ConsultResult {
    AffordabilityService::consult(snapshot, input)
}

/// Stateless affordability calculator.
pub struct AffordabilityService;

impl AffordabilityService {
    pub fn consult(snapshot: &FinancialSnapshot, input: &ConsultInput) -> ConsultResult {
        Self::consult_with_policy(snapshot, input, &ConsultPolicy::default())
    }

    pub fn consult_with_policy(
        snapshot: &FinancialSnapshot,
        input: &ConsultInput,
        policy: &ConsultPolicy,
    ) -> ConsultResult {
        let baseline = BudgetService::baseline(snapshot);
        Self::evaluate(&baseline, input, policy)
    }

    /// Evaluates `input` against an already computed baseline.
    pub fn evaluate(
        baseline: &BudgetBaseline,
        input: &ConsultInput,
        policy: &ConsultPolicy,
    ) -> ConsultResult {
        let impact = Self::impact(input);
        let effect_on_available_budget = baseline.available_budget - impact.monthly_payment;
        let can_afford = effect_on_available_budget >= 0.0;

        let mut warnings = Vec::new();
        if !can_afford {
            warnings.push(EXCEEDS_BUDGET_WARNING.to_string());
        }
        if impact.monthly_payment > baseline.monthly_income * policy.income_share_warning {
            warnings.push(policy.income_share_message());
        }
        if let ConsultInput::Debt(debt) = input {
            if debt
                .interest_rate
                .is_some_and(|rate| rate > policy.high_interest_rate)
            {
                warnings.push(HIGH_INTEREST_WARNING.to_string());
            }
        }

        debug!(
            kind = input.kind(),
            monthly_impact = impact.monthly_payment,
            effect = effect_on_available_budget,
            can_afford,
            "affordability consult evaluated"
        );

        ConsultResult {
            monthly_payment_impact: impact.monthly_payment,
            total_cost_over_time: impact.total_cost_over_time,
            effect_on_available_budget,
            warnings,
            can_afford,
        }
    }

    pub fn impact(input: &ConsultInput) -> CommitmentImpact {
        match input {
            ConsultInput::Expense(expense) => Self::expense_impact(expense),
            ConsultInput::Debt(debt) => Self::debt_impact(debt),
            ConsultInput::Subscription(sub) => Self::subscription_impact(sub),
        }
    }

    /// A one-time expense hits the budget as a full month's impact.
    fn expense_impact(expense: &ExpenseConsult) -> CommitmentImpact {
        let monthly_payment = if expense.is_recurring {
            monthly_equivalent(
                expense.amount,
                expense
                    .recurring_frequency
                    .unwrap_or(Frequency::Unrecognized),
            )
        } else {
            expense.amount
        };
        CommitmentImpact {
            monthly_payment,
            total_cost_over_time: monthly_payment,
        }
    }

    /// Flat simple interest over the term; no amortization schedule.
    fn debt_impact(debt: &DebtConsult) -> CommitmentImpact {
        let monthly_payment = debt.minimum_payment.unwrap_or(0.0);
        let total_cost_over_time = match debt.months {
            Some(months) => {
                let principal = debt.amount - debt.down_payment.unwrap_or(0.0);
                let mut total = match debt.interest_rate {
                    Some(rate) => {
                        let monthly_rate = rate / 100.0 / MONTHS_PER_YEAR;
                        principal * (1.0 + monthly_rate * f64::from(months))
                    }
                    None => principal,
                };
                if let Some(down_payment) = debt.down_payment {
                    total += down_payment;
                }
                total
            }
            None => 0.0,
        };
        CommitmentImpact {
            monthly_payment,
            total_cost_over_time,
        }
    }

    fn subscription_impact(sub: &SubscriptionConsult) -> CommitmentImpact {
        match sub.billing_frequency {
            BillingFrequency::Yearly => CommitmentImpact {
                monthly_payment: sub.amount / MONTHS_PER_YEAR,
                total_cost_over_time: sub.amount,
            },
            BillingFrequency::Monthly | BillingFrequency::Unrecognized => CommitmentImpact {
                monthly_payment: sub.amount,
                total_cost_over_time: sub.amount * MONTHS_PER_YEAR,
            },
        }
    }
}
