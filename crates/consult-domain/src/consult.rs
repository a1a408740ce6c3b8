//! Proposed commitments and the verdict produced for them.

use serde::{Deserialize, Serialize};

use crate::common::{BillingFrequency, Frequency};

/// A proposed one-time or recurring expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseConsult {
    pub amount: f64,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<Frequency>,
}

/// A proposed loan. Every field except the principal is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtConsult {
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment: Option<f64>,
    /// Loan term in months.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<u32>,
    /// Percent per year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<f64>,
}

/// A proposed subscription billed monthly or yearly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionConsult {
    pub amount: f64,
    #[serde(default)]
    pub billing_frequency: BillingFrequency,
}

/// The new financial commitment being evaluated, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConsultInput {
    Expense(ExpenseConsult),
    Debt(DebtConsult),
    Subscription(SubscriptionConsult),
}

impl ConsultInput {
    pub fn one_time_expense(amount: f64) -> Self {
        ConsultInput::Expense(ExpenseConsult {
            amount,
            is_recurring: false,
            recurring_frequency: None,
        })
    }

    pub fn recurring_expense(amount: f64, frequency: Frequency) -> Self {
        ConsultInput::Expense(ExpenseConsult {
            amount,
            is_recurring: true,
            recurring_frequency: Some(frequency),
        })
    }

    pub fn subscription(amount: f64, billing_frequency: BillingFrequency) -> Self {
        ConsultInput::Subscription(SubscriptionConsult {
            amount,
            billing_frequency,
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ConsultInput::Expense(_) => "expense",
            ConsultInput::Debt(_) => "debt",
            ConsultInput::Subscription(_) => "subscription",
        }
    }

    pub fn amount(&self) -> f64 {
        match self {
            ConsultInput::Expense(expense) => expense.amount,
            ConsultInput::Debt(debt) => debt.amount,
            ConsultInput::Subscription(sub) => sub.amount,
        }
    }
}

impl From<DebtConsult> for ConsultInput {
    fn from(debt: DebtConsult) -> Self {
        ConsultInput::Debt(debt)
    }
}

/// Monthly budget impact and verdict for a consult.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsultResult {
    pub monthly_payment_impact: f64,
    pub total_cost_over_time: f64,
    pub effect_on_available_budget: f64,
    pub warnings: Vec<String>,
    pub can_afford: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consult_input_uses_type_tag() {
        let json = r#"{"type": "debt", "amount": 12000, "months": 12, "interestRate": 24}"#;
        let input: ConsultInput = serde_json::from_str(json).unwrap();
        match input {
            ConsultInput::Debt(debt) => {
                assert_eq!(debt.amount, 12000.0);
                assert_eq!(debt.months, Some(12));
                assert_eq!(debt.interest_rate, Some(24.0));
                assert_eq!(debt.minimum_payment, None);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn subscription_defaults_to_monthly_billing() {
        let input: ConsultInput =
            serde_json::from_str(r#"{"type": "subscription", "amount": 15}"#).unwrap();
        assert_eq!(
            input,
            ConsultInput::subscription(15.0, BillingFrequency::Monthly)
        );
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let parsed = serde_json::from_str::<ConsultInput>(r#"{"type": "lease", "amount": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = ConsultResult {
            monthly_payment_impact: 10.0,
            total_cost_over_time: 120.0,
            effect_on_available_budget: 90.0,
            warnings: Vec::new(),
            can_afford: true,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"monthlyPaymentImpact\":10.0"));
        assert!(json.contains("\"canAfford\":true"));
    }
}
