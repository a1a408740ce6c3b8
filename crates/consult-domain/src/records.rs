//! Financial records tracked for the active budgeting period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{monthly_equivalent, Amounted, Displayable, Frequency};

/// One recurring or one-time income entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: f64,
    pub frequency: Frequency,
}

impl IncomeRecord {
    pub fn new(amount: f64, frequency: Frequency) -> Self {
        Self {
            id: None,
            amount,
            frequency,
        }
    }

    pub fn monthly_amount(&self) -> f64 {
        monthly_equivalent(self.amount, self.frequency)
    }
}

/// A tracked expense. Only recurring expenses contribute to the monthly burn rate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<Frequency>,
}

impl ExpenseRecord {
    pub fn one_time(amount: f64) -> Self {
        Self {
            id: None,
            amount,
            is_recurring: false,
            recurring_frequency: None,
        }
    }

    pub fn recurring(amount: f64, frequency: Frequency) -> Self {
        Self {
            id: None,
            amount,
            is_recurring: true,
            recurring_frequency: Some(frequency),
        }
    }

    /// Monthly burn contributed by this expense; zero for one-off spending.
    pub fn monthly_amount(&self) -> f64 {
        if !self.is_recurring {
            return 0.0;
        }
        monthly_equivalent(
            self.amount,
            self.recurring_frequency.unwrap_or(Frequency::Unrecognized),
        )
    }
}

/// An outstanding debt with a monthly minimum payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DebtRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub minimum_payment: f64,
    /// Percent per year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
}

impl DebtRecord {
    pub fn new(minimum_payment: f64, interest_rate: Option<f64>) -> Self {
        Self {
            id: None,
            minimum_payment,
            interest_rate,
        }
    }
}

/// The current-period records an affordability consult is evaluated against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub incomes: Vec<IncomeRecord>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
    #[serde(default)]
    pub debts: Vec<DebtRecord>,
}

impl FinancialSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_income(mut self, income: IncomeRecord) -> Self {
        self.incomes.push(income);
        self
    }

    pub fn with_expense(mut self, expense: ExpenseRecord) -> Self {
        self.expenses.push(expense);
        self
    }

    pub fn with_debt(mut self, debt: DebtRecord) -> Self {
        self.debts.push(debt);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty() && self.debts.is_empty()
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for IncomeRecord {
    fn display_label(&self) -> String {
        format!("Income {:.2} ({})", self.amount, self.frequency)
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        match (self.is_recurring, self.recurring_frequency) {
            (true, Some(freq)) => format!("Expense {:.2} ({})", self.amount, freq),
            (true, None) => format!("Expense {:.2} (recurring)", self.amount),
            (false, _) => format!("Expense {:.2} (one-time)", self.amount),
        }
    }
}

impl Displayable for DebtRecord {
    fn display_label(&self) -> String {
        match self.interest_rate {
            Some(rate) => format!("Debt {:.2}/mo @ {:.2}%", self.minimum_payment, rate),
            None => format!("Debt {:.2}/mo", self.minimum_payment),
        }
    }
}
