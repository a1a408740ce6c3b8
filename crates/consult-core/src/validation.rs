//! Input checks for callers that accept untrusted records.
//!
//! The affordability calculation trusts its inputs; front ends run these first.

use consult_domain::{ConsultInput, FinancialSnapshot};

use crate::CoreError;

pub fn validate_snapshot(snapshot: &FinancialSnapshot) -> Result<(), CoreError> {
    for (idx, income) in snapshot.incomes.iter().enumerate() {
        ensure_amount(&format!("incomes[{idx}].amount"), income.amount)?;
    }
    for (idx, expense) in snapshot.expenses.iter().enumerate() {
        ensure_amount(&format!("expenses[{idx}].amount"), expense.amount)?;
        ensure_recurrence(
            &format!("expenses[{idx}]"),
            expense.is_recurring,
            expense.recurring_frequency.is_some(),
        )?;
    }
    for (idx, debt) in snapshot.debts.iter().enumerate() {
        ensure_amount(&format!("debts[{idx}].minimumPayment"), debt.minimum_payment)?;
        if let Some(rate) = debt.interest_rate {
            ensure_amount(&format!("debts[{idx}].interestRate"), rate)?;
        }
    }
    Ok(())
}

pub fn validate_consult(input: &ConsultInput) -> Result<(), CoreError> {
    ensure_amount("amount", input.amount())?;
    match input {
        ConsultInput::Expense(expense) => ensure_recurrence(
            "expense",
            expense.is_recurring,
            expense.recurring_frequency.is_some(),
        ),
        ConsultInput::Debt(debt) => {
            let optional = [
                ("minimumPayment", debt.minimum_payment),
                ("interestRate", debt.interest_rate),
                ("downPayment", debt.down_payment),
            ];
            for (field, value) in optional {
                if let Some(value) = value {
                    ensure_amount(field, value)?;
                }
            }
            Ok(())
        }
        ConsultInput::Subscription(_) => Ok(()),
    }
}

fn ensure_amount(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!("{field} must be a finite number")));
    }
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    Ok(())
}

fn ensure_recurrence(field: &str, is_recurring: bool, has_frequency: bool) -> Result<(), CoreError> {
    match (is_recurring, has_frequency) {
        (true, false) => Err(CoreError::Validation(format!(
            "{field} is recurring but has no recurringFrequency"
        ))),
        (false, true) => Err(CoreError::Validation(format!(
            "{field} has a recurringFrequency but is not recurring"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::{DebtConsult, ExpenseRecord, Frequency, IncomeRecord};

    #[test]
    fn accepts_well_formed_snapshot() {
        let snapshot = FinancialSnapshot::new()
            .with_income(IncomeRecord::new(100.0, Frequency::Weekly))
            .with_expense(ExpenseRecord::recurring(20.0, Frequency::Monthly));
        assert!(validate_snapshot(&snapshot).is_ok());
    }

    #[test]
    fn rejects_negative_income() {
        let snapshot =
            FinancialSnapshot::new().with_income(IncomeRecord::new(-5.0, Frequency::Monthly));
        let err = validate_snapshot(&snapshot).expect_err("negative income");
        assert!(err.to_string().contains("incomes[0].amount"));
    }

    #[test]
    fn rejects_recurring_expense_without_frequency() {
        let mut expense = ExpenseRecord::recurring(20.0, Frequency::Monthly);
        expense.recurring_frequency = None;
        let snapshot = FinancialSnapshot::new().with_expense(expense);
        assert!(matches!(
            validate_snapshot(&snapshot),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_non_finite_consult_amount() {
        let err = validate_consult(&ConsultInput::one_time_expense(f64::NAN))
            .expect_err("nan amount");
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn rejects_negative_down_payment() {
        let input = ConsultInput::Debt(DebtConsult {
            amount: 1000.0,
            down_payment: Some(-1.0),
            ..DebtConsult::default()
        });
        let err = validate_consult(&input).expect_err("negative down payment");
        assert!(err.to_string().contains("downPayment"));
    }
}
