use consult_domain::FinancialSnapshot;

use crate::CoreError;

/// Describes a persisted snapshot without loading its records.
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    pub name: String,
    pub size_bytes: u64,
}

/// Abstraction over persistence backends capable of storing period snapshots.
pub trait SnapshotStorage: Send + Sync {
    fn save_snapshot(&self, name: &str, snapshot: &FinancialSnapshot) -> Result<(), CoreError>;
    fn load_snapshot(&self, name: &str) -> Result<FinancialSnapshot, CoreError>;
    fn list_snapshots(&self) -> Result<Vec<SnapshotInfo>, CoreError>;
    fn delete_snapshot(&self, name: &str) -> Result<(), CoreError>;
}

/// Detects records a consult would quietly default, and snapshots without income.
pub fn snapshot_warnings(snapshot: &FinancialSnapshot) -> Vec<String> {
    let mut warnings = Vec::new();
    for (idx, expense) in snapshot.expenses.iter().enumerate() {
        if expense.is_recurring && expense.recurring_frequency.is_none() {
            warnings.push(format!("expense {idx} is recurring but has no frequency"));
        }
    }
    if snapshot.incomes.is_empty() {
        warnings.push("snapshot has no income records".to_string());
    }
    warnings
}
