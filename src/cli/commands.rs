use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use chrono::{Datelike, NaiveDate, Utc};
use consult_core::{
    storage::{snapshot_warnings, SnapshotStorage},
    validation::{validate_consult, validate_snapshot},
    AffordabilityService, BudgetService, SummaryService,
};
use consult_domain::{ConsultInput, FinancialSnapshot};
use consult_storage_json::{load_snapshot_from_path, JsonSnapshotStorage};
use tracing::{info, warn};

use super::{output, ConfigAction};
use crate::{
    errors::CliError,
    settings::{config_manager, consult_policy, load_config},
    utils::paths::snapshots_dir,
};

pub fn consult(snapshot_ref: &str, input_path: &Path, json: bool) -> Result<String, CliError> {
    let config = load_config()?;
    let snapshot = resolve_snapshot(snapshot_ref)?;
    let input: ConsultInput = serde_json::from_str(&read_input(input_path)?)
        .map_err(|err| CliError::Input(format!("consult input: {err}")))?;
    validate_snapshot(&snapshot)?;
    validate_consult(&input)?;

    let baseline = BudgetService::baseline(&snapshot);
    let result = AffordabilityService::evaluate(&baseline, &input, &consult_policy(&config));
    if json {
        return serde_json::to_string_pretty(&result)
            .map_err(|err| CliError::Command(err.to_string()));
    }
    output::configure_color(config.ui_color_enabled);
    Ok(output::render_consult(
        &input,
        &result,
        &baseline,
        &config.currency,
    ))
}

pub fn dashboard(snapshot_ref: &str, json: bool, records: bool) -> Result<String, CliError> {
    let config = load_config()?;
    let snapshot = resolve_snapshot(snapshot_ref)?;
    validate_snapshot(&snapshot)?;
    let summary = SummaryService::dashboard(&snapshot);
    if json {
        return serde_json::to_string_pretty(&output::DashboardView::from(&summary))
            .map_err(|err| CliError::Command(err.to_string()));
    }
    output::configure_color(config.ui_color_enabled);
    let notes = snapshot_warnings(&snapshot);
    let mut rendered = output::render_dashboard(&summary, &notes, &config.currency);
    if records {
        rendered.push('\n');
        rendered.push_str(&output::render_records(&snapshot));
    }
    Ok(rendered)
}

pub fn import(name: &str, period: Option<&str>, file: &Path) -> Result<String, CliError> {
    let mut snapshot = load_snapshot_from_path(file)?;
    validate_snapshot(&snapshot)?;
    snapshot.period_start = match period {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|err| CliError::Input(format!("period `{raw}`: {err}")))?,
        ),
        None => snapshot.period_start.or_else(current_period_start),
    };

    let storage = open_storage()?;
    storage.save_snapshot(name, &snapshot)?;
    info!("imported snapshot `{}` from {}", name, file.display());
    Ok(format!(
        "Imported snapshot `{}` ({} incomes, {} expenses, {} debts)",
        name,
        snapshot.incomes.len(),
        snapshot.expenses.len(),
        snapshot.debts.len()
    ))
}

pub fn list() -> Result<String, CliError> {
    let storage = open_storage()?;
    let entries = storage.list_snapshots()?;
    if entries.is_empty() {
        return Ok("No snapshots stored.".to_string());
    }
    Ok(entries
        .iter()
        .map(|entry| format!("{} ({} bytes)", entry.name, entry.size_bytes))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn config(action: ConfigAction) -> Result<String, CliError> {
    let manager = config_manager()?;
    let mut config = manager.load()?;
    match action {
        ConfigAction::Show => {
            return serde_json::to_string_pretty(&config)
                .map_err(|err| CliError::Command(err.to_string()));
        }
        ConfigAction::SetCurrency { code } => config.set_currency(&code)?,
        ConfigAction::SetIncomeShare { share } => config.set_income_share_warning(share)?,
        ConfigAction::SetInterestThreshold { rate } => config.set_high_interest_rate(rate)?,
    }
    manager.save(&config)?;
    Ok(format!("Configuration saved to {}", manager.config_path().display()))
}

fn open_storage() -> Result<JsonSnapshotStorage, CliError> {
    let config = load_config()?;
    Ok(JsonSnapshotStorage::new(snapshots_dir(&config))?)
}

/// Treats an existing path as a snapshot file, anything else as a stored snapshot name.
fn resolve_snapshot(reference: &str) -> Result<FinancialSnapshot, CliError> {
    let path = Path::new(reference);
    let snapshot = if path.is_file() {
        load_snapshot_from_path(path)?
    } else {
        open_storage()?.load_snapshot(reference)?
    };
    if snapshot.is_empty() {
        warn!("snapshot `{}` has no records", reference);
    }
    Ok(snapshot)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| CliError::Input(format!("stdin: {err}")))?;
        return Ok(buffer);
    }
    fs::read_to_string(path)
        .map_err(|err| CliError::Input(format!("{}: {err}", path.display())))
}

fn current_period_start() -> Option<NaiveDate> {
    let today = Utc::now().date_naive();
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1)
}
