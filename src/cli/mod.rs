//! Command-line front end over the consult library.

pub mod commands;
pub mod output;

use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand};

use crate::errors::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "budget_consult_cli",
    version,
    about = "Check whether a new expense, debt, or subscription fits this month's budget"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate a proposed commitment against a snapshot.
    Consult {
        /// Snapshot file path, or the name of a stored snapshot.
        #[arg(long, short)]
        snapshot: String,
        /// Consult input JSON file (`-` reads stdin).
        #[arg(long, short)]
        input: PathBuf,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show monthly totals for a snapshot.
    Dashboard {
        #[arg(long, short)]
        snapshot: String,
        #[arg(long)]
        json: bool,
        /// Also list every record in the snapshot.
        #[arg(long)]
        records: bool,
    },
    /// Validate a snapshot file and copy it into the snapshot store.
    Import {
        #[arg(long, short)]
        name: String,
        /// First day of the period the records belong to (YYYY-MM-DD).
        #[arg(long)]
        period: Option<String>,
        file: PathBuf,
    },
    /// List stored snapshots.
    List,
    /// Inspect or change configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    Show,
    SetCurrency { code: String },
    SetIncomeShare { share: f64 },
    SetInterestThreshold { rate: f64 },
}

/// Parses process arguments and runs the selected command against stdout.
pub fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with(cli, &mut handle)
}

pub fn run_with(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let rendered = match cli.command {
        Command::Consult {
            snapshot,
            input,
            json,
        } => commands::consult(&snapshot, &input, json)?,
        Command::Dashboard {
            snapshot,
            json,
            records,
        } => commands::dashboard(&snapshot, json, records)?,
        Command::Import { name, period, file } => {
            commands::import(&name, period.as_deref(), &file)?
        }
        Command::List => commands::list()?,
        Command::Config { action } => commands::config(action)?,
    };
    writeln!(out, "{rendered}").map_err(|err| CliError::Command(err.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn consult_arguments_parse() {
        let cli = Cli::try_parse_from([
            "budget_consult_cli",
            "consult",
            "--snapshot",
            "october",
            "--input",
            "-",
            "--json",
        ])
        .expect("parse");
        match cli.command {
            Command::Consult {
                snapshot, json, ..
            } => {
                assert_eq!(snapshot, "october");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
