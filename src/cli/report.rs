//! CLI commands for reports
//!
//! Weekly and monthly reports, and raw CSV exports.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::Subcommand;
use serde_json::json;

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExportPeriod, Session};
use crate::reports::ExpenseReports;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Largest and smallest expense per category over the last 7 days
    Weekly,

    /// Category totals for the current month, saved as CSV too
    Monthly {
        /// Directory for the CSV file (defaults to the exports directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    session: &Session,
    cmd: ReportCommands,
    now: NaiveDateTime,
) -> ExpenseResult<()> {
    let reports =
        ExpenseReports::new(&storage.expenses).with_currency_symbol(&settings.currency_symbol);

    match cmd {
        ReportCommands::Weekly => {
            print!("{}", reports.weekly_report(session, now)?);
        }
        ReportCommands::Monthly { output_dir } => {
            let output = reports.monthly_report(session, now)?;
            print!("{}", output.text);

            let dir = output_dir.unwrap_or_else(|| storage.paths().exports_dir());
            let path = write_export(&dir, &output.file_name, &output.csv)?;
            audit_export(
                storage,
                session,
                &output.file_name,
                &json!({ "report": "monthly", "total_spent": output.total_spent }),
            );
            println!("\nMonthly report exported to: {}", path.display());
        }
    }

    Ok(())
}

/// Handle `export <week|month>`
pub fn handle_export_command(
    storage: &Storage,
    session: &Session,
    period: &str,
    output_dir: Option<PathBuf>,
    now: NaiveDateTime,
) -> ExpenseResult<()> {
    let period = ExportPeriod::parse(period).map_err(|e| ExpenseError::Validation(e.to_string()))?;

    let export = ExpenseReports::new(&storage.expenses).export_csv(session, now, period)?;

    let dir = output_dir.unwrap_or_else(|| storage.paths().exports_dir());
    let path = write_export(&dir, &export.file_name, &export.csv)?;
    audit_export(
        storage,
        session,
        &export.file_name,
        &json!({ "period": period.as_str(), "rows": export.rows }),
    );

    println!("Exported {} expense(s) to: {}", export.rows, path.display());
    Ok(())
}

fn write_export(dir: &Path, file_name: &str, contents: &str) -> ExpenseResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        ExpenseError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let path = dir.join(file_name);
    fs::write(&path, contents).map_err(|e| {
        ExpenseError::Export(format!("Failed to write file {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}

/// The file is already on disk, so an audit failure only warns
fn audit_export(
    storage: &Storage,
    session: &Session,
    file_name: &str,
    details: &serde_json::Value,
) {
    let user = Some(session.username().to_string());
    if let Err(e) = storage.log_export(file_name, user, details) {
        tracing::warn!(file = file_name, error = %e, "export written but not audited");
    }
}
