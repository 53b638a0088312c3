use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;

use crate::config::Config;
use crate::db::Database;
use crate::import::{import_file, ImportKind};
use crate::report::{build_cashflow, format_brl, format_decimal, format_percent, summarize_progress};

use super::as_server;

pub(crate) fn as_cli(args: &[String], config: &Config, mut db: Database) -> Result<()> {
    match args[1].as_str() {
        "serve" => as_server(config, db),
        "import-budget" => cli_import(&args[2..], ImportKind::Budget, &mut db),
        "import-payments" => cli_import(&args[2..], ImportKind::Payments, &mut db),
        "items" => cli_items(&db),
        "summary" | "s" => cli_summary(&db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("obra {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Obra Tracker - contract progress and cashflow");
    println!();
    println!("Usage: obra [command]");
    println!();
    println!("Commands:");
    println!("  (none), serve                 Run the web app (OBRA_ADDR, default 127.0.0.1:5000)");
    println!("  import-budget <file.csv>      Replace the budget with an SEO export");
    println!("  import-payments <file.csv>    Replace payments with a GERFIN export");
    println!("  items                         Print budget items with executed quantities");
    println!("  summary                       Print the monthly cashflow");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Database: DATABASE_URL (sqlite://<path>), default obra.db in the user data dir");
}

fn cli_import(args: &[String], kind: ImportKind, db: &mut Database) -> Result<()> {
    let Some(file_path) = args.first() else {
        anyhow::bail!(
            "Usage: obra {} <file.csv>",
            match kind {
                ImportKind::Budget => "import-budget",
                ImportKind::Payments => "import-payments",
            }
        );
    };

    let expanded = shellexpand(file_path);
    let path = Path::new(&expanded);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {file_path}"))?;

    let summary = import_file(db, kind, &bytes)
        .with_context(|| format!("{kind} import of {file_path} failed"))?;
    println!(
        "{kind}: read {} rows, imported {} ({} skipped), replaced {}",
        summary.rows_read, summary.inserted, summary.skipped, summary.removed
    );
    if summary.dropped_measurements > 0 {
        println!(
            "Removed {} measurement(s) recorded against the previous budget",
            summary.dropped_measurements
        );
    }
    Ok(())
}

fn cli_items(db: &Database) -> Result<()> {
    let rows = summarize_progress(&db.get_budget_items()?, &db.get_progress_entries()?);
    if rows.is_empty() {
        println!("No budget items");
        return Ok(());
    }

    println!(
        "{:<10} {:<36} {:<6} {:>12} {:>12} {:>12} {:>7}",
        "Code", "Description", "Unit", "Contracted", "Unit price", "Executed", "%"
    );
    println!("{}", "─".repeat(101));
    for row in &rows {
        let percent = row
            .executed_ratio()
            .map(format_percent)
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<10} {:<36} {:<6} {:>12} {:>12} {:>12} {:>7}",
            truncate(&row.item.code, 10),
            truncate(&row.item.description, 36),
            truncate(&row.item.unit, 6),
            format_decimal(row.item.contracted_quantity, 2),
            format_brl(row.item.unit_price),
            format_decimal(row.executed, 2),
            percent,
        );
    }

    let contracted = rows
        .iter()
        .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.item.contracted_value()));
    let earned = rows
        .iter()
        .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.earned_value()));
    println!("{}", "─".repeat(101));
    println!("  Contract value: R$ {}", format_brl(contracted));
    println!("  Earned value:   R$ {}", format_brl(earned));
    Ok(())
}

fn cli_summary(db: &Database) -> Result<()> {
    let cashflow = build_cashflow(
        &db.get_budget_items()?,
        &db.get_progress_entries()?,
        &db.get_payment_records()?,
    );

    println!("Obra Tracker - cashflow");
    println!("{}", "─".repeat(40));
    println!("  Production: R$ {}", format_brl(cashflow.total_production));
    println!("  Spend:      R$ {}", format_brl(cashflow.total_spend));
    println!("  Balance:    R$ {}", format_brl(cashflow.balance));
    if cashflow.undated_payments > 0 {
        println!("  ({} undated payment(s) left out)", cashflow.undated_payments);
    }

    if !cashflow.is_empty() {
        println!();
        println!("{:<8} {:>16} {:>16} {:>16}", "Month", "Production", "Spend", "Cum. production");
        for (i, label) in cashflow.labels.iter().enumerate() {
            println!(
                "{:<8} {:>16} {:>16} {:>16}",
                label,
                format_brl(cashflow.monthly_production[i]),
                format_brl(cashflow.monthly_spend[i]),
                format_brl(cashflow.cumulative_production[i]),
            );
        }
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
