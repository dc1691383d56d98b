// scanlint/src/commands/check.rs
//
// USE CASE: validate scan.yml files and report every parse problem.
// Exit code 0 means all checked files are usable; 1 means at least one
// file has error-severity diagnostics (or warnings under --strict).

use std::path::PathBuf;

use scanlint_core::application::{CheckReport, check_scan_dir, check_scan_file};
use scanlint_core::domain::Severity;

pub fn execute(path: PathBuf, format: &str, strict: bool) -> anyhow::Result<()> {
    tracing::debug!(path = ?path, strict, "Running scan check");
    let reports = if path.is_dir() {
        check_scan_dir(&path)?
    } else {
        vec![check_scan_file(&path)?]
    };

    if reports.is_empty() {
        anyhow::bail!("No scan files found under {}", path.display());
    }

    let failed = reports
        .iter()
        .filter(|report| {
            if strict {
                !report.passed_strict()
            } else {
                !report.passed()
            }
        })
        .count();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&reports)?),
        "text" => print_text(&reports),
        other => anyhow::bail!("Unknown format '{}' (expected text or json)", other),
    }

    if failed > 0 {
        eprintln!("\n❌ FAILURE. {} of {} scan file(s) rejected.", failed, reports.len());
        std::process::exit(1);
    }

    if format == "text" {
        println!("\n✨ All {} scan file(s) are valid.", reports.len());
    }
    Ok(())
}

fn print_text(reports: &[CheckReport]) {
    for report in reports {
        println!("\n🔍 Checking {}", report.path.display());
        match &report.table_name {
            Some(table) => println!("   Table: {}", table),
            None => println!("   Table: <unset>"),
        }
        println!("   Metrics: [{}]", report.metrics.join(", "));

        for entry in &report.diagnostics {
            let icon = match entry.severity {
                Severity::Info => "ℹ️ ",
                Severity::Warning => "⚠️ ",
                Severity::Error => "❌",
            };
            println!("   {} {}", icon, entry.message);
        }
        println!(
            "   {} error(s), {} warning(s)",
            report.errors, report.warnings
        );
    }
}
