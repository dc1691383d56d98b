// scanlint-core/src/application/check.rs
//
// USE CASE: validate scan configuration files without running a scan.
// Loads each file, builds the configuration, and surfaces its full parse
// log so CI can gate on broken scan definitions.

use std::path::{Path, PathBuf};

use crate::domain::diagnostics::ParseEntry;
use crate::error::ScanlintError;
use crate::infrastructure::config::{discover_scan_files, load_scan_config};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: PathBuf,
    pub table_name: Option<String>,
    /// The resolved metric list (categories expanded, dependencies applied).
    pub metrics: Vec<String>,
    pub diagnostics: Vec<ParseEntry>,
    pub errors: usize,
    pub warnings: usize,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    pub fn passed_strict(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }
}

pub fn check_scan_file(path: &Path) -> Result<CheckReport, ScanlintError> {
    let configuration = load_scan_config(path)?;
    let log = configuration.parse_log();
    let report = CheckReport {
        path: path.to_path_buf(),
        table_name: configuration.table_name().map(str::to_string),
        metrics: configuration.metrics().to_vec(),
        diagnostics: log.entries().to_vec(),
        errors: log.error_count(),
        warnings: log.warning_count(),
    };
    info!(
        path = ?report.path,
        errors = report.errors,
        warnings = report.warnings,
        "Checked scan configuration"
    );
    Ok(report)
}

/// Checks every scan file found under `dir`. An empty result means the
/// directory holds no scan files at all; callers decide whether that is
/// suspicious.
pub fn check_scan_dir(dir: &Path) -> Result<Vec<CheckReport>, ScanlintError> {
    let mut reports = Vec::new();
    for path in discover_scan_files(dir)? {
        reports.push(check_scan_file(&path)?);
    }
    Ok(reports)
}
