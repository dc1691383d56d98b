// scanlint-core/src/infrastructure/config/scan.rs
//
// Loads scan.yml files into the domain's loosely-typed document and hands
// them to the builder. File syntax problems are hard errors here; anything
// past the YAML layer is the builder's accumulate-and-continue territory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::scan::ScanConfiguration;
use crate::infrastructure::error::InfrastructureError;
use serde_yaml::Value;
use tracing::{info, warn};

/// Conventional file names for a table's scan configuration inside a
/// warehouse directory.
pub static SCAN_FILE_NAMES: &[&str] = &["scan.yml", "scan.yaml"];

pub fn load_scan_config(path: &Path) -> Result<ScanConfiguration, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    info!(path = ?path, "Loading scan configuration");
    let content = fs::read_to_string(path)?;
    let configuration = parse_scan_config(&content)?;
    if configuration.has_errors() {
        warn!(
            path = ?path,
            errors = configuration.parse_log().error_count(),
            "Scan configuration parsed with errors"
        );
    }
    Ok(configuration)
}

pub fn parse_scan_config(content: &str) -> Result<ScanConfiguration, InfrastructureError> {
    let document: Value = serde_yaml::from_str(content)?;
    let Some(mapping) = document.as_mapping() else {
        return Err(InfrastructureError::ConfigError(
            "scan configuration root must be a mapping".to_string(),
        ));
    };
    Ok(ScanConfiguration::parse(mapping))
}

/// Every scan file under `dir`, sorted for deterministic reporting.
pub fn discover_scan_files(dir: &Path) -> Result<Vec<PathBuf>, InfrastructureError> {
    if !dir.is_dir() {
        return Err(InfrastructureError::ConfigNotFound(
            dir.display().to_string(),
        ));
    }
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir) {
        let entry = entry.map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;
        if entry.file_type().is_file() {
            let name = entry.file_name().to_string_lossy();
            if SCAN_FILE_NAMES.contains(&name.as_ref()) {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files.sort();
    info!(dir = ?dir, count = files.len(), "Discovered scan files");
    Ok(files)
}
