// scanlint-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Scan configuration for table '{table}' has {count} error(s)")]
    #[diagnostic(
        code(scanlint::domain::configuration),
        help("Run `scanlint check` on the scan file to list every problem.")
    )]
    ConfigurationErrors { table: String, count: usize },
}
