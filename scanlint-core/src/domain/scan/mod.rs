// scanlint-core/src/domain/scan/mod.rs

pub mod column;
pub mod configuration;
pub mod helper;

// Re-exports
pub use column::{ColumnConfiguration, MissingRules, ValidityRules};
pub use configuration::ScanConfiguration;
