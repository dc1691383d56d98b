// scanlint-core/src/application/mod.rs

pub mod check;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Cela permet au CLI de faire :
// `use scanlint_core::application::{check_scan_dir, check_scan_file, CheckReport};`
// sans avoir à connaître la structure interne des fichiers.

pub use check::{CheckReport, check_scan_dir, check_scan_file};
