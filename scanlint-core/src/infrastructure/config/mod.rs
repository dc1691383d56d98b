// scanlint-core/src/infrastructure/config/mod.rs

pub mod scan;

pub use scan::{discover_scan_files, load_scan_config, parse_scan_config};
