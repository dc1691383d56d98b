// scanlint-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Domain (Cœur du métier)
// Metric vocabulary, resolver, diagnostics, scan configuration.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 2. Infrastructure (Adapters)
// YAML loading, scan file discovery.
// Dépend du Domain.
pub mod infrastructure;

// 3. Application (Use Cases)
// Orchestration (check a scan file or a whole warehouse directory).
// Dépend du Domain et de l'Infra.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// Permet d'importer l'erreur principale facilement : use scanlint_core::ScanlintError;
pub use error::ScanlintError;
