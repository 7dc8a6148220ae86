//! ChemSynth Rust Library
//!
//! Orquesta las ejecuciones del pipeline sobre los crates del workspace:
//! - `config`: configuración desde .env / entorno (`CONFIG`).
//! - `errors`: error paraguas de la aplicación.
//! - `ingest`: ejecuciones mock / curada / ORD.
//! - `report`: reporte del escáner.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod ingest;
pub mod report;

pub use config::{AppConfig, CONFIG};
pub use errors::AppError;
pub use ingest::{generate_curated, ingest_batch, ingest_mock, ingest_ord, IngestOutcome, IngestRun};
pub use report::write_scan_report;
