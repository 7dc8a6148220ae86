//! chem-persistence
//!
//! Almacenamiento en disco del corpus: un archivo JSON por registro y el
//! índice `data/index.json`. Implementa los contratos `RecordSink` e
//! `IndexStore` del core.
//!
//! Módulos:
//! - `config`: ubicación del almacenamiento desde .env / entorno.
//! - `record_store`: registros `{id}.json` bajo el subárbol de importación.
//! - `index_store`: índice con reemplazo atómico.
//! - `backfill`: relleno de `step_count`.

pub mod backfill;
pub mod config;
pub mod error;
pub mod index_store;
mod json;
pub mod record_store;

pub use backfill::backfill_step_counts;
pub use config::{init_dotenv, StorageConfig};
pub use error::PersistenceError;
pub use index_store::JsonIndexStore;
pub use record_store::FsRecordStore;
