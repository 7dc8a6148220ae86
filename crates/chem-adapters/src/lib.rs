//! chem-adapters: fuentes de entrada del pipeline.
//!
//! - `ord`: esquema protobuf de ORD y conversión a `RawReaction`.
//! - `archive`: carga de archivos `.pb.gz` (implementa `ArchiveLoader`).
//! - `fetch`: descarga del dataset, reutilizando el archivo local.
//! - `catalog`: catálogo curado de 100 reacciones.
pub mod archive;
pub mod catalog;
pub mod error;
pub mod fetch;
pub mod ord;

pub use archive::{find_archives, OrdArchiveLoader};
pub use catalog::{curated_batch, curated_reactions, CURATED_CATALOG};
pub use error::AdapterError;
pub use fetch::{file_name_from_url, write_atomically, DatasetFetcher, HttpFetcher};
