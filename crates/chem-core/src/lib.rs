//! chem-core: pipeline de normalización e índice del corpus de síntesis.
//!
//! Módulos (de hoja a raíz):
//! - `resolve`: resolución de identificadores con niveles de fallback.
//! - `choice`: fuente de elecciones pseudoaleatorias inyectable.
//! - `normalize`: registro crudo → registro canónico (ORD / curado / mock).
//! - `generate`: orquesta la normalización de un lote y escribe los registros.
//! - `reconcile`: fusiona entradas nuevas en el índice persistido.
//! - `scan`: búsqueda de solo lectura sobre archivos crudos.
pub mod choice;
pub mod constants;
pub mod errors;
pub mod generate;
pub mod normalize;
pub mod reconcile;
pub mod resolve;
pub mod scan;

pub use choice::{ChoiceSource, ScriptedChoices, SeededChoices};
pub use errors::CoreError;
pub use generate::{generate, Generated, InMemoryRecordSink, IndexLabel, RecordSink};
pub use normalize::{derive_id, normalize, Normalized};
pub use reconcile::{reconcile, reconcile_store, EntryScope, InMemoryIndexStore, IndexStore, ReconcileSummary, SubtreeScope};
pub use resolve::{resolve, Resolution, ResolutionTier};
pub use scan::{scan, scan_archives, scan_reactions, ArchiveLoader, ArchiveScan, MatchDetail, MatchField, MatchReport, MatchRole, ScanQuery};
