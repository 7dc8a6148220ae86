//! Ejecuciones de ingesta: normalizar un lote, escribir los registros y
//! reconciliar el índice en una sola pasada.
//!
//! Cada ejecución reemplaza por completo el subárbol de importación del
//! índice; las entradas escritas a mano quedan intactas.
use std::fmt;

use chem_adapters::{curated_batch, DatasetFetcher};
use chem_core::{generate, reconcile_store, ArchiveLoader, ChoiceSource, ReconcileSummary, SeededChoices, SubtreeScope};
use chem_domain::RawSource;
use chem_persistence::{FsRecordStore, JsonIndexStore, StorageConfig};

use crate::config::AppConfig;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestRun {
    Mock,
    Curated,
    Ord,
}

impl fmt::Display for IngestRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        IngestRun::Mock => "mock",
                        IngestRun::Curated => "curated",
                        IngestRun::Ord => "ord",
                    })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    pub run: IngestRun,
    pub generated: usize,
    /// `None` cuando no se tocó el índice (archivo fuente ilegible).
    pub summary: Option<ReconcileSummary>,
}

/// Genera, escribe y reconcilia un lote contra el almacenamiento dado.
pub fn ingest_batch<C>(run: IngestRun,
                       storage: &StorageConfig,
                       batch: Vec<RawSource>,
                       cap: Option<usize>,
                       choices: &mut C)
                       -> Result<IngestOutcome, AppError>
    where C: ChoiceSource
{
    let records = FsRecordStore::new(storage.clone());
    let index = JsonIndexStore::new(storage.index_path());
    let generated = generate(batch, cap, &records, choices)?;
    let count = generated.len();
    let entries = generated.into_iter().map(|g| g.entry).collect();
    let summary = reconcile_store(&index, entries, &SubtreeScope::new(storage.index_prefix()))?;
    log::info!("ingesta {run} completada: {count} registros");
    Ok(IngestOutcome { run,
                       generated: count,
                       summary: Some(summary) })
}

/// Registro fijo de prueba.
pub fn ingest_mock(config: &AppConfig) -> Result<IngestOutcome, AppError> {
    ingest_batch(IngestRun::Mock,
                 &config.storage,
                 vec![RawSource::Mock],
                 None,
                 &mut SeededChoices::from_seed(config.seed))
}

/// Las 100 reacciones del catálogo curado.
pub fn generate_curated(config: &AppConfig) -> Result<IngestOutcome, AppError> {
    ingest_batch(IngestRun::Curated,
                 &config.storage,
                 curated_batch(),
                 None,
                 &mut SeededChoices::from_seed(config.seed))
}

/// Descarga (si falta) y decodifica el dataset ORD, y lo ingesta con el
/// límite `ord_limit`.
///
/// Un dataset ilegible produce cero registros y deja el índice como estaba.
pub fn ingest_ord<F, L>(config: &AppConfig, fetcher: &F, loader: &L) -> Result<IngestOutcome, AppError>
    where F: DatasetFetcher + ?Sized,
          L: ArchiveLoader + ?Sized
{
    let archive = fetcher.ensure_local(&config.dataset_url, &config.download_dir)?;
    let reactions = match loader.load(&archive) {
        Ok(reactions) => reactions,
        Err(e) => {
            log::warn!("no se pudo leer {}: {}", archive.display(), e);
            return Ok(IngestOutcome { run: IngestRun::Ord,
                                      generated: 0,
                                      summary: None });
        }
    };
    log::info!("{} reacciones en {}", reactions.len(), archive.display());
    let batch = reactions.into_iter().map(RawSource::Structured).collect();
    ingest_batch(IngestRun::Ord,
                 &config.storage,
                 batch,
                 Some(config.ord_limit),
                 &mut SeededChoices::from_seed(config.seed))
}
