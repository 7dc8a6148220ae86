//! Relleno de `step_count` en el índice a partir de los archivos de registro.
//!
//! Los registros escritos a mano no siempre siguen el formato canónico
//! completo, así que sólo se lee la longitud de `sequence`.
use std::fs;

use serde_json::Value;

use crate::config::StorageConfig;
use crate::error::PersistenceError;
use crate::index_store::JsonIndexStore;

fn sequence_len(config: &StorageConfig, index_path: &str) -> Result<usize, PersistenceError> {
    let path = config.resolve_public(index_path);
    let bytes = fs::read(&path).map_err(|e| PersistenceError::io(&path, e))?;
    let doc: Value = serde_json::from_slice(&bytes).map_err(|e| PersistenceError::json(&path, e))?;
    Ok(doc.get("sequence").and_then(Value::as_array).map_or(0, Vec::len))
}

/// Actualiza las entradas cuyo `step_count` no coincide y guarda el índice
/// una sola vez. Devuelve cuántas entradas cambiaron.
///
/// # Errores
/// `MissingIndex` si no hay índice; fallos de lectura o escritura del propio
/// índice. Los registros ilegibles se registran y se omiten.
pub fn backfill_step_counts(config: &StorageConfig, store: &JsonIndexStore) -> Result<usize, PersistenceError> {
    let mut index = store.read_index()?;
    let mut updated = 0usize;
    for entry in index.iter_mut() {
        if entry.path.is_empty() {
            log::warn!("entrada sin path: {}", entry.id);
            continue;
        }
        match sequence_len(config, &entry.path) {
            Ok(count) => {
                if entry.step_count != Some(count) {
                    entry.step_count = Some(count);
                    updated += 1;
                }
            }
            Err(e) => log::warn!("se omite {}: {}", entry.id, e),
        }
    }
    store.write_index(&index)?;
    log::info!("{updated} entradas actualizadas con step_count");
    Ok(updated)
}
