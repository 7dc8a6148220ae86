//! Reconciliación del índice persistido.
//!
//! El pipeline es dueño de un subárbol del índice: en cada ejecución las
//! entradas dentro del alcance se reemplazan completas por las nuevas y las
//! de fuera se conservan en su orden previo. Así el índice nunca acumula
//! entradas obsoletas del generador ni toca las que se escribieron a mano.
use std::collections::HashSet;
use std::sync::Mutex;

use chem_domain::{IndexEntry, PersistedIndex};

use crate::errors::CoreError;

/// Decide si una entrada existente pertenece a la zona que se reemplaza.
pub trait EntryScope {
    fn owns(&self, entry: &IndexEntry) -> bool;
}

impl<F> EntryScope for F where F: Fn(&IndexEntry) -> bool
{
    fn owns(&self, entry: &IndexEntry) -> bool {
        self(entry)
    }
}

/// Alcance por prefijo de `path` (`/data/imported/`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreeScope {
    pub prefix: String,
}

impl SubtreeScope {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// `/data/{subdir}/`
    pub fn for_subdir(subdir: &str) -> Self {
        Self::new(format!("/data/{}/", subdir.trim_matches('/')))
    }
}

impl Default for SubtreeScope {
    fn default() -> Self {
        Self::new("/data/imported/")
    }
}

impl EntryScope for SubtreeScope {
    fn owns(&self, entry: &IndexEntry) -> bool {
        entry.is_under(&self.prefix)
    }
}

/// `[e ∈ existing | !scope(e)] ++ new_entries`
pub fn reconcile<S>(existing: PersistedIndex, new_entries: Vec<IndexEntry>, scope: &S) -> PersistedIndex
    where S: EntryScope + ?Sized
{
    let mut updated: PersistedIndex = existing.into_iter().filter(|e| !scope.owns(e)).collect();
    let preserved: HashSet<&str> = updated.iter().map(|e| e.id.as_str()).collect();
    for entry in &new_entries {
        if preserved.contains(entry.id.as_str()) {
            log::warn!("el id {} ya existe fuera del alcance reconciliado", entry.id);
        }
    }
    updated.extend(new_entries);
    updated
}

/// Acceso explícito al índice persistido.
pub trait IndexStore {
    fn load(&self) -> Result<PersistedIndex, CoreError>;
    fn save(&self, index: &PersistedIndex) -> Result<(), CoreError>;
}

#[derive(Default)]
pub struct InMemoryIndexStore {
    pub inner: Mutex<PersistedIndex>,
}

impl InMemoryIndexStore {
    pub fn new(index: PersistedIndex) -> Self {
        Self { inner: Mutex::new(index) }
    }

    pub fn snapshot(&self) -> PersistedIndex {
        self.inner.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl IndexStore for InMemoryIndexStore {
    fn load(&self) -> Result<PersistedIndex, CoreError> {
        self.inner
            .lock()
            .map(|g| g.clone())
            .map_err(|e| CoreError::IndexLoad(e.to_string()))
    }

    fn save(&self, index: &PersistedIndex) -> Result<(), CoreError> {
        let mut guard = self.inner.lock().map_err(|e| CoreError::IndexSave(e.to_string()))?;
        *guard = index.clone();
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileSummary {
    /// Entradas fuera del alcance que se conservaron.
    pub kept: usize,
    /// Entradas dentro del alcance que se reemplazaron.
    pub dropped: usize,
    pub added: usize,
}

/// Lee, reconcilia y guarda una sola vez. Si la lectura falla no se escribe
/// nada.
pub fn reconcile_store<T, S>(store: &T, new_entries: Vec<IndexEntry>, scope: &S) -> Result<ReconcileSummary, CoreError>
    where T: IndexStore + ?Sized,
          S: EntryScope + ?Sized
{
    let existing = store.load()?;
    let total = existing.len();
    let added = new_entries.len();
    let updated = reconcile(existing, new_entries, scope);
    let kept = updated.len() - added;
    let summary = ReconcileSummary { kept,
                                     dropped: total - kept,
                                     added };
    store.save(&updated)?;
    log::info!("índice reconciliado: {} conservadas, {} reemplazadas, {} nuevas",
               summary.kept,
               summary.dropped,
               summary.added);
    Ok(summary)
}
