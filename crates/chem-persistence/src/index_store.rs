//! Índice del corpus (`data/index.json`) con reemplazo atómico.
//!
//! `save` escribe a un temporal hermano y lo renombra sobre el destino: un
//! corte a mitad de escritura deja el índice anterior o el nuevo completos.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chem_core::{CoreError, IndexStore};
use chem_domain::PersistedIndex;
use tempfile::NamedTempFile;

use crate::error::PersistenceError;
use crate::json::to_pretty_vec;

#[derive(Debug, Clone)]
pub struct JsonIndexStore {
    path: PathBuf,
}

impl JsonIndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Lee el índice existente.
    ///
    /// # Errores
    /// `MissingIndex` si el archivo no existe: el índice lo crea la
    /// aplicación consumidora y la ingesta sólo lo reescribe.
    pub fn read_index(&self) -> Result<PersistedIndex, PersistenceError> {
        if !self.exists() {
            return Err(PersistenceError::MissingIndex(self.path.clone()));
        }
        let bytes = fs::read(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::json(&self.path, e))
    }

    pub fn write_index(&self, index: &PersistedIndex) -> Result<(), PersistenceError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| PersistenceError::io(&dir, e))?;
        let bytes = to_pretty_vec(index).map_err(|e| PersistenceError::json(&self.path, e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| PersistenceError::io(&dir, e))?;
        tmp.write_all(&bytes).map_err(|e| PersistenceError::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| PersistenceError::io(tmp.path(), e))?;
        tmp.persist(&self.path).map_err(|e| PersistenceError::Persist { path: self.path.clone(),
                                                                         message: e.error.to_string() })?;
        log::debug!("índice guardado: {} entradas en {}", index.len(), self.path.display());
        Ok(())
    }
}

impl IndexStore for JsonIndexStore {
    fn load(&self) -> Result<PersistedIndex, CoreError> {
        self.read_index().map_err(|e| CoreError::IndexLoad(e.to_string()))
    }

    fn save(&self, index: &PersistedIndex) -> Result<(), CoreError> {
        self.write_index(index).map_err(|e| CoreError::IndexSave(e.to_string()))
    }
}
