//! Lectura de datasets ORD comprimidos (`*.pb.gz`).
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use chem_core::ArchiveLoader;
use chem_domain::RawReaction;
use flate2::read::GzDecoder;
use prost::Message;

use crate::error::AdapterError;
use crate::ord::Dataset;

pub const ARCHIVE_SUFFIX: &str = ".pb.gz";

#[derive(Debug, Clone, Copy, Default)]
pub struct OrdArchiveLoader;

impl OrdArchiveLoader {
    /// Descomprime y decodifica el `Dataset` completo.
    pub fn load_dataset(&self, path: &Path) -> Result<Dataset, AdapterError> {
        let file = File::open(path).map_err(|e| AdapterError::io(path, e))?;
        let mut bytes = Vec::new();
        GzDecoder::new(file).read_to_end(&mut bytes)
                            .map_err(|e| AdapterError::io(path, e))?;
        Dataset::decode(bytes.as_slice()).map_err(|source| AdapterError::Decode { path: path.to_path_buf(),
                                                                                  source })
    }
}

impl ArchiveLoader for OrdArchiveLoader {
    type Error = AdapterError;

    fn load(&self, path: &Path) -> Result<Vec<RawReaction>, AdapterError> {
        let dataset = self.load_dataset(path)?;
        log::debug!("dataset '{}' con {} reacciones", dataset.name, dataset.reactions.len());
        Ok(dataset.reactions.iter().map(RawReaction::from).collect())
    }
}

/// Archivos `*.pb.gz` de un directorio, ordenados por nombre.
pub fn find_archives(dir: &Path) -> Result<Vec<PathBuf>, AdapterError> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| AdapterError::io(dir, e))? {
        let path = entry.map_err(|e| AdapterError::io(dir, e))?.path();
        let is_archive = path.file_name()
                             .and_then(|n| n.to_str())
                             .is_some_and(|n| n.ends_with(ARCHIVE_SUFFIX));
        if is_archive && path.is_file() {
            archives.push(path);
        }
    }
    archives.sort();
    Ok(archives)
}
