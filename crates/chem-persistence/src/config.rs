//! Ubicación del almacenamiento desde variables de entorno.
//! `CHEMSYNTH_PUBLIC_DIR` (raíz pública, contiene `data/`) y
//! `CHEMSYNTH_IMPORT_SUBDIR` (subárbol de registros generados).

use std::env;
use std::path::{Path, PathBuf};

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_IMPORT_SUBDIR: &str = "imported";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub public_dir: PathBuf,
    pub import_subdir: String,
}

impl StorageConfig {
    pub fn new(public_dir: impl Into<PathBuf>, import_subdir: impl Into<String>) -> Self {
        Self { public_dir: public_dir.into(),
               import_subdir: import_subdir.into().trim_matches('/').to_string() }
    }

    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let public_dir = env::var("CHEMSYNTH_PUBLIC_DIR").unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string());
        let import_subdir = env::var("CHEMSYNTH_IMPORT_SUBDIR").unwrap_or_else(|_| DEFAULT_IMPORT_SUBDIR.to_string());
        Self::new(public_dir, import_subdir)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.public_dir.join("data")
    }

    pub fn index_path(&self) -> PathBuf {
        self.data_dir().join("index.json")
    }

    pub fn import_dir(&self) -> PathBuf {
        self.data_dir().join(&self.import_subdir)
    }

    /// Prefijo de `path` de las entradas generadas: `/data/imported/`.
    pub fn index_prefix(&self) -> String {
        format!("/data/{}/", self.import_subdir)
    }

    /// Ruta en disco de un `path` del índice (relativo a la raíz pública).
    pub fn resolve_public(&self, index_path: &str) -> PathBuf {
        self.public_dir.join(Path::new(index_path.trim_start_matches('/')))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_DIR, DEFAULT_IMPORT_SUBDIR)
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let cfg = StorageConfig::new("/srv/app/public", "/imported/");
        assert_eq!(cfg.index_path(), PathBuf::from("/srv/app/public/data/index.json"));
        assert_eq!(cfg.import_dir(), PathBuf::from("/srv/app/public/data/imported"));
        assert_eq!(cfg.index_prefix(), "/data/imported/");
        assert_eq!(cfg.resolve_public("/data/imported/rxn-urea-50.json"),
                   PathBuf::from("/srv/app/public/data/imported/rxn-urea-50.json"));
    }
}
