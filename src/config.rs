//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
//! Los flags de la CLI sobrescriben estos valores campo a campo.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use chem_persistence::{init_dotenv, StorageConfig};
use once_cell::sync::Lazy;

pub const DEFAULT_DATASET_URL: &str =
    "https://github.com/Open-Reaction-Database/ord-data/raw/main/data/01/ord_dataset-01dbb772c5e249108f0b191ed17a2c0c.pb.gz";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";
pub const DEFAULT_ORD_LIMIT: usize = 100;
pub const DEFAULT_SEED: u64 = 1954;

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Raíz pública y subárbol de importación.
    pub storage: StorageConfig,
    /// Dataset ORD a descargar.
    pub dataset_url: String,
    /// Caché local de datasets descargados.
    pub download_dir: PathBuf,
    /// Máximo de registros ORD aceptados por ejecución.
    pub ord_limit: usize,
    /// Semilla del generador de pasos curados.
    pub seed: u64,
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                                         log::warn!("{key}={raw} no es válido; se usa el valor por defecto");
                                         default
                                     }),
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        Self { storage: StorageConfig::from_env(),
               dataset_url: env::var("CHEMSYNTH_DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string()),
               download_dir: env::var("CHEMSYNTH_DOWNLOAD_DIR").map(PathBuf::from)
                                                                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DOWNLOAD_DIR)),
               ord_limit: parsed_or("CHEMSYNTH_ORD_LIMIT", DEFAULT_ORD_LIMIT),
               seed: parsed_or("CHEMSYNTH_SEED", DEFAULT_SEED) }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { storage: StorageConfig::default(),
               dataset_url: DEFAULT_DATASET_URL.to_string(),
               download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
               ord_limit: DEFAULT_ORD_LIMIT,
               seed: DEFAULT_SEED }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.storage.index_prefix(), "/data/imported/");
        assert_eq!(cfg.ord_limit, 100);
        assert_eq!(cfg.seed, 1954);
        assert!(cfg.dataset_url.ends_with("ord_dataset-01dbb772c5e249108f0b191ed17a2c0c.pb.gz"));
    }

    #[test]
    fn test_parsed_or_falls_back_on_garbage() {
        assert_eq!(parsed_or::<usize>("CHEMSYNTH_TEST_UNSET_VARIABLE", 7), 7);
    }
}
