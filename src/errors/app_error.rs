use chem_adapters::AdapterError;
use chem_core::CoreError;
use chem_persistence::PersistenceError;
use thiserror::Error;

/// Error paraguas de la CLI: agrupa los errores de cada crate.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del pipeline: {0}")]
    Core(#[from] CoreError),
    #[error("Error de entrada: {0}")]
    Adapter(#[from] AdapterError),
    #[error("Error de almacenamiento: {0}")]
    Persistence(#[from] PersistenceError),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
}
