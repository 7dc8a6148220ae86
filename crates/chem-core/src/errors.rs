//! Errores del core. La degradación por datos incompletos no es un error
//! (ver `resolve`); aquí sólo llegan fallos de almacenamiento.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("record sink failed for {id}: {message}")]
    Sink { id: String, message: String },
    #[error("index load failed: {0}")]
    IndexLoad(String),
    #[error("index save failed: {0}")]
    IndexSave(String),
    #[error("internal: {0}")]
    Internal(String),
}
