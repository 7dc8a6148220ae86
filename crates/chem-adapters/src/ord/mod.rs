//! Open Reaction Database: esquema protobuf y conversión a dominio.
pub mod convert;
pub mod proto;

pub use proto::Dataset;
