// identifier.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Clase de un identificador de compuesto.
///
/// Sólo distinguimos lo que el pipeline consume: nombres legibles y cadenas
/// de estructura (SMILES). Cualquier otro tipo de la fuente (InChI, CAS,
/// PubChem CID, ...) se agrupa en `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentifierKind {
    Name,
    #[serde(alias = "SMILES")]
    Structure,
    #[serde(other)]
    Other,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IdentifierKind::Name => "name",
            IdentifierKind::Structure => "structure",
            IdentifierKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// Par (tipo, valor) adjunto a un compuesto. El orden dentro del compuesto
/// es significativo: es la prioridad de fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedIdentifier {
    #[serde(rename = "type")]
    pub kind: IdentifierKind,
    #[serde(default)]
    pub value: String,
}

impl TypedIdentifier {
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
    pub fn name(value: impl Into<String>) -> Self {
        Self::new(IdentifierKind::Name, value)
    }
    pub fn structure(value: impl Into<String>) -> Self {
        Self::new(IdentifierKind::Structure, value)
    }
}
