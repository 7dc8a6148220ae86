use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entrada ligera del índice: permite listar el corpus sin abrir cada
/// registro. Se crea una por registro generado y no se muta después (salvo el
/// relleno de `step_count`).
///
/// Las entradas escritas a mano pueden llevar campos adicionales (`journal`,
/// etc.); se conservan en `extra` y se reescriben tal cual. También pueden
/// omitir `class`, `author`, `year` o `path`: un campo ausente sigue ausente
/// al reescribir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    pub molecule_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "is_unset_year")]
    pub year: i32,
    /// Ubicación del registro completo, relativa a la raíz pública
    /// (`/data/imported/rxn-aspirin-1.json`). Vacía si la entrada no apunta
    /// a ningún registro.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_count: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_unset_year(year: &i32) -> bool {
    *year == 0
}

impl IndexEntry {
    /// Una entrada sin `path` nunca está bajo un prefijo.
    pub fn is_under(&self, prefix: &str) -> bool {
        !self.path.is_empty() && self.path.starts_with(prefix)
    }
}

/// Índice persistido: secuencia ordenada de entradas.
pub type PersistedIndex = Vec<IndexEntry>;
