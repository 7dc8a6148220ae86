//! Registro canónico de síntesis.
//!
//! Es el formato persistido (un documento JSON por registro) y consumido por
//! la aplicación de visualización. Los nombres de campo en el JSON son fijos;
//! `reactant_smiles` / `product_smiles` conservan el nombre histórico que lee
//! el visor aunque en Rust se llamen `*_structure`.
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Valor constante del campo `$schema` de cada registro.
pub const RECORD_SCHEMA_REF: &str = "../schema.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisStep {
    pub step_id: u32,
    pub reaction_type: String,
    pub reagents: String,
    pub conditions: String,
    /// Rendimiento formateado (`"87.5%"`) o el centinela `"N/A"`.
    #[serde(rename = "yield")]
    pub yield_value: String,
    #[serde(rename = "reactant_smiles")]
    pub reactant_structure: String,
    #[serde(rename = "product_smiles")]
    pub product_structure: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub id: String,
    pub molecule_name: String,
    pub class: String,
    pub author: String,
    pub year: i32,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRecord {
    #[serde(rename = "$schema")]
    pub schema_ref: String,
    pub meta: RecordMeta,
    pub sequence: Vec<SynthesisStep>,
}

impl SynthesisRecord {
    /// Crea un registro validado.
    ///
    /// # Errores
    /// `DomainError::ValidationError` si la secuencia está vacía o los
    /// `step_id` no son contiguos empezando en 1.
    pub fn new(meta: RecordMeta, sequence: Vec<SynthesisStep>) -> Result<Self, DomainError> {
        let record = SynthesisRecord { schema_ref: RECORD_SCHEMA_REF.to_string(), meta, sequence };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.sequence.is_empty() {
            return Err(DomainError::ValidationError(format!("El registro {} no tiene pasos", self.meta.id)));
        }
        for (i, step) in self.sequence.iter().enumerate() {
            let expected = i as u32 + 1;
            if step.step_id != expected {
                return Err(DomainError::ValidationError(format!("Paso fuera de orden en {}: se esperaba {}, llegó {}",
                                                                self.meta.id, expected, step.step_id)));
            }
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn step_count(&self) -> usize {
        self.sequence.len()
    }

    /// Cambia el id del registro (p.ej. al reasignar el ordinal).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.meta.id = id.into();
        self
    }
}
