//! Normalizador: registro crudo → registro canónico de síntesis.
//!
//! Cada variante de `RawSource` se resuelve con una función pura
//! independiente (`structured`, `curated`, `mock`). Todas devuelven un
//! `Normalized`; sólo la variante estructurada puede quedar no aceptada.
//!
//! `ordinal` es 1-based y representa la posición dentro de la secuencia
//! *aceptada*: el generador pasa `aceptados + 1`, de modo que un registro
//! rechazado no consume ordinal.
mod curated;
mod mock;
mod structured;

use chem_domain::{slugify, RawSource, SourceKind, SynthesisRecord};

use crate::choice::ChoiceSource;

pub use curated::{CONDITIONS, MULTI_STEP_CLASSES, REACTION_TYPES, REAGENTS, SOLVENTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub record: SynthesisRecord,
    pub id: String,
    /// `false` si el registro no tiene un producto válido y debe quedar
    /// fuera del lote.
    pub accepted: bool,
}

/// `"{prefijo}-{slug(nombre)}-{ordinal}"`, con prefijo según procedencia.
pub fn derive_id(kind: SourceKind, molecule_name: &str, ordinal: usize) -> String {
    format!("{}-{}-{}", kind.id_prefix(), slugify(molecule_name), ordinal)
}

pub fn normalize<C: ChoiceSource>(source: &RawSource, ordinal: usize, choices: &mut C) -> Normalized {
    let normalized = match source {
        RawSource::Structured(reaction) => structured::normalize_structured(reaction, ordinal),
        RawSource::Curated(item) => curated::normalize_curated(item, ordinal, choices),
        RawSource::Mock => mock::normalize_mock(ordinal),
    };
    debug_assert!(normalized.record.validate().is_ok());
    normalized
}
