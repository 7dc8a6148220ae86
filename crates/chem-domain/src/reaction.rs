//! Registros crudos de reacción, antes de normalizar.
//!
//! La fuente puede tener tres formas sin base común, así que el pipeline las
//! recibe como la unión etiquetada `RawSource`:
//! - `Structured`: reacción estructurada (Open Reaction Database).
//! - `Curated`: tupla curada a mano, sin detalle químico.
//! - `Mock`: sin datos; se sustituye un registro fijo.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Compound;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionInput {
    #[serde(default)]
    pub components: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionOutcome {
    #[serde(default)]
    pub products: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionConditions {
    /// Temperatura objetivo en °C.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_setpoint: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionProvenance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_id: Option<String>,
    /// Marca temporal de creación del registro en la fuente (texto libre).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_created: Option<String>,
}

/// Reacción estructurada. Todos los campos son opcionales en la práctica: la
/// fuente es heterogénea y el normalizador rellena con valores por defecto.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReaction {
    #[serde(default)]
    pub identifiers: Vec<crate::TypedIdentifier>,
    /// Entradas en orden de inserción; "la primera entrada" es la primera
    /// clave de este mapa.
    #[serde(default)]
    pub inputs: IndexMap<String, ReactionInput>,
    #[serde(default)]
    pub outcomes: Vec<ReactionOutcome>,
    #[serde(default)]
    pub conditions: ReactionConditions,
    #[serde(default)]
    pub provenance: ReactionProvenance,
}

impl RawReaction {
    pub fn reaction_id(&self) -> Option<&str> {
        self.provenance.reaction_id.as_deref()
    }

    /// Primer producto del primer resultado.
    pub fn first_product(&self) -> Option<&Compound> {
        self.outcomes.first().and_then(|o| o.products.first())
    }

    /// Primer componente de la primera entrada.
    pub fn first_component(&self) -> Option<&Compound> {
        self.inputs.values().next().and_then(|i| i.components.first())
    }

    /// Todos los componentes de todas las entradas, en orden.
    pub fn components(&self) -> impl Iterator<Item = &Compound> {
        self.inputs.values().flat_map(|i| i.components.iter())
    }

    /// Todos los productos de todos los resultados, en orden.
    pub fn products(&self) -> impl Iterator<Item = &Compound> {
        self.outcomes.iter().flat_map(|o| o.products.iter())
    }
}

/// Entrada curada a mano: `(nombre, descripción, clase, año, autor)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedReaction {
    pub name: String,
    pub description: String,
    pub class: String,
    pub year: i32,
    pub author: String,
}

impl CuratedReaction {
    pub fn new(name: &str, description: &str, class: &str, year: i32, author: &str) -> Self {
        Self { name: name.to_string(),
               description: description.to_string(),
               class: class.to_string(),
               year,
               author: author.to_string() }
    }
}

/// Procedencia de un registro; determina el prefijo del id derivado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Structured,
    Curated,
    Mock,
}

impl SourceKind {
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SourceKind::Structured => "ord-real",
            SourceKind::Curated => "rxn",
            SourceKind::Mock => "ord",
        }
    }
}

/// Unión etiquetada de las formas de entrada del normalizador.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSource {
    Structured(RawReaction),
    Curated(CuratedReaction),
    Mock,
}

impl RawSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            RawSource::Structured(_) => SourceKind::Structured,
            RawSource::Curated(_) => SourceKind::Curated,
            RawSource::Mock => SourceKind::Mock,
        }
    }
}

impl From<RawReaction> for RawSource {
    fn from(r: RawReaction) -> Self {
        RawSource::Structured(r)
    }
}

impl From<CuratedReaction> for RawSource {
    fn from(c: CuratedReaction) -> Self {
        RawSource::Curated(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IdentifierKind, TypedIdentifier};
    use serde_json::json;

    #[test]
    fn test_raw_reaction_from_sparse_json() {
        let raw: RawReaction = serde_json::from_value(json!({
            "identifiers": [{"type": "NAME", "value": "Cephalotaxine"}],
            "inputs": {
                "input1": {"components": [{"identifiers": [{"type": "SMILES", "value": "C1=CC=C(C=C1)O"}]}]}
            }
        })).unwrap();
        assert!(raw.outcomes.is_empty());
        assert!(raw.first_product().is_none());
        let first = raw.first_component().expect("component");
        assert_eq!(first.identifiers[0].kind, IdentifierKind::Structure);
        assert_eq!(raw.conditions.temperature_setpoint, None);
    }

    #[test]
    fn test_components_follow_input_order() {
        let mut raw = RawReaction::default();
        raw.inputs.insert("b".into(), ReactionInput { components: vec![Compound::with_identifiers([TypedIdentifier::name("first")])] });
        raw.inputs.insert("a".into(), ReactionInput { components: vec![Compound::with_identifiers([TypedIdentifier::name("second")])] });
        let names: Vec<&str> = raw.components().map(|c| c.identifiers[0].value.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_source_kind_prefixes() {
        assert_eq!(RawSource::Mock.kind().id_prefix(), "ord");
        assert_eq!(RawSource::Structured(RawReaction::default()).kind().id_prefix(), "ord-real");
        let c = CuratedReaction::new("Urea", "Wohler Synthesis", "Organic", 1828, "Wohler, F.");
        assert_eq!(RawSource::from(c).kind().id_prefix(), "rxn");
    }
}
