//! Variante estructurada (Open Reaction Database).
//!
//! Se resume la reacción en un único paso:
//! - nombre: NAME de la reacción o del primer producto (ver `resolve`);
//! - reactivo: estructura del primer componente de la primera entrada;
//! - producto: estructura del primer producto del primer resultado;
//! - rendimiento: primera medición YIELD del primer producto;
//! - reactivos: hasta `MAX_REAGENTS` nombres de componentes (truncado
//!   intencional);
//! - condiciones: temperatura objetivo o `"Standard Conditions"`.
//!
//! Aceptación: el producto debe venir de un identificador STRUCTURE real. Si
//! la resolución cae al `"C"` por defecto, el registro se construye igual
//! pero queda `accepted = false`.
use chem_domain::{IdentifierKind, RawReaction, RecordMeta, SourceKind, SynthesisRecord, SynthesisStep,
                  TypedIdentifier, RECORD_SCHEMA_REF};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use super::{derive_id, Normalized};
use crate::constants::{unknown_molecule, DEFAULT_STRUCTURE, MAX_REAGENTS, NO_YIELD, ORD_FALLBACK_YEAR, ORD_IMPORT_AUTHOR,
                       ORD_IMPORT_CLASS, ORD_NOTES, ORD_SITE_URL, STANDARD_CONDITIONS};
use crate::resolve::{first_of_kind, resolve, Resolution};

pub(super) fn normalize_structured(reaction: &RawReaction, ordinal: usize) -> Normalized {
    let name = resolve_name(reaction, ordinal);
    let reactant = resolve_structure(reaction.first_component().map(|c| c.identifiers.as_slice()));
    let product = resolve_structure(reaction.first_product().map(|c| c.identifiers.as_slice()));
    let accepted = product.is_exact();

    let id = derive_id(SourceKind::Structured, &name.value, ordinal);
    let step = SynthesisStep { step_id: 1,
                               reaction_type: "Synthesis".to_string(),
                               reagents: reagent_summary(reaction),
                               conditions: condition_summary(reaction),
                               yield_value: yield_summary(reaction),
                               reactant_structure: reactant.value,
                               product_structure: product.value,
                               notes: ORD_NOTES.to_string() };
    let source_url = match reaction.reaction_id() {
        Some(rid) if !rid.is_empty() => format!("{ORD_SITE_URL}/client/id/{rid}"),
        _ => ORD_SITE_URL.to_string(),
    };
    let meta = RecordMeta { id: id.clone(),
                            molecule_name: name.value,
                            class: ORD_IMPORT_CLASS.to_string(),
                            author: ORD_IMPORT_AUTHOR.to_string(),
                            year: created_year(reaction.provenance.record_created.as_deref()).unwrap_or(ORD_FALLBACK_YEAR),
                            source_url };
    let record = SynthesisRecord { schema_ref: RECORD_SCHEMA_REF.to_string(),
                                   meta,
                                   sequence: vec![step] };
    Normalized { record, id, accepted }
}

/// Candidatos de nombre: identificadores de la reacción seguidos de los del
/// primer producto.
fn resolve_name(reaction: &RawReaction, ordinal: usize) -> Resolution {
    let candidates: Vec<TypedIdentifier> = reaction.identifiers
                                                   .iter()
                                                   .chain(reaction.first_product().into_iter().flat_map(|p| p.identifiers.iter()))
                                                   .cloned()
                                                   .collect();
    resolve(&candidates, IdentifierKind::Name, &unknown_molecule(ordinal))
}

fn resolve_structure(identifiers: Option<&[TypedIdentifier]>) -> Resolution {
    resolve(identifiers.unwrap_or(&[]), IdentifierKind::Structure, DEFAULT_STRUCTURE)
}

fn reagent_summary(reaction: &RawReaction) -> String {
    reaction.components()
            .filter_map(|c| first_of_kind(&c.identifiers, IdentifierKind::Name))
            .take(MAX_REAGENTS)
            .collect::<Vec<_>>()
            .join(", ")
}

fn condition_summary(reaction: &RawReaction) -> String {
    match reaction.conditions.temperature_setpoint {
        Some(t) if t.is_finite() => format_celsius(t),
        _ => STANDARD_CONDITIONS.to_string(),
    }
}

/// `25.0°C` para valores enteros, `37.5°C` en general.
fn format_celsius(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}°C")
    } else {
        format!("{value}°C")
    }
}

fn yield_summary(reaction: &RawReaction) -> String {
    reaction.first_product()
            .and_then(|p| p.first_yield())
            .and_then(|m| m.percentage)
            .map(|pct| format!("{pct:.1}%"))
            .unwrap_or_else(|| NO_YIELD.to_string())
}

/// Año de creación del registro en la fuente. ORD guarda la fecha como texto
/// libre; se aceptan RFC 3339 y las variantes más comunes.
fn created_year(raw: Option<&str>) -> Option<i32> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.year());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%m/%d/%Y, %H:%M:%S", "%m/%d/%Y %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(dt.year());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok().map(|d| d.year())
}
