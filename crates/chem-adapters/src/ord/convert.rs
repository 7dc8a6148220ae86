//! Mensajes ORD decodificados → `RawReaction` de dominio.
use chem_domain::{Compound, IdentifierKind, Measurement, MeasurementKind, RawReaction, ReactionConditions, ReactionInput,
                  ReactionOutcome, ReactionProvenance, TypedIdentifier};

use super::proto::{self, compound_identifier_type, product_measurement_type, reaction_identifier_type};

fn compound_kind(code: i32) -> IdentifierKind {
    match code {
        compound_identifier_type::NAME => IdentifierKind::Name,
        compound_identifier_type::SMILES => IdentifierKind::Structure,
        _ => IdentifierKind::Other,
    }
}

fn reaction_kind(code: i32) -> IdentifierKind {
    match code {
        reaction_identifier_type::REACTION_SMILES | reaction_identifier_type::REACTION_CXSMILES => IdentifierKind::Structure,
        _ => IdentifierKind::Other,
    }
}

fn identifiers(ids: &[proto::CompoundIdentifier]) -> Vec<TypedIdentifier> {
    ids.iter().map(|i| TypedIdentifier::new(compound_kind(i.r#type), i.value.clone())).collect()
}

fn measurement(m: &proto::ProductMeasurement) -> Measurement {
    let kind = if m.r#type == product_measurement_type::YIELD { MeasurementKind::Yield } else { MeasurementKind::Other };
    Measurement { kind,
                  percentage: m.percentage.as_ref().and_then(|p| p.value) }
}

fn product(p: &proto::ProductCompound) -> Compound {
    Compound { identifiers: identifiers(&p.identifiers),
               measurements: p.measurements.iter().map(measurement).collect() }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<&proto::Reaction> for RawReaction {
    fn from(r: &proto::Reaction) -> Self {
        let inputs = r.inputs
                      .iter()
                      .map(|entry| {
                          let components = entry.value
                                                .as_ref()
                                                .map(|v| v.components.iter().map(|c| Compound::with_identifiers(identifiers(&c.identifiers))).collect())
                                                .unwrap_or_default();
                          (entry.key.clone(), ReactionInput { components })
                      })
                      .collect();
        let outcomes = r.outcomes
                        .iter()
                        .map(|o| ReactionOutcome { products: o.products.iter().map(product).collect() })
                        .collect();
        let temperature_setpoint = r.conditions
                                    .as_ref()
                                    .and_then(|c| c.temperature.as_ref())
                                    .and_then(|t| t.setpoint.as_ref())
                                    .and_then(|s| s.value);
        let record_created = r.provenance
                              .as_ref()
                              .and_then(|p| p.record_created.as_ref())
                              .and_then(|e| e.time.as_ref())
                              .and_then(|t| non_empty(&t.value));
        RawReaction { identifiers: r.identifiers
                                    .iter()
                                    .map(|i| TypedIdentifier::new(reaction_kind(i.r#type), i.value.clone()))
                                    .collect(),
                      inputs,
                      outcomes,
                      conditions: ReactionConditions { temperature_setpoint },
                      provenance: ReactionProvenance { reaction_id: non_empty(&r.reaction_id),
                                                       record_created } }
    }
}
