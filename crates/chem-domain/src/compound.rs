use serde::{Deserialize, Serialize};

use crate::TypedIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementKind {
    Yield,
    #[serde(other)]
    Other,
}

/// Medición asociada a un producto. Sólo las de tipo `Yield` se consumen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(rename = "type")]
    pub kind: MeasurementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f32>,
}

impl Measurement {
    pub fn yield_percent(value: f32) -> Self {
        Self { kind: MeasurementKind::Yield, percentage: Some(value) }
    }
}

/// Compuesto (reactivo o producto) tal como llega de la fuente.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    #[serde(default)]
    pub identifiers: Vec<TypedIdentifier>,
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

impl Compound {
    pub fn with_identifiers<I>(identifiers: I) -> Self
        where I: IntoIterator<Item = TypedIdentifier>
    {
        Self { identifiers: identifiers.into_iter().collect(), measurements: Vec::new() }
    }

    /// Primera medición de rendimiento, si existe.
    pub fn first_yield(&self) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.kind == MeasurementKind::Yield)
    }
}
