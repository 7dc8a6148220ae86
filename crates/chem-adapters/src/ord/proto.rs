//! Subconjunto del esquema protobuf de ORD (`ord_schema/proto`).
//!
//! Sólo se declaran los campos que consume el pipeline; prost ignora el
//! resto al decodificar. Los números de campo siguen `dataset.proto` y
//! `reaction.proto`.

#[derive(Clone, PartialEq, prost::Message)]
pub struct Dataset {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "3")]
    pub reactions: Vec<Reaction>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Reaction {
    #[prost(message, repeated, tag = "1")]
    pub identifiers: Vec<ReactionIdentifier>,
    /// `map<string, ReactionInput>` declarado como sus entradas repetidas
    /// para conservar el orden del archivo.
    #[prost(message, repeated, tag = "2")]
    pub inputs: Vec<InputEntry>,
    #[prost(message, optional, tag = "4")]
    pub conditions: Option<ReactionConditions>,
    #[prost(message, repeated, tag = "8")]
    pub outcomes: Vec<ReactionOutcome>,
    #[prost(message, optional, tag = "9")]
    pub provenance: Option<ReactionProvenance>,
    #[prost(string, tag = "10")]
    pub reaction_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReactionIdentifier {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub value: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct InputEntry {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(message, optional, tag = "2")]
    pub value: Option<ReactionInput>,
}

/// `ReactionIdentifier.ReactionIdentifierType`
pub mod reaction_identifier_type {
    pub const REACTION_SMILES: i32 = 2;
    pub const REACTION_CXSMILES: i32 = 6;
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReactionInput {
    #[prost(message, repeated, tag = "1")]
    pub components: Vec<Compound>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Compound {
    #[prost(message, repeated, tag = "1")]
    pub identifiers: Vec<CompoundIdentifier>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CompoundIdentifier {
    #[prost(int32, tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub value: String,
}

/// `CompoundIdentifier.CompoundIdentifierType`
pub mod compound_identifier_type {
    pub const SMILES: i32 = 2;
    pub const NAME: i32 = 6;
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReactionConditions {
    #[prost(message, optional, tag = "1")]
    pub temperature: Option<TemperatureConditions>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TemperatureConditions {
    #[prost(message, optional, tag = "2")]
    pub setpoint: Option<Temperature>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Temperature {
    #[prost(float, optional, tag = "1")]
    pub value: Option<f32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReactionOutcome {
    #[prost(message, repeated, tag = "3")]
    pub products: Vec<ProductCompound>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductCompound {
    #[prost(message, repeated, tag = "1")]
    pub identifiers: Vec<CompoundIdentifier>,
    #[prost(message, repeated, tag = "3")]
    pub measurements: Vec<ProductMeasurement>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProductMeasurement {
    #[prost(int32, tag = "2")]
    pub r#type: i32,
    #[prost(message, optional, tag = "8")]
    pub percentage: Option<Percentage>,
}

/// `ProductMeasurement.ProductMeasurementType`
pub mod product_measurement_type {
    pub const YIELD: i32 = 3;
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Percentage {
    #[prost(float, optional, tag = "1")]
    pub value: Option<f32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReactionProvenance {
    #[prost(message, optional, tag = "7")]
    pub record_created: Option<RecordEvent>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordEvent {
    #[prost(message, optional, tag = "1")]
    pub time: Option<DateTime>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DateTime {
    #[prost(string, tag = "1")]
    pub value: String,
}
