// chem-domain library entry point
//
// Modelo de dominio compartido por el pipeline de ingesta: identificadores
// tipados, compuestos, registros crudos (ORD / curados / mock), el registro
// canónico de síntesis y las entradas del índice.
pub mod compound;
pub mod error;
pub mod identifier;
pub mod index;
pub mod reaction;
pub mod record;
pub mod slug;
pub use compound::{Compound, Measurement, MeasurementKind};
pub use error::DomainError;
pub use identifier::{IdentifierKind, TypedIdentifier};
pub use index::{IndexEntry, PersistedIndex};
pub use reaction::{CuratedReaction, RawReaction, RawSource, ReactionConditions, ReactionInput, ReactionOutcome,
                   ReactionProvenance, SourceKind};
pub use record::{RecordMeta, SynthesisRecord, SynthesisStep, RECORD_SCHEMA_REF};
pub use slug::slugify;
