//! Variante mock: registro fijo usado como prueba de humo de la ingesta
//! cuando no hay datos de la fuente.
use chem_domain::{RecordMeta, SourceKind, SynthesisRecord, SynthesisStep, RECORD_SCHEMA_REF};

use super::{derive_id, Normalized};
use crate::constants::{NO_YIELD, ORD_NOTES, ORD_SITE_URL};

const MOCK_MOLECULE: &str = "Cephalotaxine";
const MOCK_REACTANT: &str = "C1=CC=C(C=C1)O";
const MOCK_PRODUCT: &str = "COC1=CC=CC=C1O";

pub(super) fn normalize_mock(ordinal: usize) -> Normalized {
    let id = derive_id(SourceKind::Mock, MOCK_MOLECULE, ordinal);
    let step = SynthesisStep { step_id: 1,
                               reaction_type: "Imported Synthesis".to_string(),
                               reagents: "See ORD Data".to_string(),
                               conditions: "Standard".to_string(),
                               yield_value: NO_YIELD.to_string(),
                               reactant_structure: MOCK_REACTANT.to_string(),
                               product_structure: MOCK_PRODUCT.to_string(),
                               notes: ORD_NOTES.to_string() };
    let meta = RecordMeta { id: id.clone(),
                            molecule_name: MOCK_MOLECULE.to_string(),
                            class: "Imported".to_string(),
                            author: "Open Reaction Database".to_string(),
                            year: 2024,
                            source_url: ORD_SITE_URL.to_string() };
    Normalized { record: SynthesisRecord { schema_ref: RECORD_SCHEMA_REF.to_string(),
                                           meta,
                                           sequence: vec![step] },
                 id,
                 accepted: true }
}
