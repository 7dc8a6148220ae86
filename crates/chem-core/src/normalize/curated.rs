//! Variante curada: tuplas sin detalle químico.
//!
//! Se fabrican entre 1 y 8 pasos con vocabularios acotados. Las clases
//! asociadas a síntesis totales largas (`MULTI_STEP_CLASSES`) reciben de 3 a
//! 8 pasos; el resto de 1 a 4. Las estructuras son cadenas de carbono que se
//! alargan paso a paso. Esta variante siempre se acepta.
//!
//! Orden de consumo de la fuente de elecciones (relevante para tests
//! guionados): nº de pasos, longitud inicial de la cadena y, por paso, tipo
//! de reacción, dos reactivos, condición, disolvente, rendimiento y
//! crecimiento de la cadena.
use chem_domain::{CuratedReaction, RecordMeta, SourceKind, SynthesisRecord, SynthesisStep, RECORD_SCHEMA_REF};

use super::{derive_id, Normalized};
use crate::choice::ChoiceSource;
use crate::constants::CURATED_SOURCE_URL;

pub const MULTI_STEP_CLASSES: [&str; 3] = ["Alkaloid", "Terpene", "Macrolide"];

pub const REACTION_TYPES: [&str; 8] =
    ["Oxidation", "Reduction", "Esterification", "Hydrolysis", "Coupling", "Aldol", "Diels-Alder", "Cyclization"];

pub const REAGENTS: [&str; 13] =
    ["H2SO4", "NaOH", "Pd/C", "LiAlH4", "NaBH4", "KMnO4", "O3", "SOCl2", "NH3", "HCl", "n-BuLi", "LDA", "Grignard"];

pub const SOLVENTS: [&str; 11] =
    ["THF", "DCM", "EtOH", "MeOH", "H2O", "DMSO", "DMF", "Ether", "Toluene", "Acetone", "Benzene"];

pub const CONDITIONS: [&str; 7] =
    ["Reflux, 2h", "RT, 12h", "0°C, 30min", "100°C, 5h", "-78°C, 1h", "High Pressure", "Microwave"];

fn step_bounds(class: &str) -> (usize, usize) {
    if MULTI_STEP_CLASSES.contains(&class) {
        (3, 8)
    } else {
        (1, 4)
    }
}

pub(super) fn normalize_curated<C: ChoiceSource>(item: &CuratedReaction, ordinal: usize, choices: &mut C) -> Normalized {
    let (low, high) = step_bounds(&item.class);
    let step_total = choices.pick_range(low, high);
    let mut chain = choices.pick_range(3, 15);

    let mut sequence = Vec::with_capacity(step_total);
    for step_id in 1..=step_total {
        let reaction_type = choices.pick(&REACTION_TYPES);
        let first_reagent = choices.pick(&REAGENTS);
        let second_reagent = choices.pick(&REAGENTS);
        let condition = choices.pick(&CONDITIONS);
        let solvent = choices.pick(&SOLVENTS);
        let yield_pct = choices.pick_range(40, 99);
        let reactant_structure = "C".repeat(chain);
        chain += choices.pick_range(2, 5);
        sequence.push(SynthesisStep { step_id: step_id as u32,
                                      reaction_type: reaction_type.to_string(),
                                      reagents: format!("{first_reagent}, {second_reagent}"),
                                      conditions: format!("{condition}, {solvent}"),
                                      yield_value: format!("{yield_pct}%"),
                                      reactant_structure,
                                      product_structure: format!("{}O", "C".repeat(chain)),
                                      notes: format!("Step {} of {} synthesis ({}).", step_id, item.name, item.description) });
    }

    let id = derive_id(SourceKind::Curated, &item.name, ordinal);
    let meta = RecordMeta { id: id.clone(),
                            molecule_name: item.name.clone(),
                            class: item.class.clone(),
                            author: item.author.clone(),
                            year: item.year,
                            source_url: CURATED_SOURCE_URL.to_string() };
    Normalized { record: SynthesisRecord { schema_ref: RECORD_SCHEMA_REF.to_string(), meta, sequence },
                 id,
                 accepted: true }
}
