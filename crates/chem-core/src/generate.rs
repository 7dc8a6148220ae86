//! Generador del corpus: normaliza un lote, escribe cada registro aceptado y
//! construye su entrada de índice.
//!
//! La normalización es secuencial (el ordinal depende de cuántos registros
//! se aceptaron antes y la fuente de elecciones es mutable). Las escrituras
//! son independientes entre sí y corren en el pool de rayon.
use std::sync::Mutex;

use chem_domain::{IndexEntry, RawSource, SourceKind, SynthesisRecord};
use indexmap::IndexMap;
use rayon::prelude::*;
use serde_json::Map;

use crate::choice::ChoiceSource;
use crate::errors::CoreError;
use crate::normalize::normalize;

/// Destino de los registros generados. Devuelve la ubicación del registro
/// relativa a la raíz pública, que se usa como `path` en el índice.
pub trait RecordSink: Sync {
    fn write_record(&self, record: &SynthesisRecord) -> Result<String, CoreError>;
}

/// Sink en memoria para tests y ejecuciones en seco.
pub struct InMemoryRecordSink {
    prefix: String,
    pub records: Mutex<IndexMap<String, SynthesisRecord>>,
}

impl InMemoryRecordSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(),
               records: Mutex::new(IndexMap::new()) }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: &str) -> Option<SynthesisRecord> {
        self.records.lock().ok().and_then(|m| m.get(id).cloned())
    }
}

impl Default for InMemoryRecordSink {
    fn default() -> Self {
        Self::new("/data/imported/")
    }
}

impl RecordSink for InMemoryRecordSink {
    fn write_record(&self, record: &SynthesisRecord) -> Result<String, CoreError> {
        let mut guard = self.records
                            .lock()
                            .map_err(|e| CoreError::Sink { id: record.id().to_string(),
                                                           message: e.to_string() })?;
        guard.insert(record.id().to_string(), record.clone());
        Ok(format!("{}{}.json", self.prefix, record.id()))
    }
}

/// Clase, autor y año que se publican en el índice según la procedencia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLabel {
    pub class: String,
    pub author: String,
    pub year: i32,
}

impl IndexLabel {
    pub fn for_source(kind: SourceKind, record: &SynthesisRecord) -> Self {
        match kind {
            SourceKind::Structured => Self::fixed("ORD Real Data", "ORD", 2024),
            SourceKind::Mock => Self::fixed("Imported", "ORD", 2024),
            SourceKind::Curated => Self { class: record.meta.class.clone(),
                                          author: record.meta.author.clone(),
                                          year: record.meta.year },
        }
    }

    fn fixed(class: &str, author: &str, year: i32) -> Self {
        Self { class: class.to_string(),
               author: author.to_string(),
               year }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub record: SynthesisRecord,
    pub entry: IndexEntry,
}

/// Normaliza `batch` en orden hasta aceptar `cap` registros (sin límite si
/// es `None`) y escribe los aceptados en `sink`.
///
/// # Errores
/// El primer fallo del sink aborta el lote. Los archivos ya escritos no se
/// revierten.
pub fn generate<I, S, C>(batch: I, cap: Option<usize>, sink: &S, choices: &mut C) -> Result<Vec<Generated>, CoreError>
    where I: IntoIterator<Item = RawSource>,
          S: RecordSink + ?Sized,
          C: ChoiceSource
{
    let mut accepted: Vec<(SourceKind, SynthesisRecord)> = Vec::new();
    let mut rejected = 0usize;
    for source in batch {
        if cap.is_some_and(|c| accepted.len() >= c) {
            break;
        }
        let normalized = normalize(&source, accepted.len() + 1, choices);
        if !normalized.accepted {
            rejected += 1;
            log::debug!("registro descartado sin producto válido ({})", normalized.id);
            continue;
        }
        accepted.push((source.kind(), normalized.record));
    }
    if rejected > 0 {
        log::info!("{rejected} registros descartados durante la normalización");
    }

    let locations: Vec<String> = accepted.par_iter()
                                         .map(|(_, record)| sink.write_record(record))
                                         .collect::<Result<_, _>>()?;

    let generated = accepted.into_iter()
                            .zip(locations)
                            .map(|((kind, record), path)| {
                                let label = IndexLabel::for_source(kind, &record);
                                let entry = IndexEntry { id: record.id().to_string(),
                                                         molecule_name: record.meta.molecule_name.clone(),
                                                         class: label.class,
                                                         author: label.author,
                                                         year: label.year,
                                                         path,
                                                         step_count: Some(record.step_count()),
                                                         extra: Map::new() };
                                Generated { record, entry }
                            })
                            .collect::<Vec<_>>();
    log::info!("{} registros generados", generated.len());
    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::SeededChoices;
    use chem_domain::{Compound, CuratedReaction, RawReaction, ReactionOutcome, TypedIdentifier};
    use std::collections::HashSet;

    fn product_reaction(name: &str, smiles: &str) -> RawSource {
        let mut r = RawReaction::default();
        r.outcomes.push(ReactionOutcome { products: vec![Compound::with_identifiers(vec![TypedIdentifier::name(name),
                                                                                         TypedIdentifier::structure(smiles)])] });
        RawSource::Structured(r)
    }

    struct FailingSink;

    impl RecordSink for FailingSink {
        fn write_record(&self, record: &SynthesisRecord) -> Result<String, CoreError> {
            Err(CoreError::Sink { id: record.id().to_string(),
                                  message: "read-only".into() })
        }
    }

    #[test]
    fn test_rejected_records_do_not_consume_ordinal() {
        let batch = vec![product_reaction("Anisole", "COc1ccccc1"),
                         RawSource::Structured(RawReaction::default()),
                         product_reaction("Phenol", "Oc1ccccc1")];
        let sink = InMemoryRecordSink::default();
        let out = generate(batch, None, &sink, &mut SeededChoices::from_seed(1)).unwrap();
        let ids: Vec<_> = out.iter().map(|g| g.entry.id.as_str()).collect();
        assert_eq!(ids, vec!["ord-real-anisole-1", "ord-real-phenol-2"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_cap_stops_after_accepted_count() {
        let batch = (0..10).map(|i| product_reaction(&format!("P{i}"), "CCO"));
        let sink = InMemoryRecordSink::default();
        let out = generate(batch, Some(3), &sink, &mut SeededChoices::from_seed(1)).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].entry.id, "ord-real-p2-3");
    }

    #[test]
    fn test_index_labels_per_source() {
        let batch = vec![RawSource::Mock,
                         product_reaction("Anisole", "COc1ccccc1"),
                         RawSource::Curated(CuratedReaction::new("Aspirin",
                                                                 "Acetylsalicylic acid synthesis",
                                                                 "Pharmaceutical",
                                                                 1897,
                                                                 "Hoffmann, F."))];
        let sink = InMemoryRecordSink::default();
        let out = generate(batch, None, &sink, &mut SeededChoices::from_seed(9)).unwrap();

        assert_eq!(out[0].entry.class, "Imported");
        assert_eq!(out[0].entry.author, "ORD");
        assert_eq!(out[1].entry.class, "ORD Real Data");
        assert_eq!(out[1].entry.year, 2024);
        assert_eq!(out[2].entry.class, "Pharmaceutical");
        assert_eq!(out[2].entry.author, "Hoffmann, F.");
        assert_eq!(out[2].entry.year, 1897);
        assert_eq!(out[2].entry.id, "rxn-aspirin-3");
        assert_eq!(out[2].entry.path, "/data/imported/rxn-aspirin-3.json");
        for g in &out {
            assert_eq!(g.entry.step_count, Some(g.record.sequence.len()));
        }
    }

    #[test]
    fn test_ids_unique_within_batch() {
        let batch = (0..20).map(|_| RawSource::Curated(CuratedReaction::new("Urea", "Wohler Synthesis", "Organic", 1828, "Wohler, F.")));
        let sink = InMemoryRecordSink::default();
        let out = generate(batch, None, &sink, &mut SeededChoices::from_seed(5)).unwrap();
        let ids: HashSet<_> = out.iter().map(|g| g.entry.id.clone()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_sink_failure_aborts_batch() {
        let err = generate(vec![RawSource::Mock], None, &FailingSink, &mut SeededChoices::from_seed(1)).unwrap_err();
        assert!(matches!(err, CoreError::Sink { .. }));
    }
}
