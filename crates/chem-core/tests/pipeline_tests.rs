use chem_core::{generate, reconcile_store, InMemoryIndexStore, InMemoryRecordSink, SeededChoices, SubtreeScope};
use chem_domain::{CuratedReaction, IndexEntry, RawSource};
use serde_json::Map;

fn curated_batch() -> Vec<RawSource> {
    vec![RawSource::Curated(CuratedReaction::new("Aspirin", "Acetylsalicylic acid synthesis", "Pharmaceutical", 1897, "Hoffmann, F.")),
         RawSource::Curated(CuratedReaction::new("Strychnine", "Woodward Total Synthesis", "Alkaloid", 1954, "Woodward, R.B.")),
         RawSource::Curated(CuratedReaction::new("Urea", "Wohler Synthesis", "Organic", 1828, "Wohler, F."))]
}

fn hand_written() -> IndexEntry {
    IndexEntry { id: "strychnine".into(),
                 molecule_name: "Strychnine".into(),
                 class: "Alkaloid".into(),
                 author: "Woodward, R.B.".into(),
                 year: 1954,
                 path: "/data/alkaloids/strychnine.json".into(),
                 step_count: Some(28),
                 extra: Map::new() }
}

#[test]
fn same_seed_produces_identical_index() {
    let store = InMemoryIndexStore::new(vec![hand_written()]);
    let scope = SubtreeScope::default();

    let sink = InMemoryRecordSink::default();
    let first = generate(curated_batch(), None, &sink, &mut SeededChoices::from_seed(1954)).unwrap();
    reconcile_store(&store, first.iter().map(|g| g.entry.clone()).collect(), &scope).unwrap();
    let after_first = store.snapshot();

    let second = generate(curated_batch(), None, &sink, &mut SeededChoices::from_seed(1954)).unwrap();
    reconcile_store(&store, second.iter().map(|g| g.entry.clone()).collect(), &scope).unwrap();

    assert_eq!(after_first, store.snapshot());
    assert_eq!(first, second);
    assert_eq!(sink.len(), 3);
}

#[test]
fn aspirin_first_in_batch() {
    let sink = InMemoryRecordSink::default();
    let out = generate(curated_batch(), None, &sink, &mut SeededChoices::from_seed(7)).unwrap();
    let aspirin = &out[0];
    assert_eq!(aspirin.entry.id, "rxn-aspirin-1");
    assert!((1..=4).contains(&aspirin.record.sequence.len()));
    for (i, step) in aspirin.record.sequence.iter().enumerate() {
        assert_eq!(step.step_id as usize, i + 1);
    }
    assert!(sink.get("rxn-aspirin-1").is_some());
}

#[test]
fn mixed_runs_leave_hand_written_entries_untouched() {
    let store = InMemoryIndexStore::new(vec![hand_written()]);
    let scope = SubtreeScope::default();
    let sink = InMemoryRecordSink::default();

    let curated = generate(curated_batch(), None, &sink, &mut SeededChoices::from_seed(3)).unwrap();
    reconcile_store(&store, curated.into_iter().map(|g| g.entry).collect(), &scope).unwrap();
    let mock = generate(vec![RawSource::Mock], None, &sink, &mut SeededChoices::from_seed(3)).unwrap();
    let summary = reconcile_store(&store, mock.into_iter().map(|g| g.entry).collect(), &scope).unwrap();

    assert_eq!(summary.kept, 1);
    assert_eq!(summary.dropped, 3);
    assert_eq!(summary.added, 1);
    let index = store.snapshot();
    assert_eq!(index[0], hand_written());
    assert_eq!(index[1].id, "ord-cephalotaxine-1");
}
