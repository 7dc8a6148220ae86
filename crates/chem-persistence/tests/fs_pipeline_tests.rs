use std::fs;

use chem_core::{generate, reconcile_store, SeededChoices, SubtreeScope};
use chem_domain::{CuratedReaction, RawSource};
use chem_persistence::{FsRecordStore, JsonIndexStore, StorageConfig};
use serde_json::json;

fn batch() -> Vec<RawSource> {
    vec![RawSource::Curated(CuratedReaction::new("Aspirin", "Acetylsalicylic acid synthesis", "Pharmaceutical", 1897, "Hoffmann, F.")),
         RawSource::Curated(CuratedReaction::new("Menthol", "Noyori Synthesis", "Terpene", 2001, "Noyori, R.")),
         RawSource::Mock]
}

fn empty_index(config: &StorageConfig) {
    fs::create_dir_all(config.data_dir()).unwrap();
    fs::write(config.index_path(), b"[]").unwrap();
}

fn run(config: &StorageConfig, seed: u64) {
    let records = FsRecordStore::new(config.clone());
    let index = JsonIndexStore::new(config.index_path());
    let out = generate(batch(), None, &records, &mut SeededChoices::from_seed(seed)).unwrap();
    reconcile_store(&index,
                    out.into_iter().map(|g| g.entry).collect(),
                    &SubtreeScope::new(config.index_prefix())).unwrap();
}

#[test]
fn repeated_runs_produce_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path(), "imported");
    empty_index(&config);

    run(&config, 1954);
    let index_once = fs::read(config.index_path()).unwrap();
    let record_once = fs::read(config.import_dir().join("rxn-aspirin-1.json")).unwrap();
    run(&config, 1954);

    assert_eq!(index_once, fs::read(config.index_path()).unwrap());
    assert_eq!(record_once, fs::read(config.import_dir().join("rxn-aspirin-1.json")).unwrap());
}

#[test]
fn hand_written_entries_survive_ingestion() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path(), "imported");
    fs::create_dir_all(config.data_dir()).unwrap();
    let hand = json!({
        "id": "strychnine",
        "molecule_name": "Strychnine",
        "class": "Alkaloid",
        "author": "Woodward, R.B.",
        "year": 1954,
        "path": "/data/alkaloids/strychnine.json",
        "journal": "J. Am. Chem. Soc."
    });
    let stale = json!({
        "id": "ord-real-stale-1",
        "molecule_name": "Stale",
        "class": "ORD Real Data",
        "author": "ORD",
        "year": 2024,
        "path": "/data/imported/ord-real-stale-1.json"
    });
    fs::write(config.index_path(), serde_json::to_vec(&json!([hand.clone(), stale])).unwrap()).unwrap();

    run(&config, 7);

    let index: serde_json::Value = serde_json::from_slice(&fs::read(config.index_path()).unwrap()).unwrap();
    let entries = index.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], hand);
    assert!(entries.iter().all(|e| e["id"] != "ord-real-stale-1"));
    assert_eq!(entries[3]["id"], "ord-cephalotaxine-3");
    assert_eq!(entries[3]["class"], "Imported");
}

#[test]
fn unreadable_index_leaves_it_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path(), "imported");
    fs::create_dir_all(config.data_dir()).unwrap();
    fs::write(config.index_path(), b"{ not json").unwrap();

    let records = FsRecordStore::new(config.clone());
    let out = generate(batch(), None, &records, &mut SeededChoices::from_seed(1)).unwrap();
    let res = reconcile_store(&JsonIndexStore::new(config.index_path()),
                              out.into_iter().map(|g| g.entry).collect(),
                              &SubtreeScope::default());

    assert!(res.is_err());
    assert_eq!(fs::read(config.index_path()).unwrap(), b"{ not json");
    assert!(config.import_dir().join("rxn-aspirin-1.json").is_file());
}

#[test]
fn missing_index_aborts_reconcile_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path(), "imported");

    let records = FsRecordStore::new(config.clone());
    let out = generate(batch(), None, &records, &mut SeededChoices::from_seed(1)).unwrap();
    let res = reconcile_store(&JsonIndexStore::new(config.index_path()),
                              out.into_iter().map(|g| g.entry).collect(),
                              &SubtreeScope::default());

    assert!(res.is_err());
    assert!(!config.index_path().exists());
    assert!(config.import_dir().join("rxn-aspirin-1.json").is_file());
}

#[test]
fn entries_without_path_are_kept_out_of_scope() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path(), "imported");
    fs::create_dir_all(config.data_dir()).unwrap();
    let draft = json!({"id": "vinblastine", "molecule_name": "Vinblastine"});
    fs::write(config.index_path(), serde_json::to_vec(&json!([draft.clone()])).unwrap()).unwrap();

    run(&config, 3);

    let index: serde_json::Value = serde_json::from_slice(&fs::read(config.index_path()).unwrap()).unwrap();
    let entries = index.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], draft);
}
