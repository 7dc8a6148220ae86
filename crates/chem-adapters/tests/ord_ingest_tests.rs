use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chem_adapters::ord::proto::{CompoundIdentifier, Dataset, InputEntry, ProductCompound, Reaction, ReactionInput, ReactionOutcome};
use chem_adapters::{curated_batch, OrdArchiveLoader};
use chem_core::{generate, scan, ArchiveLoader, InMemoryRecordSink, ScanQuery, SeededChoices};
use chem_domain::RawSource;
use flate2::write::GzEncoder;
use flate2::Compression;
use prost::Message;

fn ident(code: i32, value: &str) -> CompoundIdentifier {
    CompoundIdentifier { r#type: code,
                         value: value.into() }
}

fn reaction(id: &str, product: Option<(&str, &str)>) -> Reaction {
    let outcomes = product.map(|(name, smiles)| {
                              vec![ReactionOutcome { products: vec![ProductCompound { identifiers: vec![ident(6, name), ident(2, smiles)],
                                                                                      measurements: vec![] }] }]
                          })
                          .unwrap_or_default();
    Reaction { inputs: vec![InputEntry { key: "m1".into(),
                                         value: Some(ReactionInput { components: vec![chem_adapters::ord::proto::Compound { identifiers: vec![ident(6, "cyclopentadiene"), ident(2, "C1=CCC=C1")] }] }) }],
               outcomes,
               reaction_id: id.into(),
               ..Default::default() }
}

fn write_dataset(dir: &Path, reactions: Vec<Reaction>) -> PathBuf {
    let path = dir.join("ord_dataset-test.pb.gz");
    let dataset = Dataset { name: "test".into(), reactions };
    let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
    enc.write_all(&dataset.encode_to_vec()).unwrap();
    enc.finish().unwrap();
    path
}

#[test]
fn archive_to_records_skips_reactions_without_product() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(dir.path(),
                             vec![reaction("ord-a", Some(("Norbornene", "C1CC2CC1C=C2"))),
                                  reaction("ord-b", None),
                                  reaction("ord-c", Some(("Corey lactone", "O=C1CC2C(O1)CC(O)C2CO")))]);

    let reactions = OrdArchiveLoader.load(&path).unwrap();
    let batch: Vec<RawSource> = reactions.into_iter().map(RawSource::Structured).collect();
    let sink = InMemoryRecordSink::default();
    let out = generate(batch, Some(100), &sink, &mut SeededChoices::from_seed(1)).unwrap();

    let ids: Vec<_> = out.iter().map(|g| g.entry.id.as_str()).collect();
    assert_eq!(ids, vec!["ord-real-norbornene-1", "ord-real-coreylactone-2"]);
    assert_eq!(out[0].record.sequence[0].reagents, "cyclopentadiene");
    assert_eq!(out[0].entry.class, "ORD Real Data");
}

#[test]
fn scan_reports_keyword_hits_per_archive() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(dir.path(), vec![reaction("ord-a", Some(("Norbornene", "C1CC2CC1C=C2")))]);
    let reports = scan(&[path.clone(), dir.path().join("missing.pb.gz")], &OrdArchiveLoader, &ScanQuery::prostaglandin());
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].archive, path);
    assert_eq!(reports[0].matches[0].to_string(), "Reactant name: cyclopentadiene");
}

#[test]
fn curated_catalog_generates_hundred_records() {
    let sink = InMemoryRecordSink::default();
    let out = generate(curated_batch(), None, &sink, &mut SeededChoices::from_seed(1954)).unwrap();
    assert_eq!(out.len(), 100);
    assert_eq!(out[50].entry.id, "rxn-aspirin-51");
    assert_eq!(out[10].entry.id, "rxn-taxol-11");
    assert_eq!(out[11].entry.id, "rxn-taxol-12");
}
