//! Registros de síntesis como archivos `{id}.json` bajo el subárbol de
//! importación.
use std::fs;
use std::path::PathBuf;

use chem_core::{CoreError, RecordSink};
use chem_domain::SynthesisRecord;

use crate::config::StorageConfig;
use crate::error::PersistenceError;
use crate::json::to_pretty_vec;

#[derive(Debug, Clone)]
pub struct FsRecordStore {
    config: StorageConfig,
}

impl FsRecordStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn file_path(&self, id: &str) -> PathBuf {
        self.config.import_dir().join(format!("{id}.json"))
    }

    /// Escribe (o sobrescribe) el registro y devuelve su `path` de índice.
    pub fn store(&self, record: &SynthesisRecord) -> Result<String, PersistenceError> {
        let dir = self.config.import_dir();
        fs::create_dir_all(&dir).map_err(|e| PersistenceError::io(&dir, e))?;
        let path = self.file_path(record.id());
        let bytes = to_pretty_vec(record).map_err(|e| PersistenceError::json(&path, e))?;
        fs::write(&path, bytes).map_err(|e| PersistenceError::io(&path, e))?;
        log::debug!("registro escrito: {}", path.display());
        Ok(format!("{}{}.json", self.config.index_prefix(), record.id()))
    }

    /// Lee un registro a partir del `path` de su entrada de índice.
    pub fn read(&self, index_path: &str) -> Result<SynthesisRecord, PersistenceError> {
        let path = self.config.resolve_public(index_path);
        let bytes = fs::read(&path).map_err(|e| PersistenceError::io(&path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::json(&path, e))
    }
}

impl RecordSink for FsRecordStore {
    fn write_record(&self, record: &SynthesisRecord) -> Result<String, CoreError> {
        self.store(record).map_err(|e| CoreError::Sink { id: record.id().to_string(),
                                                         message: e.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_domain::{RecordMeta, SynthesisStep};

    fn record(id: &str) -> SynthesisRecord {
        let meta = RecordMeta { id: id.to_string(),
                                molecule_name: "Urea".into(),
                                class: "Organic".into(),
                                author: "Wohler, F.".into(),
                                year: 1828,
                                source_url: "https://example.com/synthesis".into() };
        let step = SynthesisStep { step_id: 1,
                                   reaction_type: "Hydrolysis".into(),
                                   reagents: "NH3, HCl".into(),
                                   conditions: "RT, 12h, H2O".into(),
                                   yield_value: "75%".into(),
                                   reactant_structure: "CCC".into(),
                                   product_structure: "CCCCCO".into(),
                                   notes: "Step 1 of Urea synthesis (Wohler Synthesis).".into() };
        SynthesisRecord::new(meta, vec![step]).unwrap()
    }

    #[test]
    fn test_store_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsRecordStore::new(StorageConfig::new(dir.path(), "imported"));
        let rec = record("rxn-urea-50");

        let location = store.write_record(&rec).unwrap();
        assert_eq!(location, "/data/imported/rxn-urea-50.json");
        assert!(dir.path().join("data/imported/rxn-urea-50.json").is_file());
        assert_eq!(store.read(&location).unwrap(), rec);
    }

    #[test]
    fn test_file_layout_uses_schema_and_wire_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsRecordStore::new(StorageConfig::new(dir.path(), "imported"));
        store.store(&record("rxn-urea-1")).unwrap();
        let text = fs::read_to_string(store.file_path("rxn-urea-1")).unwrap();
        assert!(text.starts_with("{\n    \"$schema\": \"../schema.json\",\n    \"meta\": {"));
        assert!(text.contains("\"yield\": \"75%\""));
        assert!(text.contains("\"product_smiles\": \"CCCCCO\""));
    }

    #[test]
    fn test_overwrite_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsRecordStore::new(StorageConfig::new(dir.path(), "imported"));
        store.store(&record("rxn-urea-1")).unwrap();
        let mut changed = record("rxn-urea-1");
        changed.meta.year = 1829;
        store.store(&changed).unwrap();
        assert_eq!(store.read("/data/imported/rxn-urea-1.json").unwrap().meta.year, 1829);
    }
}
