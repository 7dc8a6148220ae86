//! Escáner de solo lectura sobre archivos crudos de reacciones.
//!
//! Busca palabras clave (sin distinguir mayúsculas) en los identificadores
//! NAME y patrones exactos en los identificadores STRUCTURE. Se inspeccionan
//! primero los productos de cada resultado y luego los componentes de cada
//! entrada. No escribe nada.
use std::fmt;
use std::path::{Path, PathBuf};

use chem_domain::{Compound, IdentifierKind, RawReaction};

use crate::constants::SCAN_SNIPPET_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanQuery {
    pub keywords: Vec<String>,
    pub structure_patterns: Vec<String>,
}

impl ScanQuery {
    pub fn new<K, P>(keywords: K, structure_patterns: P) -> Self
        where K: IntoIterator,
              K::Item: Into<String>,
              P: IntoIterator,
              P::Item: Into<String>
    {
        Self { keywords: keywords.into_iter().map(Into::into).collect(),
               structure_patterns: structure_patterns.into_iter().map(Into::into).collect() }
    }

    /// Consulta de prostaglandinas: palabras clave de la ruta de Corey y los
    /// fragmentos de la lactona de Corey y del 2-cloroacrilonitrilo.
    pub fn prostaglandin() -> Self {
        Self::new(["prostaglandin",
                   "pgf2",
                   "pge2",
                   "corey lactone",
                   "corey aldehyde",
                   "cyclopentadiene",
                   "diels-alder",
                   "chloroacrylonitrile"],
                  ["CC(=O)O[C@@H]1C[C@H]2[C@@H]", "C=C(C#N)Cl"])
    }
}

impl Default for ScanQuery {
    fn default() -> Self {
        Self::prostaglandin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRole {
    Product,
    Reactant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Name,
    Structure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDetail {
    pub role: MatchRole,
    pub field: MatchField,
    /// Nombre completo, o la estructura recortada con `...` al final.
    pub text: String,
}

impl fmt::Display for MatchDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            MatchRole::Product => "Product",
            MatchRole::Reactant => "Reactant",
        };
        match self.field {
            MatchField::Name => write!(f, "{role} name: {}", self.text),
            MatchField::Structure => write!(f, "{role} SMILES match: {}", self.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub archive: PathBuf,
    pub reaction_id: String,
    pub matches: Vec<MatchDetail>,
}

/// Fuente de reacciones crudas a partir de un archivo.
pub trait ArchiveLoader {
    type Error: fmt::Display;

    fn load(&self, path: &Path) -> Result<Vec<RawReaction>, Self::Error>;
}

/// Resultado de escanear un archivo. Un fallo de carga conserva el mensaje
/// para el reporte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveScan {
    pub archive: PathBuf,
    pub outcome: Result<Vec<MatchReport>, String>,
}

fn snippet(value: &str) -> String {
    let head: String = value.chars().take(SCAN_SNIPPET_LEN).collect();
    format!("{head}...")
}

fn scan_compound(compound: &Compound, role: MatchRole, query: &ScanQuery, out: &mut Vec<MatchDetail>) {
    for ident in &compound.identifiers {
        match ident.kind {
            IdentifierKind::Name => {
                let lowered = ident.value.to_lowercase();
                for kw in &query.keywords {
                    if lowered.contains(&kw.to_lowercase()) {
                        out.push(MatchDetail { role,
                                               field: MatchField::Name,
                                               text: ident.value.clone() });
                    }
                }
            }
            IdentifierKind::Structure => {
                for pattern in &query.structure_patterns {
                    if ident.value.contains(pattern.as_str()) {
                        out.push(MatchDetail { role,
                                               field: MatchField::Structure,
                                               text: snippet(&ident.value) });
                    }
                }
            }
            IdentifierKind::Other => {}
        }
    }
}

/// Un `MatchReport` por cada reacción con al menos una coincidencia.
pub fn scan_reactions(archive: &Path, reactions: &[RawReaction], query: &ScanQuery) -> Vec<MatchReport> {
    reactions.iter()
             .filter_map(|reaction| {
                 let mut matches = Vec::new();
                 for product in reaction.products() {
                     scan_compound(product, MatchRole::Product, query, &mut matches);
                 }
                 for component in reaction.components() {
                     scan_compound(component, MatchRole::Reactant, query, &mut matches);
                 }
                 if matches.is_empty() {
                     return None;
                 }
                 Some(MatchReport { archive: archive.to_path_buf(),
                                    reaction_id: reaction.reaction_id().unwrap_or_default().to_string(),
                                    matches })
             })
             .collect()
}

/// Escanea cada archivo y conserva el resultado por archivo.
pub fn scan_archives<L, P>(archives: &[P], loader: &L, query: &ScanQuery) -> Vec<ArchiveScan>
    where L: ArchiveLoader + ?Sized,
          P: AsRef<Path>
{
    archives.iter()
            .map(|p| {
                let path = p.as_ref();
                let outcome = match loader.load(path) {
                    Ok(reactions) => {
                        log::debug!("{}: {} reacciones", path.display(), reactions.len());
                        Ok(scan_reactions(path, &reactions, query))
                    }
                    Err(e) => {
                        log::warn!("no se pudo cargar {}: {}", path.display(), e);
                        Err(e.to_string())
                    }
                };
                ArchiveScan { archive: path.to_path_buf(),
                              outcome }
            })
            .collect()
}

/// Todas las coincidencias de todos los archivos; los que no cargan se
/// omiten.
pub fn scan<L, P>(archives: &[P], loader: &L, query: &ScanQuery) -> Vec<MatchReport>
    where L: ArchiveLoader + ?Sized,
          P: AsRef<Path>
{
    scan_archives(archives, loader, query).into_iter()
                                          .filter_map(|a| a.outcome.ok())
                                          .flatten()
                                          .collect()
}
