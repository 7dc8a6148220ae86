//! Constantes del pipeline de normalización.
//!
//! Los literales aquí forman parte del formato persistido: cambiarlos cambia
//! los registros generados y los ids derivados.

/// Estructura por defecto cuando no hay SMILES resoluble.
pub const DEFAULT_STRUCTURE: &str = "C";
/// Etiqueta cuando sólo hay estructura y no nombre.
pub const GENERIC_PRODUCT_LABEL: &str = "Chemical Product";
/// Centinela de rendimiento desconocido.
pub const NO_YIELD: &str = "N/A";
pub const STANDARD_CONDITIONS: &str = "Standard Conditions";
/// Máximo de reactivos listados en el resumen de un paso importado.
pub const MAX_REAGENTS: usize = 3;
/// Longitud visible de una coincidencia de estructura en el reporte.
pub const SCAN_SNIPPET_LEN: usize = 50;

pub const ORD_SITE_URL: &str = "https://open-reaction-database.org";
pub const ORD_NOTES: &str = "Imported from Open Reaction Database";
pub const ORD_IMPORT_CLASS: &str = "ORD Import";
pub const ORD_IMPORT_AUTHOR: &str = "ORD Contributor";
/// Año asignado cuando la procedencia no trae fecha de creación legible.
pub const ORD_FALLBACK_YEAR: i32 = 2020;

pub const CURATED_SOURCE_URL: &str = "https://example.com/synthesis";

/// Placeholder del nombre cuando no hay identificador alguno.
pub fn unknown_molecule(ordinal: usize) -> String {
    format!("Unknown Molecule {ordinal}")
}
