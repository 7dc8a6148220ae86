//! Reporte legible del escáner.
use std::io::{self, Write};

use chem_core::{ArchiveScan, MatchReport, ScanQuery};

/// Reacciones listadas por archivo.
const REACTIONS_PER_ARCHIVE: usize = 5;
/// Coincidencias mostradas por reacción.
const DETAILS_PER_REACTION: usize = 2;

pub fn write_scan_report<W: Write>(out: &mut W, query: &ScanQuery, scans: &[ArchiveScan]) -> io::Result<()> {
    writeln!(out, "Found {} dataset files to search", scans.len())?;
    writeln!(out, "Keywords: {:?}", query.keywords)?;
    writeln!(out, "SMILES patterns: {:?}", query.structure_patterns)?;
    writeln!(out, "{}", "-".repeat(60))?;

    let mut all: Vec<&MatchReport> = Vec::new();
    for scan in scans {
        let name = scan.archive.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        writeln!(out, "\nSearching: {name}")?;
        match &scan.outcome {
            Err(message) => writeln!(out, "  Error loading {}: {message}", scan.archive.display())?,
            Ok(reports) if reports.is_empty() => writeln!(out, "  No matches found")?,
            Ok(reports) => {
                writeln!(out, "  Found {} matching reactions!", reports.len())?;
                for report in reports.iter().take(REACTIONS_PER_ARCHIVE) {
                    writeln!(out, "    - {}", report.reaction_id)?;
                    for detail in report.matches.iter().take(DETAILS_PER_REACTION) {
                        writeln!(out, "      {detail}")?;
                    }
                }
                all.extend(reports.iter());
            }
        }
    }

    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "TOTAL: {} matching reactions found", all.len())?;
    if !all.is_empty() {
        writeln!(out, "\nAll reaction IDs:")?;
        for report in all {
            writeln!(out, "  {}", report.reaction_id)?;
        }
    }
    Ok(())
}
