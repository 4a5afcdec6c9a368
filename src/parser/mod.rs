//! Parser module — walk a Doxygen XML directory into a `CoverageIndex`.

pub mod compound;
pub mod index;

use crate::model::{CoverageIndex, KindFilter};
use anyhow::{bail, Result};
use log::{debug, warn};
use roxmltree::Document;
use std::fs;
use std::path::Path;

/// Build the coverage index for one Doxygen XML output directory.
///
/// `<dir>/index.xml` must exist; that is the run's only fatal precondition.
/// Compound files that are missing or fail to parse are skipped with a
/// warning so one bad file cannot sink the whole report.
pub fn parse_dir(dir: &Path, filter: &KindFilter) -> Result<CoverageIndex> {
    let index_path = dir.join("index.xml");
    if !index_path.exists() {
        bail!("index.xml not found in path: {}", dir.display());
    }

    let mut coverage = CoverageIndex::new();

    for entry in index::load_index(&index_path)? {
        let excluded = match entry.kind {
            Some(kind) => filter.is_excluded(kind),
            None => true,
        };
        if excluded {
            continue;
        }

        let path = dir.join(format!("{}.xml", entry.refid));
        debug!("parsing compound file {}", path.display());
        if let Err(e) = parse_compound_file(&path, filter, &mut coverage) {
            warn!("failed to parse {}: {:#}", path.display(), e);
        }
    }

    Ok(coverage)
}

/// Parse one compound XML file and absorb its definitions. The file is read
/// and released in full before the caller moves to the next one.
fn parse_compound_file(
    path: &Path,
    filter: &KindFilter,
    coverage: &mut CoverageIndex,
) -> Result<()> {
    let source = fs::read_to_string(path)?;
    let doc = Document::parse(&source)?;
    compound::absorb(&doc, filter, coverage);
    Ok(())
}
