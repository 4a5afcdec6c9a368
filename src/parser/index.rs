//! `index.xml` decoding — the list of compounds Doxygen documented.

use crate::model::SymbolKind;
use anyhow::{Context, Result};
use roxmltree::Document;
use std::fs;
use std::path::Path;

/// One `<compound>` entry from `index.xml`.
#[derive(Debug)]
pub struct CompoundEntry {
    /// File stem of the compound's own XML file (`<refid>.xml`).
    pub refid: String,
    /// Parsed kind; `None` for kinds the tool does not recognize.
    pub kind: Option<SymbolKind>,
}

/// Read and decode `index.xml`. Entries without a `refid` are skipped.
pub fn load_index(path: &Path) -> Result<Vec<CompoundEntry>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let doc = Document::parse(&source)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let entries = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("compound"))
        .filter_map(|n| {
            let refid = n.attribute("refid")?;
            Some(CompoundEntry {
                refid: refid.to_string(),
                kind: n.attribute("kind").and_then(SymbolKind::parse),
            })
        })
        .collect();

    Ok(entries)
}
