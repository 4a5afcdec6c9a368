//! Data model for coverage accounting — format-agnostic.

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Symbol kinds that count toward documentation coverage.
///
/// Doxygen emits more kinds than these (`union`, `group`, `page`, …);
/// anything outside this set is ignored entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    File,
    Variable,
    Namespace,
    Function,
    Class,
    Struct,
    Enum,
    Typedef,
    Define,
    /// Directory compounds carry no documentation string and are never
    /// counted, but they appear in `index.xml` and must be recognized.
    Dir,
}

impl SymbolKind {
    /// Parse a Doxygen `kind` attribute value. Unrecognized kinds yield `None`.
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "file" => Some(Self::File),
            "variable" => Some(Self::Variable),
            "namespace" => Some(Self::Namespace),
            "function" => Some(Self::Function),
            "class" => Some(Self::Class),
            "struct" => Some(Self::Struct),
            "enum" => Some(Self::Enum),
            "typedef" => Some(Self::Typedef),
            "define" => Some(Self::Define),
            "dir" => Some(Self::Dir),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Variable => "variable",
            Self::Namespace => "namespace",
            Self::Function => "function",
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Typedef => "typedef",
            Self::Define => "define",
            Self::Dir => "dir",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which symbol kinds count toward coverage. Built once from the CLI flags,
/// immutable afterwards.
#[derive(Debug)]
pub struct KindFilter {
    excluded: HashSet<SymbolKind>,
}

impl KindFilter {
    /// A filter with every countable kind included.
    pub fn all_included() -> Self {
        Self {
            excluded: HashSet::new(),
        }
    }

    /// Build a filter from the kinds switched off on the command line.
    pub fn with_excluded(kinds: impl IntoIterator<Item = SymbolKind>) -> Self {
        Self {
            excluded: kinds.into_iter().collect(),
        }
    }

    /// `dir` compounds are excluded unconditionally; everything else follows
    /// the `--no-<kind>` flags.
    pub fn is_excluded(&self, kind: SymbolKind) -> bool {
        kind == SymbolKind::Dir || self.excluded.contains(&kind)
    }
}

/// One classified symbol: a `compounddef` or `memberdef` that passed the
/// kind filter.
#[derive(Debug, Clone)]
pub struct Definition {
    /// Display name derived from the element (compoundname, definition +
    /// argsstring, name, or id — in that order).
    pub name: String,
    pub kind: SymbolKind,
    pub documented: bool,
}

/// All symbols attributed to one source file, in recorded order.
#[derive(Debug)]
pub struct FileStats {
    pub path: String,
    pub definitions: Vec<Definition>,
}

/// Per-source-file symbol records, preserving first-seen file order.
///
/// Filled by the parser, consumed by the reporters. Files iterate in the
/// order their first symbol was recorded.
#[derive(Debug, Default)]
pub struct CoverageIndex {
    files: Vec<FileStats>,
    by_path: HashMap<String, usize>,
}

impl CoverageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition under its source file, creating the file entry on
    /// first sight.
    pub fn record(&mut self, source_file: &str, definition: Definition) {
        let idx = match self.by_path.get(source_file) {
            Some(&idx) => idx,
            None => {
                self.files.push(FileStats {
                    path: source_file.to_string(),
                    definitions: Vec::new(),
                });
                let idx = self.files.len() - 1;
                self.by_path.insert(source_file.to_string(), idx);
                idx
            }
        };
        self.files[idx].definitions.push(definition);
    }

    pub fn files(&self) -> &[FileStats] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
