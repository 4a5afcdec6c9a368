//! doxcov — documentation-coverage audit over Doxygen XML output.
//!
//! Point it at a directory containing Doxygen's generated `index.xml` and
//! per-compound XML files; it reports, per source file and in aggregate,
//! what fraction of symbols carry a detailed description.

mod model;
mod parser;
mod report;

use anyhow::Result;
use clap::Parser;
use model::{KindFilter, SymbolKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "doxcov",
    about = "Report documentation coverage for a Doxygen XML directory"
)]
struct Cli {
    /// Path to the Doxygen XML output directory
    dir: PathBuf,

    /// Report format: summary (default), raw
    #[arg(short = 'f', long, default_value = "summary")]
    format: String,

    /// Exclude file docstrings
    #[arg(long)]
    no_files: bool,

    /// Exclude variable docstrings
    #[arg(long)]
    no_variables: bool,

    /// Exclude namespace docstrings
    #[arg(long)]
    no_namespaces: bool,

    /// Exclude function docstrings
    #[arg(long)]
    no_functions: bool,

    /// Exclude class docstrings
    #[arg(long)]
    no_classes: bool,

    /// Exclude struct docstrings
    #[arg(long)]
    no_structs: bool,

    /// Exclude enum docstrings
    #[arg(long)]
    no_enums: bool,

    /// Exclude typedef docstrings
    #[arg(long)]
    no_typedefs: bool,

    /// Exclude define docstrings
    #[arg(long)]
    no_defines: bool,
}

impl Cli {
    /// Every kind is included unless its `--no-<kind>` flag was passed.
    fn kind_filter(&self) -> KindFilter {
        let flags = [
            (self.no_files, SymbolKind::File),
            (self.no_variables, SymbolKind::Variable),
            (self.no_namespaces, SymbolKind::Namespace),
            (self.no_functions, SymbolKind::Function),
            (self.no_classes, SymbolKind::Class),
            (self.no_structs, SymbolKind::Struct),
            (self.no_enums, SymbolKind::Enum),
            (self.no_typedefs, SymbolKind::Typedef),
            (self.no_defines, SymbolKind::Define),
        ];
        KindFilter::with_excluded(
            flags
                .into_iter()
                .filter_map(|(excluded, kind)| excluded.then_some(kind)),
        )
    }
}

fn main() -> Result<()> {
    // Skipped-compound warnings must be visible without RUST_LOG set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let reporter = report::create_reporter(&cli.format)?;
    let filter = cli.kind_filter();
    let index = parser::parse_dir(&cli.dir, &filter)?;

    print!("{}", reporter.render(&index));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_exclude_nothing() {
        let cli = Cli::parse_from(["doxcov", "xml"]);
        let filter = cli.kind_filter();
        assert!(!filter.is_excluded(SymbolKind::Function));
        assert!(!filter.is_excluded(SymbolKind::Define));
        assert!(filter.is_excluded(SymbolKind::Dir));
    }

    #[test]
    fn no_flags_map_to_exclusions() {
        let cli = Cli::parse_from(["doxcov", "--no-functions", "--no-structs", "xml"]);
        let filter = cli.kind_filter();
        assert!(filter.is_excluded(SymbolKind::Function));
        assert!(filter.is_excluded(SymbolKind::Struct));
        assert!(!filter.is_excluded(SymbolKind::Class));
    }
}
