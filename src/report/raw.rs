//! Raw dump — every recorded symbol verbatim, no aggregation. Diagnostic
//! aid for checking what the parser attributed to which file.

use crate::model::CoverageIndex;
use crate::report::Reporter;

pub struct RawReporter;

impl Reporter for RawReporter {
    fn render(&self, index: &CoverageIndex) -> String {
        let mut out = String::new();
        for stats in index.files() {
            out.push_str(&format!("Source file: {}\n", stats.path));
            for def in &stats.definitions {
                out.push_str(&format!(
                    " -- Symbol: {}: {}, {}\n",
                    def.name, def.kind, def.documented
                ));
            }
        }
        out
    }
}
