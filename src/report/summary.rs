//! Coverage summary — per-file undocumented listings and the aggregate
//! percentage. This is the default report.

use crate::model::CoverageIndex;
use crate::report::Reporter;

pub struct SummaryReporter;

impl Reporter for SummaryReporter {
    fn render(&self, index: &CoverageIndex) -> String {
        let mut out = String::new();
        let mut total = 0usize;
        let mut documented = 0usize;

        for stats in index.files() {
            out.push_str(&format!("Stats for source file: {}\n", stats.path));

            let mut file_total = 0usize;
            let mut file_documented = 0usize;
            for def in &stats.definitions {
                file_total += 1;
                if def.documented {
                    file_documented += 1;
                } else {
                    out.push_str(&format!(
                        " --- No docstring for type <{}>: {}\n",
                        def.kind, def.name
                    ));
                }
            }

            total += file_total;
            documented += file_documented;
            out.push_str(&format!(
                " +++ {}: {}/{} documented\n",
                stats.path, file_documented, file_total
            ));
        }

        out.push_str(&format!(
            "Documented code: {}/{} ({}%)\n",
            documented,
            total,
            percentage(documented, total)
        ));
        out
    }
}

/// Whole-number coverage percentage. An empty index is defined as 0%.
fn percentage(documented: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (documented as f64 * 100.0 / total as f64).round() as u32
}
