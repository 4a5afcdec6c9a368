//! Reporter module — trait-based format dispatch.

pub mod raw;
pub mod summary;

use crate::model::CoverageIndex;
use anyhow::{anyhow, Result};

/// Trait for rendering a CoverageIndex into a specific report format.
pub trait Reporter {
    fn render(&self, index: &CoverageIndex) -> String;
}

/// Create a reporter for the given format name.
pub fn create_reporter(format: &str) -> Result<Box<dyn Reporter>> {
    match format {
        "summary" => Ok(Box::new(summary::SummaryReporter)),
        "raw" => Ok(Box::new(raw::RawReporter)),
        _ => Err(anyhow!(
            "unknown format: {}. Use summary or raw",
            format
        )),
    }
}
