//! CLI command handlers, one per file.

mod config;
mod export;
mod preview;

pub use config::run_show_config;
pub use export::run_export;
pub use preview::run_preview;

use anyhow::Result;
use geocsv_core::config::GeocsvConfig;
use geocsv_core::export::ExportOutcome;
use geocsv_core::pipeline::{PipelineOutcome, DEFAULT_SOURCE_URL};
use geocsv_core::SkipReason;

/// URL from the command line, else config, else the built-in sample.
pub(crate) fn resolve_url(cfg: &GeocsvConfig, url: Option<String>) -> String {
    url.or_else(|| cfg.source_url.clone())
        .unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string())
}

/// Maps a pipeline outcome to the process result. Having nothing to export is
/// not an error; failing to fetch or to write is.
pub(crate) fn finish(outcome: PipelineOutcome) -> Result<()> {
    match outcome {
        PipelineOutcome::Exported(ExportOutcome::Written { .. })
        | PipelineOutcome::Exported(ExportOutcome::Skipped(SkipReason::NoRecords)) => Ok(()),
        PipelineOutcome::Exported(ExportOutcome::Skipped(reason)) => {
            anyhow::bail!("export failed: {}", reason)
        }
        PipelineOutcome::ExtractionFailed(kind) => {
            anyhow::bail!("value and coordinates extraction failed ({:?} error)", kind)
        }
    }
}
