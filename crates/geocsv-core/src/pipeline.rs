//! Fetch → flatten → export, once.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::export::{self, ExportOutcome, OutputSink, DEFAULT_FILE_NAME};
use crate::extract::{self, FailureKind, FetchOptions};

/// USGS ShakeMap MMI contours (GeoJSON MultiLineStrings, one per intensity level).
pub const DEFAULT_SOURCE_URL: &str = "https://earthquake.usgs.gov/realtime/product/shakemap/us7000pn9s/us/1743393840844/download/cont_mmi.json";

#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub url: String,
    pub file_name: String,
    pub fetch: FetchOptions,
}

impl PipelineRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            fetch: FetchOptions::default(),
        }
    }

    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn fetch_options(mut self, fetch: FetchOptions) -> Self {
        self.fetch = fetch;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Extraction succeeded; the exporter ran (and may still have skipped the write).
    Exported(ExportOutcome),
    /// Extraction failed; the exporter was not invoked.
    ExtractionFailed(FailureKind),
}

/// Runs one extraction and, if it produced a document, one export.
pub async fn run(
    request: &PipelineRequest,
    sink: &dyn OutputSink,
    diag: &dyn DiagnosticSink,
) -> PipelineOutcome {
    tracing::info!(url = %request.url, "extracting values and coordinates");
    match extract::extract(&request.url, &request.fetch, diag).await {
        Ok(records) => {
            tracing::debug!(records = records.len(), "extraction finished");
            PipelineOutcome::Exported(export::export(&records, &request.file_name, sink, diag))
        }
        Err(e) => {
            diag.error(Diagnostic::ExtractionFailed {
                url: request.url.clone(),
            });
            PipelineOutcome::ExtractionFailed(e.kind())
        }
    }
}
