//! Extractor: fetch a feature collection and flatten it into
//! `(value, [lon, lat])` records.
//!
//! Transport and parse failures are fatal for the run and are reported once
//! through the diagnostics sink before being returned. Feature-level problems
//! are warnings and never abort the extraction.

mod error;
mod fetch;
mod flatten;

pub use error::{ExtractError, FailureKind};
pub use fetch::{fetch_body, FetchOptions};
pub use flatten::{extract_from_str, flatten_document, flatten_feature};

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::geojson::ValueCoordinate;

/// Fetches `url` and flattens the returned feature collection.
///
/// The blocking libcurl transfer runs on tokio's blocking pool; this is the
/// only await point. `Err` means the run produced no usable document.
pub async fn extract(
    url: &str,
    opts: &FetchOptions,
    diag: &dyn DiagnosticSink,
) -> Result<Vec<ValueCoordinate>, ExtractError> {
    let result = fetch_and_flatten(url, opts, diag).await;
    if let Err(e) = &result {
        diag.error(Diagnostic::FetchFailed {
            url: url.to_string(),
            message: e.to_string(),
        });
    }
    result
}

async fn fetch_and_flatten(
    url: &str,
    opts: &FetchOptions,
    diag: &dyn DiagnosticSink,
) -> Result<Vec<ValueCoordinate>, ExtractError> {
    let body = tokio::task::spawn_blocking({
        let url = url.to_string();
        let opts = opts.clone();
        move || fetch_body(&url, &opts)
    })
    .await
    .map_err(|source| ExtractError::FetchTask {
        url: url.to_string(),
        source,
    })??;

    let doc: serde_json::Value = serde_json::from_slice(&body)?;
    flatten_document(&doc, diag)
}
