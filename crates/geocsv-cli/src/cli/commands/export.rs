//! `geocsv export` – fetch and write the CSV file.

use anyhow::{Context, Result};
use geocsv_core::config::GeocsvConfig;
use geocsv_core::export::FileSink;
use geocsv_core::pipeline::{self, PipelineOutcome, PipelineRequest};
use geocsv_core::{ExportOutcome, TracingDiagnostics};
use std::path::{Path, PathBuf};

use super::{finish, resolve_url};

pub async fn run_export(
    cfg: &GeocsvConfig,
    url: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let (dir, file_name) = resolve_output(cfg, output.as_deref())?;
    let request = PipelineRequest::new(resolve_url(cfg, url))
        .file_name(file_name)
        .fetch_options(cfg.fetch.to_options());

    let sink = FileSink::new(dir);
    let outcome = pipeline::run(&request, &sink, &TracingDiagnostics).await;
    if let PipelineOutcome::Exported(ExportOutcome::Written { location, rows }) = &outcome {
        println!("Wrote {} rows to {}", rows, location);
    }
    finish(outcome)
}

/// Splits the output into (directory, file name).
///
/// `--output` wins; otherwise config `output_dir` (or the current directory)
/// and `output_file` are used.
pub(crate) fn resolve_output(cfg: &GeocsvConfig, output: Option<&Path>) -> Result<(PathBuf, String)> {
    match output {
        Some(path) => {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("output path {} has no usable file name", path.display()))?
                .to_string();
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            Ok((dir, file_name))
        }
        None => {
            let dir = match &cfg.output_dir {
                Some(d) => d.clone(),
                None => std::env::current_dir().context("current directory")?,
            };
            Ok((dir, cfg.output_file.clone()))
        }
    }
}
