//! `geocsv preview` – fetch and print the CSV to stdout.

use anyhow::Result;
use geocsv_core::config::GeocsvConfig;
use geocsv_core::export::StdoutSink;
use geocsv_core::pipeline::{self, PipelineRequest};
use geocsv_core::TracingDiagnostics;

use super::{finish, resolve_url};

pub async fn run_preview(cfg: &GeocsvConfig, url: Option<String>) -> Result<()> {
    let request = PipelineRequest::new(resolve_url(cfg, url))
        .file_name(cfg.output_file.clone())
        .fetch_options(cfg.fetch.to_options());
    let outcome = pipeline::run(&request, &StdoutSink, &TracingDiagnostics).await;
    finish(outcome)
}
