pub mod config;
pub mod logging;

pub mod diagnostics;
pub mod export;
pub mod extract;
pub mod geojson;
pub mod pipeline;

pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingDiagnostics, TracingDiagnostics};
pub use export::{export, ExportOutcome, OutputSink, SkipReason};
pub use extract::{extract, ExtractError, FailureKind, FetchOptions};
pub use geojson::ValueCoordinate;
