//! Diagnostics side channel.
//!
//! Extraction and export never print directly; they report through a
//! [`DiagnosticSink`]. The CLI installs [`TracingDiagnostics`]; tests use
//! [`RecordingDiagnostics`] and assert on what was reported.

use std::fmt;
use std::sync::Mutex;

use crate::export::SkipReason;
use crate::geojson::FeatureAnomaly;

/// Something worth telling the operator about. None of these carry data needed
/// by the caller; they are informational only.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Document has no `features` field; extraction yields nothing.
    MissingFeatures,
    /// Feature at `index` in `features` was skipped or partially unusable.
    Feature { index: usize, anomaly: FeatureAnomaly },
    /// Fetch or parse of `url` failed; `message` names the cause.
    FetchFailed { url: String, message: String },
    /// Extraction returned no result; export will not run.
    ExtractionFailed { url: String },
    /// Export wrote nothing.
    ExportSkipped(SkipReason),
    /// Output sink rejected the write.
    ExportFailed { file_name: String, message: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingFeatures => write!(f, "'features' key not found in JSON"),
            Diagnostic::Feature { index, anomaly } => write!(f, "feature {}: {}", index, anomaly),
            Diagnostic::FetchFailed { message, .. } => write!(f, "{}", message),
            Diagnostic::ExtractionFailed { url } => {
                write!(f, "value and coordinates extraction failed for {}", url)
            }
            Diagnostic::ExportSkipped(reason) => write!(f, "export skipped: {}", reason),
            Diagnostic::ExportFailed { file_name, message } => {
                write!(f, "could not write {}: {}", file_name, message)
            }
        }
    }
}

/// Receiver for diagnostics. Implementations must be cheap; they are called
/// once per anomalous feature.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, diagnostic: Diagnostic);
    fn error(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn/error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn warn(&self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
    }

    fn error(&self, diagnostic: Diagnostic) {
        tracing::error!("{}", diagnostic);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warn,
    Error,
}

/// Keeps every diagnostic in memory, in the order reported.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<(Level, Diagnostic)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, Diagnostic)> {
        self.lock().clone()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.at(Level::Warn)
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.at(Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn at(&self, level: Level) -> Vec<Diagnostic> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, d)| d.clone())
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, Diagnostic)>> {
        // A panic while holding the lock only happens in a failing test; keep the data.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, level: Level, diagnostic: Diagnostic) {
        self.lock().push((level, diagnostic));
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn warn(&self, diagnostic: Diagnostic) {
        self.push(Level::Warn, diagnostic);
    }

    fn error(&self, diagnostic: Diagnostic) {
        self.push(Level::Error, diagnostic);
    }
}
