//! Exporter: render records as CSV and hand them to an output sink.
//!
//! Export never fails loudly. Every reason for not writing is reported as a
//! diagnostic and returned as [`ExportOutcome::Skipped`].

mod render;
mod sink;

pub use render::{format_number, to_csv, write_csv, HEADER};
pub use sink::{FileSink, MemorySink, OutputSink, SinkError, StdoutSink};

use std::fmt;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::geojson::ValueCoordinate;

pub const DEFAULT_FILE_NAME: &str = "value_coordinates_map.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { location: String, rows: usize },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing to export; no file is created.
    NoRecords,
    /// The sink cannot create output in this environment.
    SinkUnavailable,
    /// Rendering or writing failed.
    WriteFailed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoRecords => write!(f, "no value and coordinates to export"),
            SkipReason::SinkUnavailable => write!(f, "output location unavailable"),
            SkipReason::WriteFailed => write!(f, "write failed"),
        }
    }
}

/// Renders `records` and persists them as `file_name` through `sink`.
pub fn export(
    records: &[ValueCoordinate],
    file_name: &str,
    sink: &dyn OutputSink,
    diag: &dyn DiagnosticSink,
) -> ExportOutcome {
    if records.is_empty() {
        diag.warn(Diagnostic::ExportSkipped(SkipReason::NoRecords));
        return ExportOutcome::Skipped(SkipReason::NoRecords);
    }

    let failed = |message: String| Diagnostic::ExportFailed {
        file_name: file_name.to_string(),
        message,
    };

    let contents = match to_csv(records) {
        Ok(c) => c,
        Err(e) => {
            diag.error(failed(e.to_string()));
            return ExportOutcome::Skipped(SkipReason::WriteFailed);
        }
    };

    match sink.persist(file_name, &contents) {
        Ok(location) => {
            tracing::info!(rows = records.len(), "exported CSV to {}", location);
            ExportOutcome::Written {
                location,
                rows: records.len(),
            }
        }
        Err(e @ SinkError::Unavailable(_)) => {
            diag.error(failed(e.to_string()));
            ExportOutcome::Skipped(SkipReason::SinkUnavailable)
        }
        Err(e) => {
            diag.error(failed(e.to_string()));
            ExportOutcome::Skipped(SkipReason::WriteFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;

    #[test]
    fn export_writes_csv_through_sink() {
        let sink = MemorySink::new();
        let diag = RecordingDiagnostics::new();
        let records = [ValueCoordinate::new(5.0, [10.0, 20.0])];

        let outcome = export(&records, DEFAULT_FILE_NAME, &sink, &diag);

        assert_eq!(
            outcome,
            ExportOutcome::Written {
                location: "memory:value_coordinates_map.csv".to_string(),
                rows: 1
            }
        );
        let files = sink.files();
        assert_eq!(files[0].0, DEFAULT_FILE_NAME);
        assert_eq!(files[0].1, b"Value,Longitude,Latitude\n5,10,20\n");
        assert!(diag.is_empty());
    }

    #[test]
    fn empty_records_write_nothing_and_warn() {
        let sink = MemorySink::new();
        let diag = RecordingDiagnostics::new();

        let outcome = export(&[], DEFAULT_FILE_NAME, &sink, &diag);

        assert_eq!(outcome, ExportOutcome::Skipped(SkipReason::NoRecords));
        assert!(sink.is_empty());
        assert_eq!(
            diag.warnings(),
            vec![Diagnostic::ExportSkipped(SkipReason::NoRecords)]
        );
    }

    #[test]
    fn unavailable_sink_is_reported_not_raised() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("missing"));
        let diag = RecordingDiagnostics::new();
        let records = [ValueCoordinate::new(1.0, [2.0, 3.0])];

        let outcome = export(&records, "out.csv", &sink, &diag);

        assert_eq!(outcome, ExportOutcome::Skipped(SkipReason::SinkUnavailable));
        let errors = diag.errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], Diagnostic::ExportFailed { file_name, .. } if file_name == "out.csv"));
    }

    #[test]
    fn invalid_name_is_a_write_failure() {
        let sink = MemorySink::new();
        let diag = RecordingDiagnostics::new();
        let records = [ValueCoordinate::new(1.0, [2.0, 3.0])];

        let outcome = export(&records, "nested/out.csv", &sink, &diag);

        assert_eq!(outcome, ExportOutcome::Skipped(SkipReason::WriteFailed));
        assert_eq!(diag.errors().len(), 1);
    }
}
