//! Output sinks: where the rendered CSV ends up.
//!
//! The exporter only depends on [`OutputSink`] and does not know whether the
//! bytes land in a file, on stdout, or in memory.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    /// This environment cannot create the output at all (e.g. target directory missing).
    #[error("output location unavailable: {0}")]
    Unavailable(String),
    #[error("invalid output file name {0:?}")]
    InvalidName(String),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait OutputSink {
    /// Persists `contents` under `file_name`. Returns a human-readable location.
    fn persist(&self, file_name: &str, contents: &[u8]) -> Result<String, SinkError>;
}

/// Writes files into a directory. Each write goes to a temp file in the same
/// directory first and is renamed into place, so readers never see a partial CSV.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl OutputSink for FileSink {
    fn persist(&self, file_name: &str, contents: &[u8]) -> Result<String, SinkError> {
        validate_file_name(file_name)?;
        if !self.dir.is_dir() {
            return Err(SinkError::Unavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }

        let final_path = self.dir.join(file_name);
        let mut tmp = tempfile::Builder::new()
            .prefix(".geocsv-")
            .suffix(".part")
            .tempfile_in(&self.dir)?;
        tmp.write_all(contents)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&final_path).map_err(|e| SinkError::Io(e.error))?;

        Ok(final_path.display().to_string())
    }
}

/// Writes the CSV to standard output; the file name is only used for logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn persist(&self, _file_name: &str, contents: &[u8]) -> Result<String, SinkError> {
        let mut out = std::io::stdout().lock();
        out.write_all(contents)?;
        out.flush()?;
        Ok("<stdout>".to_string())
    }
}

/// Keeps persisted files in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl OutputSink for MemorySink {
    fn persist(&self, file_name: &str, contents: &[u8]) -> Result<String, SinkError> {
        validate_file_name(file_name)?;
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((file_name.to_string(), contents.to_vec()));
        Ok(format!("memory:{}", file_name))
    }
}

/// A bare file name: non-empty, no path separators, not `.`/`..`, no NUL.
fn validate_file_name(name: &str) -> Result<(), SinkError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(SinkError::InvalidName(name.to_string()));
    }
    Ok(())
}
