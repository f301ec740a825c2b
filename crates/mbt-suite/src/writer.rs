//! Suite report output

use crate::error::SuiteError;
use crate::suite::TestSuite;
use std::path::{Path, PathBuf};

/// Writes suites as pretty-printed JSON into a report directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create writer for `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Report directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the suite would be written to
    #[must_use]
    pub fn path_for(&self, suite: &TestSuite) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(&suite.name)))
    }

    /// Write `suite` and return the file path
    ///
    /// # Errors
    /// [`SuiteError::Io`] if the directory or file cannot be written.
    pub fn write(&self, suite: &TestSuite) -> Result<PathBuf, SuiteError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SuiteError::io_error(&self.dir, e))?;

        let path = self.path_for(suite);
        let body = serde_json::to_string_pretty(suite)?;
        std::fs::write(&path, body).map_err(|e| SuiteError::io_error(&path, e))?;

        tracing::info!("Wrote '{}' suite to {}", suite.name, path.display());
        Ok(path)
    }
}

/// Suite name reduced to a portable file stem
fn file_stem(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "suite".to_string()
    } else {
        stem
    }
}
