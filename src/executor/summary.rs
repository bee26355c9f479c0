use crate::emitter::Diagnostic;
use crate::error::ConfigError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A diagnostic tied to the 1-based source line that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDiagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

/// What a transpile run did. Serialized as the `--report` JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranspileSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub final_depth: usize,
    pub unmatched_block_ends: usize,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl TranspileSummary {
    /// Every opened block was closed and nothing closed too early.
    pub fn is_balanced(&self) -> bool {
        self.final_depth == 0 && self.unmatched_block_ends == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_report(&self, path: &Path) -> Result<(), ConfigError> {
        let report_err = |source: std::io::Error| ConfigError::Report {
            path: path.to_path_buf(),
            source,
        };
        let json = self.to_json().map_err(|e| report_err(e.into()))?;
        fs::write(path, json).map_err(report_err)
    }
}
