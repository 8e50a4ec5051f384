//! Run-wide CSV log of every classification and rendering decision.

use crate::error::{Error, Result};
use crate::model::{LineState, Target};
use std::fs;
use std::path::Path;

pub const HEADER: &str = "TOTAL, LINE, TARGET, SECTION, SUBSECTION,HEIGHT, INPUT, OUTPUT\n";

const NOT_AVAILABLE: &str = "N/A";

/// Shared across every document of a run; `total` never resets.
#[derive(Debug, Default)]
pub struct AuditLog {
    total: usize,
    buffer: String,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row, preceded by the header on the very first call.
    pub fn record(
        &mut self,
        line: usize,
        target: Target,
        state: &LineState,
        input: &str,
        output: &str,
    ) -> String {
        if self.total == 0 {
            self.buffer.push_str(HEADER);
        }
        self.total += 1;

        let mut row = format!(
            "{},{},{},{},{},",
            self.total, line, target, state.section, state.subsection
        );
        if state.height.is_empty() {
            row.push_str(NOT_AVAILABLE);
        } else {
            row.push_str(state.height.as_str());
        }
        row.push(',');

        let input = input.trim();
        if input.is_empty() {
            row.push_str(NOT_AVAILABLE);
        } else {
            row.push_str(&format!("\"{}\"", input));
        }
        row.push_str(&format!(",\"{}\"\n", output.trim()));

        self.buffer.push_str(&row);
        row
    }

    /// Rows recorded so far in this run.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Create or truncate `path` and write the whole log.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.contents()).map_err(|source| Error::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })
    }
}
