//! Sequential conversion of every job, feeding one shared audit log.

use crate::audit::AuditLog;
use crate::classify::classify;
use crate::config::Job;
use crate::error::{Error, Result};
use crate::model::{LineState, Target};
use crate::render::{self, Renderer};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Per-document conversion state.
pub struct Document {
    target: Target,
    renderer: Box<dyn Renderer>,
    state: LineState,
    previous: String,
    last_output: String,
    line_index: usize,
    buffer: String,
}

impl Document {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            renderer: render::create_renderer(target),
            state: LineState::default(),
            previous: String::new(),
            last_output: String::new(),
            line_index: 0,
            buffer: String::new(),
        }
    }

    /// Classify, render and audit one line.
    pub fn process_line(&mut self, line: &str, audit: &mut AuditLog) {
        self.line_index += 1;

        let state = classify(&self.state, self.target, &self.previous, line);
        let op = self.renderer.operation(&state);
        let rendered = render::apply(op, line, &state.height, &self.last_output);

        if let Some(text) = &rendered.appended {
            self.buffer.push_str(text);
        }
        self.state = LineState {
            height: rendered.height,
            ..state
        };
        self.last_output = rendered.output;

        tracing::trace!(
            line = self.line_index,
            section = %self.state.section,
            subsection = %self.state.subsection,
            height = self.state.height.as_str(),
            ?op,
            "classified"
        );

        audit.record(
            self.line_index,
            self.target,
            &self.state,
            line,
            &self.last_output,
        );
        self.previous = line.to_string();
    }

    /// Run every line of `reader` through [`Document::process_line`].
    ///
    /// Lines are split on `\n` with a trailing `\r` dropped. Bytes that are
    /// not valid UTF-8 are replaced rather than rejected.
    pub fn process<R: Read>(&mut self, reader: R, path: &Path, audit: &mut AuditLog) -> Result<()> {
        for line in BufReader::new(reader).split(b'\n') {
            let mut bytes = line.map_err(|source| Error::InputUnopenable {
                path: path.to_path_buf(),
                source,
            })?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            self.process_line(&String::from_utf8_lossy(&bytes), audit);
        }
        Ok(())
    }

    pub fn lines(&self) -> usize {
        self.line_index
    }

    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Create or truncate `path` with the rendered document.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.buffer).map_err(|source| Error::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Convert every job in order, then write the audit log to `summary_path`.
pub fn run(jobs: Vec<Job>, summary_path: &Path) -> Result<()> {
    let mut audit = AuditLog::new();

    for job in jobs {
        tracing::info!(
            target_kind = %job.target,
            input = %job.input_path.display(),
            output = %job.output_path.display(),
            "converting"
        );

        let mut doc = Document::new(job.target);
        doc.process(job.input, &job.input_path, &mut audit)?;
        doc.write(&job.output_path)?;

        tracing::info!(
            lines = doc.lines(),
            bytes = doc.output().len(),
            output = %job.output_path.display(),
            "wrote document"
        );
    }

    audit.write(summary_path)?;
    tracing::info!(rows = audit.total(), summary = %summary_path.display(), "wrote summary");
    Ok(())
}
