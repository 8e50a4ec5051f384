//! JSON configuration: the summary path and the ordered list of jobs.

use crate::error::{Error, Result};
use crate::model::Target;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Default configuration location, before home expansion.
pub const DEFAULT_CONFIG: &str = "~/.js2x.json";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub summary: String,
    #[serde(default)]
    pub processes: Vec<ProcessConfig>,
}

/// One conversion as written in the config file.
#[derive(Debug, Deserialize)]
pub struct ProcessConfig {
    pub target: String,
    pub input: String,
    pub output: String,
}

/// A validated job with its input already open.
#[derive(Debug)]
pub struct Job {
    pub target: Target,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub input: File,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| Error::ConfigMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn summary_path(&self) -> PathBuf {
        expand_path(&self.summary)
    }

    /// Validate every target, then check and open every input.
    ///
    /// Targets are checked first so a bad target fails before any input is
    /// touched.
    pub fn jobs(&self) -> Result<Vec<Job>> {
        let targets = self
            .processes
            .iter()
            .map(|p| p.target.parse::<Target>())
            .collect::<Result<Vec<_>>>()?;

        self.processes
            .iter()
            .zip(targets)
            .map(|(process, target)| {
                let input_path = expand_path(&process.input);
                let input = open_input(&input_path)?;
                Ok(Job {
                    target,
                    input_path,
                    output_path: expand_path(&process.output),
                    input,
                })
            })
            .collect()
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn open_input(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(Error::InputMissing(path.to_path_buf()));
    }
    File::open(path).map_err(|source| Error::InputUnopenable {
        path: path.to_path_buf(),
        source,
    })
}
