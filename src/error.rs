//! Fatal conditions. Every one of them ends the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't read config {}", path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("can't parse config {}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} is not a valid target")]
    InvalidTarget(String),

    #[error("no file at path {}", .0.display())]
    InputMissing(PathBuf),

    #[error("unable to open file at {}", path.display())]
    InputUnopenable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write file at {}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
