// crates/cavedata-core/src/error.rs

use std::fmt;
use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

/// Step of a cleaning run that referenced a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Clean,
    Project,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Clean => write!(f, "clean"),
            Stage::Project => write!(f, "project"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("input file {} does not exist", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} as delimited text: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("{stage} step references missing column(s): {}", columns.join(", "))]
    MissingColumn { stage: Stage, columns: Vec<String> },

    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, CleanError>;
