use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::CsvEncoding;
use serde::{Deserialize, Serialize};

use crate::columns::{CAVE_COLUMNS, COORDINATE_COLUMN, MIS_DECODED_CHAR};
use crate::error::{CleanError, Result};

pub const DEFAULT_INPUT: &str = "your_file.csv";
pub const DEFAULT_OUTPUT: &str = "cleaned_cave_data.csv";

/// How bytes in the source file are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputEncoding {
    #[default]
    Utf8,
    /// Invalid sequences become U+FFFD instead of failing the load.
    LossyUtf8,
}

impl From<InputEncoding> for CsvEncoding {
    fn from(value: InputEncoding) -> Self {
        match value {
            InputEncoding::Utf8 => CsvEncoding::Utf8,
            InputEncoding::LossyUtf8 => CsvEncoding::LossyUtf8,
        }
    }
}

/// Settings for one cleaning run. `Default` reproduces the stock cave export job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanerConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub clean_column: String,
    pub strip: String,
    pub columns: Vec<String>,
    pub separator: char,
    pub encoding: InputEncoding,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            clean_column: COORDINATE_COLUMN.to_string(),
            strip: MIS_DECODED_CHAR.to_string(),
            columns: CAVE_COLUMNS.iter().map(|name| name.to_string()).collect(),
            separator: ',',
            encoding: InputEncoding::Utf8,
        }
    }
}

impl CleanerConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CleanError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CleanerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.clean_column.trim().is_empty() {
            return Err(CleanError::InvalidConfig(
                "clean_column must not be empty".to_string(),
            ));
        }
        if self.columns.is_empty() {
            return Err(CleanError::InvalidConfig(
                "columns must list at least one column".to_string(),
            ));
        }
        if let Some(blank) = self.columns.iter().position(|name| name.is_empty()) {
            return Err(CleanError::InvalidConfig(format!(
                "columns entry {} is empty",
                blank
            )));
        }
        self.separator_byte()?;
        Ok(())
    }

    /// Delimiter as the byte polars expects.
    pub fn separator_byte(&self) -> Result<u8> {
        match u8::try_from(self.separator) {
            Ok(byte) if byte.is_ascii() && !matches!(byte, b'"' | b'\n' | b'\r') => Ok(byte),
            _ => Err(CleanError::InvalidConfig(format!(
                "separator {:?} must be a single ASCII character other than a quote or newline",
                self.separator
            ))),
        }
    }
}
