use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use polars::prelude::{CsvReadOptions, CsvWriter, DataFrame, SerReader, SerWriter};
use tracing::{debug, info};

use crate::config::InputEncoding;
use crate::error::{CleanError, Result};

/// Reads a headed delimited file into a DataFrame.
///
/// Column types are inferred from every row, so a column that turns out to hold text
/// anywhere in the file is read as text.
pub fn load_csv(path: &Path, separator: u8, encoding: InputEncoding) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CleanError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => CleanError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|parse| {
            parse
                .with_separator(separator)
                .with_encoding(encoding.into())
        })
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|source| CleanError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded dataset"
    );
    Ok(df)
}

/// Writes `df` with a header row and no index column, replacing any existing file.
pub fn write_csv(df: &mut DataFrame, path: &Path, separator: u8) -> Result<()> {
    let mut file = File::create(path).map_err(|source| CleanError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened output for writing");

    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(separator)
        .finish(df)
        .map_err(|source| CleanError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote dataset"
    );
    Ok(())
}
