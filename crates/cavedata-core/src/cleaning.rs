use polars::prelude::{DataFrame, DataType, NamedFrom, Series};
use tracing::{debug, info, warn};

use crate::columns::missing_columns;
use crate::error::{CleanError, Result, Stage};

/// A frame after stripping, plus how many cells actually changed.
#[derive(Debug, Clone)]
pub struct Stripped {
    pub frame: DataFrame,
    pub cells_changed: usize,
}

/// Removes every occurrence of `pattern` from each text cell of `column`.
///
/// Nulls and cells without the pattern are carried over untouched. A column that
/// was inferred as non-text is returned as is, since it cannot hold the pattern.
pub fn strip_from_column(df: &DataFrame, column: &str, pattern: &str) -> Result<Stripped> {
    let missing = missing_columns(df, [column]);
    if !missing.is_empty() {
        return Err(CleanError::MissingColumn {
            stage: Stage::Clean,
            columns: missing,
        });
    }

    let source = df.column(column)?;
    if source.dtype() != &DataType::String {
        warn!(column, dtype = %source.dtype(), "clean column is not text; leaving it unchanged");
        return Ok(Stripped {
            frame: df.clone(),
            cells_changed: 0,
        });
    }
    if pattern.is_empty() {
        debug!(column, "empty strip pattern; nothing to remove");
        return Ok(Stripped {
            frame: df.clone(),
            cells_changed: 0,
        });
    }

    let values = source.str()?;
    let mut cells_changed = 0;
    let cleaned: Vec<Option<String>> = values
        .into_iter()
        .map(|cell| {
            cell.map(|text| {
                if text.contains(pattern) {
                    cells_changed += 1;
                    text.replace(pattern, "")
                } else {
                    text.to_string()
                }
            })
        })
        .collect();

    let mut frame = df.clone();
    frame.with_column(Series::new(column.into(), cleaned))?;

    info!(column, cells_changed, "stripped pattern from column");
    Ok(Stripped {
        frame,
        cells_changed,
    })
}

/// Number of text cells in `column` that still contain `pattern`.
pub fn count_matching_cells(df: &DataFrame, column: &str, pattern: &str) -> Result<usize> {
    if pattern.is_empty() {
        return Ok(0);
    }
    let source = df.column(column)?;
    if source.dtype() != &DataType::String {
        return Ok(0);
    }
    Ok(source
        .str()?
        .into_iter()
        .flatten()
        .filter(|text| text.contains(pattern))
        .count())
}
