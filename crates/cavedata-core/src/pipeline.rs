use std::path::PathBuf;

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::info;

use crate::cleaning::{count_matching_cells, strip_from_column};
use crate::columns::{missing_columns, unique_in_order};
use crate::config::CleanerConfig;
use crate::dataset::{load_csv, write_csv};
use crate::error::Result;
use crate::projection::project_columns;

/// Outcome of a completed cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: Vec<String>,
    pub cells_cleaned: usize,
}

/// What a run would do to the input, gathered without writing anything.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub input: PathBuf,
    pub rows: usize,
    pub present: Vec<String>,
    pub missing: Vec<String>,
    pub cells_to_clean: usize,
}

impl CheckReport {
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Strip then project, without touching the filesystem.
pub fn clean_frame(df: &DataFrame, config: &CleanerConfig) -> Result<(DataFrame, usize)> {
    let stripped = strip_from_column(df, &config.clean_column, &config.strip)?;
    let projected = project_columns(&stripped.frame, &config.columns)?;
    Ok((projected, stripped.cells_changed))
}

/// Load, clean, project and save. The output file is only created once every
/// earlier step has succeeded.
pub fn run(config: &CleanerConfig) -> Result<CleanReport> {
    config.validate()?;
    let separator = config.separator_byte()?;

    let df = load_csv(&config.input, separator, config.encoding)?;
    let (mut projected, cells_cleaned) = clean_frame(&df, config)?;
    write_csv(&mut projected, &config.output, separator)?;

    let report = CleanReport {
        input: config.input.clone(),
        output: config.output.clone(),
        rows: projected.height(),
        columns: projected
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect(),
        cells_cleaned,
    };
    info!(
        rows = report.rows,
        columns = report.columns.len(),
        cells_cleaned,
        "cleaning run complete"
    );
    Ok(report)
}

/// Load the input and report missing columns and pending cleanup.
pub fn check(config: &CleanerConfig) -> Result<CheckReport> {
    config.validate()?;
    let df = load_csv(&config.input, config.separator_byte()?, config.encoding)?;

    let mut required = vec![config.clean_column.as_str()];
    for name in unique_in_order(&config.columns) {
        if !required.contains(&name) {
            required.push(name);
        }
    }
    let missing = missing_columns(&df, required.iter().copied());
    let present = required
        .iter()
        .filter(|name| !missing.iter().any(|absent| absent == *name))
        .map(|name| name.to_string())
        .collect();

    let cells_to_clean = if missing.iter().any(|name| *name == config.clean_column) {
        0
    } else {
        count_matching_cells(&df, &config.clean_column, &config.strip)?
    };

    Ok(CheckReport {
        input: config.input.clone(),
        rows: df.height(),
        present,
        missing,
        cells_to_clean,
    })
}
