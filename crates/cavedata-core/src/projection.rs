use polars::prelude::DataFrame;
use tracing::info;

use crate::columns::{missing_columns, unique_in_order};
use crate::error::{CleanError, Result, Stage};

/// Selects `columns` from `df` in list order. Repeated names keep their first slot.
///
/// Every missing name is reported in one error so a bad export can be fixed in a
/// single pass.
pub fn project_columns<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    let order = unique_in_order(columns);
    let missing = missing_columns(df, order.iter().copied());
    if !missing.is_empty() {
        return Err(CleanError::MissingColumn {
            stage: Stage::Project,
            columns: missing,
        });
    }

    let projected = df.select(order.iter().copied())?;
    info!(
        requested = columns.len(),
        kept = projected.width(),
        dropped = df.width() - projected.width(),
        "projected columns"
    );
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Keterangan".into(), vec!["basah", "kering"]).into(),
            Series::new("Karakter Lorong".into(), vec!["Vertikal", "Horizontal"]).into(),
            Series::new("No.".into(), vec![1i64, 2]).into(),
        ])
        .expect("valid frame")
    }

    #[test]
    fn keeps_list_order_and_drops_the_rest() {
        let projected =
            project_columns(&frame(), &["No.", "Karakter Lorong", "Karakter Lorong"]).unwrap();

        assert_eq!(projected.get_column_names(), ["No.", "Karakter Lorong"]);
        assert_eq!(projected.height(), 2);
    }

    #[test]
    fn reports_all_missing_columns() {
        let err = project_columns(&frame(), &["No.", "Desa", "Area", "Desa"]).unwrap_err();

        match err {
            CleanError::MissingColumn { stage, columns } => {
                assert_eq!(stage, Stage::Project);
                assert_eq!(columns, vec!["Desa".to_string(), "Area".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
