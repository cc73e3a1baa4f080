use polars::prelude::DataFrame;

/// Column holding the surveyed cave entrance coordinates.
pub const COORDINATE_COLUMN: &str = "Titik Koordinat";

/// Left behind when UTF-8 `°` was decoded as Latin-1 upstream.
pub const MIS_DECODED_CHAR: &str = "Â";

/// Columns kept in the cleaned export, in output order.
///
/// `Karakter Lorong` is listed twice; projection keeps the first position only.
pub const CAVE_COLUMNS: [&str; 12] = [
    "No.",
    "Nama Gua",
    "Sinonim",
    "Desa",
    "Area",
    "Titik Koordinat",
    "Elevasi Mulut Gua (mdpl)",
    "Karakter Lorong",
    "Total Kedalaman Lorong (meter)",
    "Total Panjang Lorong (meter)",
    "Status Explore",
    "Karakter Lorong",
];

/// Names from `columns` with repeats dropped, keeping first-seen order.
pub fn unique_in_order<S: AsRef<str>>(columns: &[S]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for name in columns {
        let name = name.as_ref();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Names from `required` that `df` does not have, in the order given.
pub fn missing_columns<'a, I>(df: &DataFrame, required: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    required
        .into_iter()
        .filter(|name| df.get_column_index(name).is_none())
        .map(str::to_string)
        .collect()
}
