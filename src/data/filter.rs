use super::model::Dataset;

// ---------------------------------------------------------------------------
// Numeric predicates over the value column
// ---------------------------------------------------------------------------

/// Values of every row whose cell coerces to a number, in file order.
/// Rows that do not coerce are dropped entirely.
pub fn valid_values(dataset: &Dataset) -> Vec<f64> {
    (0..dataset.len()).filter_map(|i| dataset.value(i)).collect()
}

/// Indices of rows with `min <= value <= max`.
///
/// A row whose value does not coerce never matches.
pub fn range_indices(dataset: &Dataset, min: f64, max: f64) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&i| dataset.value(i).is_some_and(|v| min <= v && v <= max))
        .collect()
}

/// Values inside the inclusive range `[lower, upper]`, order preserved.
pub fn retain_within(values: &[f64], lower: f64, upper: f64) -> Vec<f64> {
    values
        .iter()
        .copied()
        .filter(|v| lower <= *v && *v <= upper)
        .collect()
}
