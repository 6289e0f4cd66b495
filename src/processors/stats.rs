/// Median of an ascending-sorted slice. For an even count, the arithmetic
/// mean of the two middle elements.
pub fn median_of_sorted(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Robust central value of per-record emissions.
///
/// Values above `ceiling` are excluded as outliers and the median of the
/// remainder is returned. When every value exceeds the ceiling the result
/// falls back to the arithmetic mean of the full unfiltered list, so a
/// group always yields a value rather than an undefined result. `None` only
/// for empty input.
pub fn robust_central_value(values: &[f64], ceiling: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut realistic: Vec<f64> = values.iter().copied().filter(|v| *v <= ceiling).collect();

    if realistic.is_empty() {
        return mean(values);
    }

    realistic.sort_by(|a, b| a.total_cmp(b));
    median_of_sorted(&realistic)
}
