/// Diagnostics for one aggregation pass.
///
/// The counters never influence the aggregation result; they exist so
/// callers can tell how much of the input was dropped or silently coerced.
#[derive(Debug, Clone, Default)]
pub struct AggregationReport {
    /// Rows decoded from the CSV, before any filtering.
    pub rows_parsed: usize,
    /// Rows folded into an area group.
    pub rows_grouped: usize,
    /// Rows dropped for an empty or missing area key.
    pub rows_skipped_no_area: usize,
    /// Non-empty numeric fields that failed to parse and were coerced to 0.0.
    pub coerced_numeric_fields: usize,
    /// Distinct areas in the output.
    pub unique_areas: usize,
}

impl AggregationReport {
    pub fn grouped_percentage(&self) -> f64 {
        if self.rows_parsed == 0 {
            return 0.0;
        }
        (self.rows_grouped as f64 / self.rows_parsed as f64) * 100.0
    }

    pub fn has_data_quality_issues(&self) -> bool {
        self.rows_skipped_no_area > 0 || self.coerced_numeric_fields > 0
    }

    pub fn generate_summary(&self) -> String {
        format!(
            "Aggregation Report\n\
            ==================\n\
            Rows parsed:            {}\n\
            Rows grouped:           {} ({:.1}%)\n\
            Rows without area:      {}\n\
            Coerced numeric fields: {}\n\
            Unique areas:           {}",
            self.rows_parsed,
            self.rows_grouped,
            self.grouped_percentage(),
            self.rows_skipped_no_area,
            self.coerced_numeric_fields,
            self.unique_areas,
        )
    }
}
