use std::collections::HashMap;

use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{AreaAccumulator, AreaSummary, EmissionRecord};
use crate::processors::report::AggregationReport;
use crate::processors::stats::robust_central_value;
use crate::utils::constants::{BENCHMARK_KG_MONTH, OUTLIER_CEILING_KG, TARGET_RATIO};

/// Groups survey rows by area and produces one summary per distinct area.
///
/// A pass is atomic: it either yields a complete summary set or fails with
/// no partial output. Grouping state is a local map scoped to the call, so
/// repeated passes over identical input yield identical results.
pub struct AreaAggregator;

impl AreaAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate rows into area summaries, sorted by area key.
    pub fn aggregate(&self, records: &[EmissionRecord]) -> Result<Vec<AreaSummary>> {
        let (summaries, _report) = self.aggregate_with_report(records)?;
        Ok(summaries)
    }

    /// Aggregate and also report how much input was dropped or coerced.
    pub fn aggregate_with_report(
        &self,
        records: &[EmissionRecord],
    ) -> Result<(Vec<AreaSummary>, AggregationReport)> {
        let mut report = AggregationReport {
            rows_parsed: records.len(),
            ..Default::default()
        };

        let groups = self.group_by_area(records, &mut report);

        if groups.is_empty() {
            return Err(ProcessingError::EmptyResult(
                "no rows with a usable area value".to_string(),
            ));
        }

        report.unique_areas = groups.len();

        let mut summaries: Vec<AreaSummary> = groups
            .into_values()
            .map(|acc| self.finalize_area(acc))
            .collect();

        summaries.sort_by(|a, b| a.area.cmp(&b.area));

        Ok((summaries, report))
    }

    /// Step A: fold rows into per-area accumulators. Rows with an empty
    /// area key are dropped silently; bad numerics coerce to zero and the
    /// row still counts.
    fn group_by_area(
        &self,
        records: &[EmissionRecord],
        report: &mut AggregationReport,
    ) -> HashMap<String, AreaAccumulator> {
        let mut groups: HashMap<String, AreaAccumulator> = HashMap::new();

        for record in records {
            if !record.has_area() {
                report.rows_skipped_no_area += 1;
                continue;
            }

            let (per_record, per_record_coerced) = record.per_record_emission_checked();
            let (area_emission, area_coerced) = record.area_emission_checked();
            report.coerced_numeric_fields +=
                usize::from(per_record_coerced) + usize::from(area_coerced);

            let area = record.area_key();
            let acc = groups
                .entry(area.to_string())
                .or_insert_with(|| AreaAccumulator::from_first_row(record));

            if acc.count > 0 && acc.city != record.city.trim() {
                debug!(
                    area,
                    first_city = %acc.city,
                    row_city = %record.city.trim(),
                    "divergent city metadata within area group, keeping first-seen value"
                );
            }

            acc.add(area_emission, per_record);
            report.rows_grouped += 1;
        }

        debug!(
            rows = records.len(),
            grouped = report.rows_grouped,
            skipped = report.rows_skipped_no_area,
            coerced = report.coerced_numeric_fields,
            "grouped survey rows by area"
        );

        groups
    }

    /// Step B: finalize one accumulator into its summary. Total; never
    /// fails, using the mean-of-all fallback when every value is an
    /// outlier.
    fn finalize_area(&self, acc: AreaAccumulator) -> AreaSummary {
        // Creation implies at least one folded row, so the value list is
        // never empty here.
        let avg_co2 =
            robust_central_value(&acc.carbon_emissions, OUTLIER_CEILING_KG).unwrap_or(0.0);

        let benchmark = BENCHMARK_KG_MONTH;
        let target = benchmark * TARGET_RATIO;

        AreaSummary::new(
            acc.area,
            acc.total_co2,
            avg_co2,
            benchmark,
            target,
            acc.city,
            acc.country,
            acc.area_type,
            acc.count,
        )
    }
}

impl Default for AreaAggregator {
    fn default() -> Self {
        Self::new()
    }
}
