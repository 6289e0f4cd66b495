use serde::{Deserialize, Serialize};
use validator::Validate;

/// Aggregated emission summary for one area, immutable once produced.
///
/// `total_co2` sums the `area_total_emission` column; `avg_co2` is the
/// robust central value of the per-record `total_co2` values (median of
/// realistic values, mean of all values when none are realistic).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AreaSummary {
    #[validate(length(min = 1))]
    pub area: String,

    pub total_co2: f64,

    // Unbounded: aggregation passes through whatever the survey contains,
    // including negative per-record values, and export must accept it
    pub avg_co2: f64,

    #[validate(range(min = 0.0))]
    pub benchmark: f64,

    #[validate(range(min = 0.0))]
    pub target: f64,

    pub city: String,

    pub country: String,

    pub area_type: String,

    pub count: usize,
}

impl AreaSummary {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        area: String,
        total_co2: f64,
        avg_co2: f64,
        benchmark: f64,
        target: f64,
        city: String,
        country: String,
        area_type: String,
        count: usize,
    ) -> Self {
        Self {
            area,
            total_co2,
            avg_co2,
            benchmark,
            target,
            city,
            country,
            area_type,
            count,
        }
    }

    /// Typical resident of this area emits more than the reference level.
    pub fn exceeds_benchmark(&self) -> bool {
        self.avg_co2 > self.benchmark
    }

    /// Typical resident is at or below the reduction target.
    pub fn meets_target(&self) -> bool {
        self.avg_co2 <= self.target
    }

    /// Margin between the benchmark and this area's typical emissions.
    /// Negative when the area exceeds the benchmark.
    pub fn benchmark_headroom(&self) -> f64 {
        self.benchmark - self.avg_co2
    }
}
