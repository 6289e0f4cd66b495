use serde::{Deserialize, Serialize};

use crate::utils::numeric::parse_metric_checked;

/// One raw row of the emission survey CSV, keyed by header name.
///
/// Numeric columns are kept as raw strings: coercion to `f64` is permissive
/// (bad or missing values become `0.0`) and happens at aggregation time, so
/// the record itself never fails to deserialize on dirty numbers. Columns
/// absent from the header default to the empty string; extra columns are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmissionRecord {
    #[serde(default)]
    pub area: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub area_type_raw: String,

    #[serde(default)]
    pub total_co2: String,

    #[serde(default)]
    pub area_total_emission: String,
}

impl EmissionRecord {
    /// The trimmed grouping key. Rows with an empty key belong to no area.
    pub fn area_key(&self) -> &str {
        self.area.trim()
    }

    pub fn has_area(&self) -> bool {
        !self.area_key().is_empty()
    }

    /// Per-record emission (kg/month), coerced from the `total_co2` column.
    pub fn per_record_emission(&self) -> f64 {
        self.per_record_emission_checked().0
    }

    /// Per-record emission plus whether the value was coerced to zero.
    pub fn per_record_emission_checked(&self) -> (f64, bool) {
        parse_metric_checked(&self.total_co2)
    }

    /// Area-level emission contribution, coerced from `area_total_emission`.
    pub fn area_emission(&self) -> f64 {
        self.area_emission_checked().0
    }

    /// Area-level emission plus whether the value was coerced to zero.
    pub fn area_emission_checked(&self) -> (f64, bool) {
        parse_metric_checked(&self.area_total_emission)
    }
}
