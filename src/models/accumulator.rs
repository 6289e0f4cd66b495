use crate::models::EmissionRecord;

/// Running per-area state for one aggregation pass.
///
/// Created from the first row seen for an area; that row's trimmed
/// city/country/area_type are authoritative and later divergent values in
/// the same group are ignored.
#[derive(Debug, Clone)]
pub struct AreaAccumulator {
    pub area: String,
    /// Running sum of `area_total_emission` across the group.
    pub total_co2: f64,
    /// Per-record `total_co2` values, in row order.
    pub carbon_emissions: Vec<f64>,
    pub city: String,
    pub country: String,
    pub area_type: String,
    pub count: usize,
}

impl AreaAccumulator {
    pub fn from_first_row(record: &EmissionRecord) -> Self {
        Self {
            area: record.area_key().to_string(),
            total_co2: 0.0,
            carbon_emissions: Vec::new(),
            city: record.city.trim().to_string(),
            country: record.country.trim().to_string(),
            area_type: record.area_type_raw.trim().to_string(),
            count: 0,
        }
    }

    /// Fold one row's coerced values into the group.
    pub fn add(&mut self, area_emission: f64, per_record_emission: f64) {
        self.total_co2 += area_emission;
        self.carbon_emissions.push(per_record_emission);
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_metadata_capture() {
        let record = EmissionRecord {
            area: " Andheri ".to_string(),
            city: " Mumbai ".to_string(),
            country: "India".to_string(),
            area_type_raw: "Residential".to_string(),
            total_co2: "150".to_string(),
            area_total_emission: "10000".to_string(),
        };

        let acc = AreaAccumulator::from_first_row(&record);
        assert_eq!(acc.area, "Andheri");
        assert_eq!(acc.city, "Mumbai");
        assert_eq!(acc.country, "India");
        assert_eq!(acc.area_type, "Residential");
        assert_eq!(acc.count, 0);
        assert!(acc.carbon_emissions.is_empty());
    }

    #[test]
    fn test_add_accumulates() {
        let record = EmissionRecord {
            area: "Worli".to_string(),
            ..Default::default()
        };

        let mut acc = AreaAccumulator::from_first_row(&record);
        acc.add(10000.0, 150.0);
        acc.add(12000.0, 180.0);

        assert_eq!(acc.total_co2, 22000.0);
        assert_eq!(acc.carbon_emissions, vec![150.0, 180.0]);
        assert_eq!(acc.count, 2);
    }
}
