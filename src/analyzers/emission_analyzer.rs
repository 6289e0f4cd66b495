use std::collections::HashSet;

use crate::error::{ProcessingError, Result};
use crate::models::AreaSummary;

#[derive(Debug)]
pub struct DatasetStatistics {
    pub total_areas: usize,
    pub total_rows: usize,
    pub unique_cities: usize,
    pub total_emissions: f64,
    pub min_avg_co2: f64,
    pub max_avg_co2: f64,
    pub lowest_area: String,
    pub highest_area: String,
    pub areas_over_benchmark: usize,
    pub areas_meeting_target: usize,
}

impl DatasetStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Emission Dataset Statistics\n\
            Areas: {} ({} cities)\n\
            Survey rows: {}\n\
            Total attributed emissions: {:.1} kg\n\
            Typical per-person range: {:.1} kg/month ({}) to {:.1} kg/month ({})\n\
            Areas over benchmark: {}/{}\n\
            Areas meeting target: {}/{}",
            self.total_areas,
            self.unique_cities,
            self.total_rows,
            self.total_emissions,
            self.min_avg_co2,
            self.lowest_area,
            self.max_avg_co2,
            self.highest_area,
            self.areas_over_benchmark,
            self.total_areas,
            self.areas_meeting_target,
            self.total_areas,
        )
    }
}

/// Computes dataset-level statistics over a finished summary set.
pub struct EmissionAnalyzer;

impl EmissionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, summaries: &[AreaSummary]) -> Result<DatasetStatistics> {
        if summaries.is_empty() {
            return Err(ProcessingError::EmptyResult(
                "no area summaries to analyze".to_string(),
            ));
        }

        let mut cities = HashSet::new();
        let mut total_rows = 0;
        let mut total_emissions = 0.0;
        let mut min_avg_co2 = f64::INFINITY;
        let mut max_avg_co2 = f64::NEG_INFINITY;
        let mut lowest_area = String::new();
        let mut highest_area = String::new();
        let mut areas_over_benchmark = 0;
        let mut areas_meeting_target = 0;

        for summary in summaries {
            if !summary.city.is_empty() {
                cities.insert(summary.city.clone());
            }
            total_rows += summary.count;
            total_emissions += summary.total_co2;

            if summary.avg_co2 < min_avg_co2 {
                min_avg_co2 = summary.avg_co2;
                lowest_area = summary.area.clone();
            }
            if summary.avg_co2 > max_avg_co2 {
                max_avg_co2 = summary.avg_co2;
                highest_area = summary.area.clone();
            }

            if summary.exceeds_benchmark() {
                areas_over_benchmark += 1;
            }
            if summary.meets_target() {
                areas_meeting_target += 1;
            }
        }

        Ok(DatasetStatistics {
            total_areas: summaries.len(),
            total_rows,
            unique_cities: cities.len(),
            total_emissions,
            min_avg_co2,
            max_avg_co2,
            lowest_area,
            highest_area,
            areas_over_benchmark,
            areas_meeting_target,
        })
    }
}

impl Default for EmissionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(area: &str, city: &str, avg_co2: f64, total_co2: f64, count: usize) -> AreaSummary {
        AreaSummary::new(
            area.to_string(),
            total_co2,
            avg_co2,
            250.0,
            200.0,
            city.to_string(),
            "India".to_string(),
            "Residential".to_string(),
            count,
        )
    }

    #[test]
    fn test_analyze() {
        let summaries = vec![
            summary("Andheri", "Mumbai", 165.0, 22000.0, 2),
            summary("Worli", "Mumbai", 90.0, 5000.0, 1),
            summary("Vashi", "Navi Mumbai", 300.0, 9000.0, 3),
        ];

        let stats = EmissionAnalyzer::new().analyze(&summaries).unwrap();

        assert_eq!(stats.total_areas, 3);
        assert_eq!(stats.total_rows, 6);
        assert_eq!(stats.unique_cities, 2);
        assert_eq!(stats.total_emissions, 36000.0);
        assert_eq!(stats.lowest_area, "Worli");
        assert_eq!(stats.highest_area, "Vashi");
        assert_eq!(stats.areas_over_benchmark, 1);
        assert_eq!(stats.areas_meeting_target, 2);
    }

    #[test]
    fn test_analyze_empty_is_error() {
        let result = EmissionAnalyzer::new().analyze(&[]);
        assert!(matches!(result, Err(ProcessingError::EmptyResult(_))));
    }

    #[test]
    fn test_summary_renders() {
        let summaries = vec![summary("Andheri", "Mumbai", 165.0, 22000.0, 2)];
        let stats = EmissionAnalyzer::new().analyze(&summaries).unwrap();
        let text = stats.summary();

        assert!(text.contains("Areas: 1 (1 cities)"));
        assert!(text.contains("Andheri"));
    }
}
