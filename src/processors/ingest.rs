use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::AreaSummary;
use crate::processors::area_aggregator::AreaAggregator;
use crate::processors::report::AggregationReport;
use crate::readers::EmissionReader;

/// One-shot ingestion: retrieve the survey document, decode it, and
/// aggregate it into area summaries.
///
/// The whole operation is atomic. On any error no partial result escapes,
/// so a caller that holds a previous summary set keeps it untouched.
/// Callers that can trigger ingestion concurrently should serialize the
/// calls; the ingestor itself holds no shared state.
pub struct EmissionIngestor {
    reader: EmissionReader,
    aggregator: AreaAggregator,
}

impl EmissionIngestor {
    pub fn new() -> Self {
        Self {
            reader: EmissionReader::new(),
            aggregator: AreaAggregator::new(),
        }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self {
            reader: EmissionReader::with_mmap(use_mmap),
            aggregator: AreaAggregator::new(),
        }
    }

    /// Ingest a CSV file from disk.
    pub fn ingest_file(&self, path: &Path) -> Result<(Vec<AreaSummary>, AggregationReport)> {
        let records = self.reader.read_records_from_path(path)?;
        let (summaries, report) = self.aggregator.aggregate_with_report(&records)?;

        info!(
            path = %path.display(),
            areas = summaries.len(),
            rows = report.rows_parsed,
            "ingested emission survey"
        );

        Ok((summaries, report))
    }

    /// Ingest already-retrieved CSV text.
    pub fn ingest_text(&self, text: &str) -> Result<(Vec<AreaSummary>, AggregationReport)> {
        let records = self.reader.read_records(text)?;
        self.aggregator.aggregate_with_report(&records)
    }
}

impl Default for EmissionIngestor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;

    #[test]
    fn test_ingest_text_end_to_end() {
        let text = "\
area,city,country,area_type_raw,total_co2,area_total_emission
Andheri,Mumbai,India,Residential,150,10000
Andheri,Mumbai,India,Residential,180,12000
Worli,Mumbai,India,Commercial,90,5000
";

        let ingestor = EmissionIngestor::new();
        let (summaries, report) = ingestor.ingest_text(text).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(report.rows_parsed, 3);
        assert_eq!(report.unique_areas, 2);

        assert_eq!(summaries[0].area, "Andheri");
        assert_eq!(summaries[0].total_co2, 22000.0);
        assert_eq!(summaries[0].avg_co2, 165.0);

        assert_eq!(summaries[1].area, "Worli");
        assert_eq!(summaries[1].avg_co2, 90.0);
    }

    #[test]
    fn test_header_only_input_is_empty_result() {
        let text = "area,city,country,area_type_raw,total_co2,area_total_emission\n";
        let result = EmissionIngestor::new().ingest_text(text);
        assert!(matches!(result, Err(ProcessingError::EmptyResult(_))));
    }

    #[test]
    fn test_missing_file_is_retrieval_error() {
        let result = EmissionIngestor::new().ingest_file(Path::new("no/such/file.csv"));
        assert!(matches!(result, Err(ProcessingError::Retrieval(_))));
    }
}
