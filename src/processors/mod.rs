pub mod area_aggregator;
pub mod ingest;
pub mod report;
pub mod stats;

pub use area_aggregator::AreaAggregator;
pub use ingest::EmissionIngestor;
pub use report::AggregationReport;
