pub mod emission_analyzer;

pub use emission_analyzer::{DatasetStatistics, EmissionAnalyzer};
