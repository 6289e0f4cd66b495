/// Reference emissions level for area comparisons (kg CO2 per person per month)
pub const BENCHMARK_KG_MONTH: f64 = 250.0;

/// Target is 20% below the benchmark
pub const TARGET_RATIO: f64 = 0.8;

/// Per-record values above this ceiling (kg/month) are excluded as outliers
pub const OUTLIER_CEILING_KG: f64 = 500.0;

/// Default survey dataset file name
pub const EMISSIONS_FILE: &str = "Carbon_Emission_With_Seasons.csv";

/// Default export file stem
pub const DEFAULT_OUTPUT_STEM: &str = "area-summaries";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
