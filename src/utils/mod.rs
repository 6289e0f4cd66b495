pub mod constants;
pub mod numeric;
pub mod progress;

pub use numeric::{parse_metric, parse_metric_checked};
