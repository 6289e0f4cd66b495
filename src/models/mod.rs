pub mod accumulator;
pub mod record;
pub mod summary;

pub use accumulator::AreaAccumulator;
pub use record::EmissionRecord;
pub use summary::AreaSummary;
