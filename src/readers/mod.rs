pub mod emission_reader;

pub use emission_reader::EmissionReader;
