use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use validator::Validate;

use crate::error::{ProcessingError, Result};
use crate::models::AreaSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessingError::Config(format!(
                "Unknown output format: '{}'. Supported: csv, json",
                other
            ))),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Exports a finished summary set as CSV or JSON.
pub struct SummaryWriter;

impl SummaryWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write(
        &self,
        summaries: &[AreaSummary],
        path: &Path,
        format: OutputFormat,
    ) -> Result<()> {
        // Refuse to export summaries that fail their own invariants
        for summary in summaries {
            summary.validate()?;
        }

        match format {
            OutputFormat::Csv => self.write_csv(summaries, path),
            OutputFormat::Json => self.write_json(summaries, path),
        }
    }

    pub fn write_csv(&self, summaries: &[AreaSummary], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for summary in summaries {
            writer.serialize(summary)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_json(&self, summaries: &[AreaSummary], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, summaries)?;
        Ok(())
    }
}

impl Default for SummaryWriter {
    fn default() -> Self {
        Self::new()
    }
}
