use std::fs::File;
use std::io::Read;
use std::path::Path;

use memmap2::Mmap;

use crate::error::{ProcessingError, Result};
use crate::models::EmissionRecord;
use crate::utils::constants::DEFAULT_BUFFER_SIZE;

/// Reads the survey CSV into typed rows.
///
/// Retrieval and parsing fail separately: a document that cannot be fetched
/// as UTF-8 text is a `Retrieval` error, while structurally malformed CSV is
/// a fail-fast `Csv` error carrying the parser diagnostic. Parsing is
/// all-or-nothing; no partial row set is returned on error.
pub struct EmissionReader {
    use_mmap: bool,
}

impl EmissionReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    /// Memory-map the source file instead of buffered reads. Useful for
    /// multi-hundred-megabyte survey exports.
    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Fetch the whole document as UTF-8 text.
    pub fn load_text(&self, path: &Path) -> Result<String> {
        if self.use_mmap {
            self.load_text_mmap(path)
        } else {
            self.load_text_buffered(path)
        }
    }

    fn load_text_buffered(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .map_err(|e| ProcessingError::Retrieval(format!("{}: {}", path.display(), e)))?;

        let mut text = String::with_capacity(DEFAULT_BUFFER_SIZE);
        let mut reader = std::io::BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        reader
            .read_to_string(&mut text)
            .map_err(|e| ProcessingError::Retrieval(format!("{}: {}", path.display(), e)))?;

        Ok(text)
    }

    fn load_text_mmap(&self, path: &Path) -> Result<String> {
        let file = File::open(path)
            .map_err(|e| ProcessingError::Retrieval(format!("{}: {}", path.display(), e)))?;
        let mmap = unsafe { Mmap::map(&file) }
            .map_err(|e| ProcessingError::Retrieval(format!("{}: {}", path.display(), e)))?;

        let text = std::str::from_utf8(&mmap).map_err(|e| {
            ProcessingError::Retrieval(format!("{}: not valid UTF-8: {}", path.display(), e))
        })?;

        Ok(text.to_string())
    }

    /// Decode CSV text into rows using the header line for field access.
    /// Blank lines are skipped; ragged rows abort the whole decode.
    pub fn read_records(&self, text: &str) -> Result<Vec<EmissionRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: EmissionRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Retrieve and decode in one call.
    pub fn read_records_from_path(&self, path: &Path) -> Result<Vec<EmissionRecord>> {
        let text = self.load_text(path)?;
        self.read_records(&text)
    }
}

impl Default for EmissionReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
area,city,country,area_type_raw,total_co2,area_total_emission
Andheri,Mumbai,India,Residential,150,10000
Worli,Mumbai,India,Commercial,90,5000
";

    #[test]
    fn test_read_records() {
        let reader = EmissionReader::new();
        let records = reader.read_records(SAMPLE).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].area, "Andheri");
        assert_eq!(records[0].total_co2, "150");
        assert_eq!(records[1].area_total_emission, "5000");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "area,total_co2\nAndheri,150\n\n\nWorli,90\n";
        let reader = EmissionReader::new();
        let records = reader.read_records(text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].area, "Worli");
    }

    #[test]
    fn test_missing_columns_default_to_empty() {
        let text = "area,total_co2\nAndheri,150\n";
        let reader = EmissionReader::new();
        let records = reader.read_records(text).unwrap();

        assert_eq!(records[0].city, "");
        assert_eq!(records[0].area_total_emission, "");
        assert_eq!(records[0].area_emission(), 0.0);
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let text = "area,city,total_co2\nAndheri,Mumbai,150\nWorli,90\n";
        let reader = EmissionReader::new();
        let result = reader.read_records(text);

        assert!(matches!(result, Err(ProcessingError::Csv(_))));
    }

    #[test]
    fn test_missing_file_is_retrieval_error() {
        let reader = EmissionReader::new();
        let result = reader.load_text(Path::new("does/not/exist.csv"));

        assert!(matches!(result, Err(ProcessingError::Retrieval(_))));
    }

    #[test]
    fn test_read_records_from_path() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}", SAMPLE)?;

        let reader = EmissionReader::new();
        let records = reader.read_records_from_path(temp_file.path())?;
        assert_eq!(records.len(), 2);

        let mmap_reader = EmissionReader::with_mmap(true);
        let records = mmap_reader.read_records_from_path(temp_file.path())?;
        assert_eq!(records.len(), 2);

        Ok(())
    }
}
