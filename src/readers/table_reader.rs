use crate::error::{DashboardError, Result};
use crate::models::Table;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub struct TableReader;

impl TableReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a headed CSV file into a [`Table`].
    pub fn read_table(&self, path: &Path) -> Result<Table> {
        let file = std::fs::File::open(path)?;
        let table = self.read_from(file)?;
        debug!(
            path = %path.display(),
            rows = table.len(),
            columns = table.column_count(),
            "Read table"
        );
        Ok(table)
    }

    pub fn read_from<R: Read>(&self, input: R) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(input);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if columns.iter().all(|c| c.is_empty()) {
            return Err(DashboardError::InvalidFormat(
                "CSV input has no header row".to_string(),
            ));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table::new(columns, rows))
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_stations_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "name,lat,long,nbBikes")?;
        writeln!(temp_file, "River Street , 51.5291, -0.1099, 12")?;
        writeln!(temp_file, "Phillimore Gardens, 51.4996, -0.1975, 4")?;

        let table = TableReader::new().read_table(temp_file.path())?;

        assert_eq!(table.columns(), &["name", "lat", "long", "nbBikes"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, "name"), Some("River Street"));
        assert_eq!(table.cell(1, "nbBikes"), Some("4"));
        Ok(())
    }

    #[test]
    fn test_ragged_rows_are_tolerated() -> Result<()> {
        let input = "a,b,c\n1,2\n3,4,5,6\n";
        let table = TableReader::new().read_from(input.as_bytes())?;
        assert_eq!(table.rows()[0], vec!["1", "2", ""]);
        assert_eq!(table.rows()[1], vec!["3", "4", "5"]);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TableReader::new().read_table(Path::new("/nonexistent/cycle_stations.csv"));
        assert!(matches!(result, Err(DashboardError::Io(_))));
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = TableReader::new().read_from("".as_bytes());
        assert!(matches!(result, Err(DashboardError::InvalidFormat(_))));
    }
}
