//! CSV decision-table importer.
//!
//! Layout:
//!
//! ```text
//! Laptop,Price,Performance,Battery
//! Alpha,1000,8,4
//! Beta,800,6,5
//! ```
//!
//! The first header cell labels the alternatives column and is otherwise
//! ignored. Cells are trimmed before parsing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::foundation::Matrix;
use crate::ports::{DecisionMatrixImporter, ImportError, ImportedTable};

/// Reads decision tables from comma-separated text.
#[derive(Debug, Clone, Default)]
pub struct CsvDecisionMatrixImporter;

impl CsvDecisionMatrixImporter {
    pub fn new() -> Self {
        Self
    }

    /// Reads a table from a file on disk.
    pub fn import_path(&self, path: &Path) -> Result<ImportedTable, ImportError> {
        let file = File::open(path).map_err(|err| {
            ImportError::Malformed(format!("cannot open {}: {}", path.display(), err))
        })?;
        parse_table(file)
    }
}

impl DecisionMatrixImporter for CsvDecisionMatrixImporter {
    fn import(&self, source: &[u8]) -> Result<ImportedTable, ImportError> {
        parse_table(source)
    }
}

fn malformed(err: csv::Error) -> ImportError {
    ImportError::Malformed(err.to_string())
}

fn parse_table<R: Read>(reader: R) -> Result<ImportedTable, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(malformed)?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(ImportError::Empty);
    }

    let criteria_from_file: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    if criteria_from_file.is_empty() {
        return Err(ImportError::NoCriteria);
    }

    let expected = headers.len();
    let mut alternatives = Vec::new();
    let mut rows = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(malformed)?;
        let row = index + 1;

        if record.len() != expected {
            return Err(ImportError::RowLength {
                row,
                expected,
                actual: record.len(),
            });
        }

        let values = record
            .iter()
            .skip(1)
            .zip(&criteria_from_file)
            .map(|(cell, column)| {
                cell.parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| ImportError::NotANumber {
                        row,
                        column: column.clone(),
                        value: cell.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        alternatives.push(record.get(0).unwrap_or_default().to_string());
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }

    let decision_matrix =
        Matrix::from_rows(rows).map_err(|err| ImportError::Malformed(err.to_string()))?;

    Ok(ImportedTable {
        alternatives,
        criteria_from_file,
        decision_matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LAPTOPS: &str = "Laptop,Price,Performance,Battery\n\
                           Alpha,1000,8,4\n\
                           Beta,800,6,5\n\
                           Gamma,1200,10,3\n";

    #[test]
    fn reads_alternatives_criteria_and_values() {
        let table = CsvDecisionMatrixImporter::new()
            .import(LAPTOPS.as_bytes())
            .unwrap();

        assert_eq!(table.alternatives, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(table.criteria_from_file, vec!["Price", "Performance", "Battery"]);
        assert_eq!(table.decision_matrix.shape(), (3, 3));
        assert_eq!(table.decision_matrix.row(1), &[800.0, 6.0, 5.0]);
    }

    #[test]
    fn cells_are_trimmed() {
        let table = CsvDecisionMatrixImporter::new()
            .import(b"Name , Price\n  A , 12.5 \n")
            .unwrap();

        assert_eq!(table.alternatives, vec!["A"]);
        assert_eq!(table.criteria_from_file, vec!["Price"]);
        assert_eq!(table.decision_matrix.get(0, 0), 12.5);
    }

    #[test]
    fn header_without_rows_is_empty() {
        let err = CsvDecisionMatrixImporter::new()
            .import(b"Name,Price\n")
            .unwrap_err();
        assert_eq!(err, ImportError::Empty);
    }

    #[test]
    fn single_column_has_no_criteria() {
        let err = CsvDecisionMatrixImporter::new()
            .import(b"Name\nA\n")
            .unwrap_err();
        assert_eq!(err, ImportError::NoCriteria);
    }

    #[test]
    fn short_row_is_reported() {
        let err = CsvDecisionMatrixImporter::new()
            .import(b"Name,Price,Speed\nA,1,2\nB,3\n")
            .unwrap_err();
        assert_eq!(
            err,
            ImportError::RowLength {
                row: 2,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn non_numeric_cell_is_reported() {
        let err = CsvDecisionMatrixImporter::new()
            .import(b"Name,Price\nA,cheap\n")
            .unwrap_err();
        assert_eq!(
            err,
            ImportError::NotANumber {
                row: 1,
                column: "Price".to_string(),
                value: "cheap".to_string()
            }
        );
    }

    #[test]
    fn non_finite_cells_are_not_numbers() {
        let importer = CsvDecisionMatrixImporter::new();

        for cell in ["NaN", "inf", "-infinity"] {
            let csv = format!("Name,Price\nA,{}\n", cell);
            let err = importer.import(csv.as_bytes()).unwrap_err();
            assert_eq!(
                err,
                ImportError::NotANumber {
                    row: 1,
                    column: "Price".to_string(),
                    value: cell.to_string()
                }
            );
        }
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LAPTOPS.as_bytes()).unwrap();

        let table = CsvDecisionMatrixImporter::new()
            .import_path(file.path())
            .unwrap();
        assert_eq!(table.alternatives.len(), 3);
    }

    #[test]
    fn missing_file_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvDecisionMatrixImporter::new()
            .import_path(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
    }
}
