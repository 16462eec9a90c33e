//! Decision-table importers.

mod csv_importer;

pub use csv_importer::CsvDecisionMatrixImporter;
