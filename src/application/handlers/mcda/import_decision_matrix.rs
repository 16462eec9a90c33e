//! ImportDecisionMatrixHandler - Reads an uploaded table into SAW inputs.

use std::sync::Arc;

use tracing::debug;

use crate::ports::{DecisionMatrixImporter, ImportError, ImportedTable};

/// Handler for decision-table uploads.
///
/// The table is only parsed; weights and criterion types are supplied later
/// with the SAW calculation itself.
pub struct ImportDecisionMatrixHandler {
    importer: Arc<dyn DecisionMatrixImporter>,
}

impl ImportDecisionMatrixHandler {
    pub fn new(importer: Arc<dyn DecisionMatrixImporter>) -> Self {
        Self { importer }
    }

    pub fn handle(&self, upload: &[u8]) -> Result<ImportedTable, ImportError> {
        if upload.iter().all(u8::is_ascii_whitespace) {
            return Err(ImportError::Empty);
        }

        let table = self.importer.import(upload)?;
        debug!(
            alternatives = table.alternatives.len(),
            criteria = table.criteria_from_file.len(),
            "Decision table imported"
        );

        Ok(table)
    }
}
