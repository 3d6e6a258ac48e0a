use std::path::{Path, PathBuf};

use laudo_core::models::report::SavedReport;
use laudo_core::paths;
use uuid::Uuid;

use crate::error::StorageError;
use crate::{objects, state};

/// Maximum number of reports returned by [`HistoryStore::search`].
pub const SEARCH_LIMIT: usize = 10;

/// Saved reports, one JSON document each.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    root: PathBuf,
}

impl HistoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a finished report. Reports without a patient name or without
    /// content are rejected.
    pub fn add(&self, report: &SavedReport) -> Result<Uuid, StorageError> {
        if report.patient.name.trim().is_empty() {
            return Err(StorageError::InvalidReport(
                "patient name is required".to_string(),
            ));
        }
        if report.report_html.trim().is_empty() {
            return Err(StorageError::InvalidReport("report is empty".to_string()));
        }

        state::save_state(&self.root, &paths::saved_report(report.id), report)?;
        tracing::info!(id = %report.id, "report saved to history");
        Ok(report.id)
    }

    pub fn get(&self, id: Uuid) -> Result<SavedReport, StorageError> {
        state::load_state(&self.root, &paths::saved_report(id))
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        objects::delete_object(&self.root, &paths::saved_report(id))?;
        tracing::info!(%id, "report deleted from history");
        Ok(())
    }

    /// Most recent reports whose patient name contains `name_query`,
    /// ignoring case. An empty query matches every report.
    pub fn search(&self, name_query: &str) -> Result<Vec<SavedReport>, StorageError> {
        let needle = name_query.trim().to_lowercase();

        let mut reports = Vec::new();
        for key in objects::list_objects(&self.root, paths::REPORTS_DIR)? {
            if paths::parse_saved_report(&key).is_none() {
                continue;
            }
            match state::load_state::<SavedReport>(&self.root, &key) {
                Ok(report) => reports.push(report),
                Err(StorageError::Serialization(e)) => {
                    tracing::warn!(key, error = %e, "skipping unreadable history entry");
                }
                Err(e) => return Err(e),
            }
        }

        reports.retain(|r| needle.is_empty() || r.patient.name.to_lowercase().contains(&needle));
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports.truncate(SEARCH_LIMIT);

        tracing::debug!(query = name_query, found = reports.len(), "history search");
        Ok(reports)
    }
}
