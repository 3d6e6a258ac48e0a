use std::path::{Path, PathBuf};

use laudo_core::models::settings::ClinicSettings;
use laudo_core::paths;

use crate::error::StorageError;
use crate::state;

/// The clinic letterhead, stored as a single JSON document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    root: PathBuf,
}

impl SettingsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stored settings, or defaults when none have been saved.
    pub fn load(&self) -> Result<ClinicSettings, StorageError> {
        let settings = state::load_state_opt(&self.root, paths::SETTINGS)?;
        Ok(settings.unwrap_or_default())
    }

    pub fn save(&self, settings: &ClinicSettings) -> Result<(), StorageError> {
        state::save_state(&self.root, paths::SETTINGS, settings)?;
        tracing::info!(clinic = %settings.clinic_name, "clinic settings saved");
        Ok(())
    }
}
