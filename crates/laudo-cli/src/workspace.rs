use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use laudo_core::models::settings::ClinicSettings;
use laudo_export::logo;
use laudo_storage::{HistoryStore, SettingsStore};

/// The data directory: clinic settings plus the report history.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    pub settings: SettingsStore,
    pub history: HistoryStore,
}

impl Workspace {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            settings: SettingsStore::new(&root),
            history: HistoryStore::new(&root),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Changes to the clinic letterhead. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub clinic_name: Option<String>,
    pub clinic_address: Option<String>,
    pub clinic_phone: Option<String>,
    pub logo_file: Option<PathBuf>,
    pub clear_logo: bool,
}

pub fn apply_settings_update(
    mut settings: ClinicSettings,
    update: SettingsUpdate,
) -> Result<ClinicSettings> {
    if let Some(name) = update.clinic_name {
        settings.clinic_name = name;
    }
    if let Some(address) = update.clinic_address {
        settings.clinic_address = address;
    }
    if let Some(phone) = update.clinic_phone {
        settings.clinic_phone = phone;
    }
    if update.clear_logo {
        settings.logo.clear();
    }
    if let Some(path) = update.logo_file {
        settings.logo = read_logo(&path)?;
    }
    Ok(settings)
}

fn read_logo(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let mime = logo::mime_for_extension(ext)
        .ok_or_else(|| eyre::eyre!("unsupported logo file {}", path.display()))?;
    let bytes = std::fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok(logo::to_data_url(mime, &bytes)?)
}
