use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Letterhead printed above every report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClinicSettings {
    pub clinic_name: String,
    pub clinic_address: String,
    pub clinic_phone: String,
    /// `data:image/...;base64,` URL, empty when no logo is configured.
    pub logo: String,
}

impl ClinicSettings {
    pub fn has_logo(&self) -> bool {
        !self.logo.trim().is_empty()
    }
}
