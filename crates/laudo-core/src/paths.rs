//! Layout of the local data directory.
//!
//! Pure path-fragment functions, relative to the data root chosen by the
//! caller.

use uuid::Uuid;

pub const SETTINGS: &str = "settings.json";

pub const REPORTS_DIR: &str = "reports";

pub fn saved_report(id: Uuid) -> String {
    format!("{REPORTS_DIR}/{id}.json")
}

/// Extract the report id from a `reports/{id}.json` fragment.
pub fn parse_saved_report(fragment: &str) -> Option<Uuid> {
    let name = fragment.strip_prefix(REPORTS_DIR)?.strip_prefix('/')?;
    let stem = name.strip_suffix(".json")?;
    Uuid::parse_str(stem).ok()
}
