use std::path::{Path, PathBuf};
use std::time::Duration;

use laudo_drafting::gemini::{DEFAULT_MODEL, GeminiConfig};
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DATA_DIR_ENV: &str = "LAUDO_DATA_DIR";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaudoConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub gemini: GeminiSettings,
    /// Where settings and saved reports live. Defaults to the platform
    /// data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub config_path: String,
    pub data_dir: String,
    pub model: String,
    pub timeout_secs: u64,
    pub api_key_hint: Option<String>,
}

impl LaudoConfig {
    /// Apply `GEMINI_API_KEY` and `LAUDO_DATA_DIR` from the environment.
    pub fn with_env_overrides(self) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        let data_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        self.with_overrides(api_key, data_dir)
    }

    /// Non-empty overrides replace the stored values.
    pub fn with_overrides(mut self, api_key: Option<String>, data_dir: Option<PathBuf>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.gemini.api_key = key;
        }
        if let Some(dir) = data_dir.filter(|d| !d.as_os_str().is_empty()) {
            self.data_dir = Some(dir);
        }
        self
    }

    pub fn data_dir(&self) -> eyre::Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(base.join("laudo"))
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        let mut config = GeminiConfig::new(self.gemini.api_key.clone());
        if !self.gemini.model.trim().is_empty() {
            config.model = self.gemini.model.clone();
        }
        config.timeout = Duration::from_secs(self.gemini.timeout_secs);
        config
    }
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("laudo"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// The stored config with environment overrides applied. A missing file
/// yields the defaults.
pub fn load_config() -> eyre::Result<LaudoConfig> {
    Ok(load_config_from(&config_path()?)?.with_env_overrides())
}

pub fn load_config_from(path: &Path) -> eyre::Result<LaudoConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(LaudoConfig::default());
        }
        Err(e) => return Err(eyre::eyre!("failed to read config at {}: {e}", path.display())),
    };

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v).map_err(|_| {
            eyre::eyre!("config_version {v} in {} is out of range", path.display())
        })?,
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: LaudoConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update laudo."
        ));
    }

    // v0 → v1: top-level api_key/model move under "gemini"
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let mut gemini = serde_json::Map::new();
        for key in ["api_key", "model"] {
            if let Some(value) = obj.remove(key) {
                gemini.insert(key.to_string(), value);
            }
        }
        obj.entry("gemini")
            .or_insert(serde_json::Value::Object(gemini));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested gemini settings)");
    }

    Ok(json)
}

pub fn save_config(config: &LaudoConfig) -> eyre::Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &LaudoConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent directory"))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &LaudoConfig, path: &Path) -> ConfigInfo {
    let api_key = config.gemini.api_key.trim();
    ConfigInfo {
        config_path: path.display().to_string(),
        data_dir: config
            .data_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_default(),
        model: config.gemini.model.clone(),
        timeout_secs: config.gemini.timeout_secs,
        api_key_hint: (!api_key.is_empty()).then(|| redact_api_key(api_key)),
    }
}

pub fn redact_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{prefix}...{suffix}")
}
