use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use waclick_core::domain::{
    PhonePolicy, QrErrorCorrection, QrOptions, DEFAULT_COUNTRY_CODE, DEFAULT_LOCAL_LENGTH,
};
use waclick_core::form::{Timings, DEFAULT_COPIED_MS, DEFAULT_TOAST_MS};

const APP_DIR: &str = "waclick";
const CONFIG_FILENAME: &str = "config.toml";

pub const MAX_NOTIFICATION_MS: u64 = 60_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub phone: PhonePolicy,
    pub qr: QrOptions,
    pub notifications: NotificationsConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationsConfig {
    pub toast_ms: u64,
    pub copied_ms: u64,
}

impl NotificationsConfig {
    pub fn timings(&self) -> Timings {
        Timings {
            toast: Duration::from_millis(self.toast_ms),
            copied_flash: Duration::from_millis(self.copied_ms),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            phone: PhonePolicy::default(),
            qr: QrOptions::default(),
            notifications: NotificationsConfig {
                toast_ms: DEFAULT_TOAST_MS,
                copied_ms: DEFAULT_COPIED_MS,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid phone settings: {0}")]
    InvalidPhone(String),
    #[error("invalid notifications.{field} value: {value}")]
    InvalidNotificationDuration { field: &'static str, value: u64 },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    phone: Option<PhoneFile>,
    qr: Option<QrFile>,
    notifications: Option<NotificationsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhoneFile {
    country_code: Option<String>,
    local_length: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct QrFile {
    error_correction: Option<QrErrorCorrection>,
    quiet_zone: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NotificationsFile {
    toast_ms: Option<u64>,
    copied_ms: Option<u64>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(phone) = parsed.phone {
        let country_code = phone
            .country_code
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
        let local_length = phone.local_length.unwrap_or(DEFAULT_LOCAL_LENGTH);
        config.phone = PhonePolicy::new(&country_code, local_length)
            .map_err(|err| ConfigError::InvalidPhone(err.to_string()))?;
    }

    if let Some(qr) = parsed.qr {
        if let Some(level) = qr.error_correction {
            config.qr.level = level;
        }
        if let Some(quiet_zone) = qr.quiet_zone {
            config.qr.quiet_zone = quiet_zone;
        }
    }

    if let Some(notifications) = parsed.notifications {
        if let Some(value) = notifications.toast_ms {
            config.notifications.toast_ms = validate_duration("toast_ms", value)?;
        }
        if let Some(value) = notifications.copied_ms {
            config.notifications.copied_ms = validate_duration("copied_ms", value)?;
        }
    }

    Ok(config)
}

fn validate_duration(field: &'static str, value: u64) -> Result<u64> {
    if value == 0 || value > MAX_NOTIFICATION_MS {
        return Err(ConfigError::InvalidNotificationDuration { field, value });
    }
    Ok(value)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
