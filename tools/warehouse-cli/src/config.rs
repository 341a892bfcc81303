//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use warehouse_observability::{LogFormat, LogLevel};

/// Config file names searched for, in order, from the working directory up.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["warehouse.toml", ".warehouse.toml", "warehouse.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehouseConfig {
    /// Store file settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Login gate for the interactive shell.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl WarehouseConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check the config for mistakes. Returns (errors, warnings).
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.store.path.as_os_str().is_empty() {
            errors.push("store.path is required".to_string());
        }

        if self.logging.level.parse::<LogLevel>().is_err() {
            errors.push(format!("logging.level '{}' is not a log level", self.logging.level));
        }

        if self.auth.enabled && self.auth.users.is_empty() && self.auth.users_file.is_none() {
            errors.push("auth is enabled but no users or users_file are configured".to_string());
        }

        for (i, user) in self.auth.users.iter().enumerate() {
            if user.username.is_empty() {
                errors.push(format!("auth.users[{}].username is empty", i));
            }
        }

        if !self.auth.enabled && !self.auth.users.is_empty() {
            warnings.push("auth.users are configured but auth.enabled is false".to_string());
        }

        (errors, warnings)
    }
}

/// Store file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file, relative to the config file's directory.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// Start from an empty warehouse when the store file is missing.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("products.txt")
}

fn default_true() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            create_if_missing: true,
        }
    }
}

/// Login gate settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Require a login before the interactive shell starts.
    #[serde(default)]
    pub enabled: bool,

    /// File of `username, password` lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_file: Option<PathBuf>,

    /// Users defined inline.
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

/// A username and password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `human` or `json`.
    #[serde(default)]
    pub format: LogFormat,

    /// Minimum level written to stderr.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Human,
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Configured level, falling back to `Warn` when it does not parse.
    pub fn min_level(&self) -> LogLevel {
        self.level.parse().unwrap_or(LogLevel::Warn)
    }
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Warn after an analysis when products sit below the category average.
    #[serde(default = "default_true")]
    pub low_stock_alerts: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_stock_alerts: true,
        }
    }
}

/// Generate a default warehouse.toml config file.
pub fn generate_default_config() -> String {
    r#"# Warehouse inventory configuration

[store]
# Delimited text file: one category name per line, or id,name,quantity,category
path = "products.txt"
create_if_missing = true

[auth]
# Require a login before `warehouse shell` starts.
enabled = false
# users_file = "users.txt"

# [[auth.users]]
# username = "admin"
# password = "change-me"

[logging]
format = "human"
level = "warn"

[report]
low_stock_alerts = true
"#
    .to_string()
}
