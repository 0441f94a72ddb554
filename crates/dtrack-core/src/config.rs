//! Configuration types for dtrack.
//!
//! [`Config::load`] layers, lowest first: the embedded defaults, the config
//! file (`$XDG_CONFIG_HOME/dtrack/config.toml` unless a path is given), then
//! `DTRACK__<SECTION>__<KEY>` environment variables. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[carrier]
url          = "https://www.dtdc.com/wp-json/custom/v1/domestic/track"
timeout_secs = 15
origin       = "https://www.dtdc.com"
referer      = "https://www.dtdc.com/track-your-shipment/"
platform     = '"macOS"'
user_agent   = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36"

[audit]
path = "dtdc_log.jsonl"

[lookup]
strict       = false
recent_limit = 10

[server]
bind = "127.0.0.1:8080"
"#;

const ENV_PREFIX: &str = "DTRACK";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub carrier: CarrierConfig,
    pub audit: AuditConfig,
    pub lookup: LookupConfig,
    pub server: ServerConfig,
}

/// `[carrier]` — where and how the tracking endpoint is called.
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierConfig {
    pub url: String,
    pub timeout_secs: u64,
    pub origin: String,
    pub referer: String,
    /// Sent verbatim as `Sec-Ch-Ua-Platform`, quotes included.
    pub platform: String,
    pub user_agent: String,
}

impl CarrierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[audit]` — location of the JSONL interaction log.
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    pub path: PathBuf,
}

/// `[lookup]` — tracking identifier handling.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupConfig {
    /// Reject identifiers that are not 8–20 ASCII alphanumerics.
    pub strict: bool,
    /// Default size of the recent-searches list.
    pub recent_limit: i64,
}

/// `[server]` — HTTP facade.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `path` (or the default location), layered on top of the
    /// built-in defaults. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("dtrack")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
