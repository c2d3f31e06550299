//! Runtime configuration, read once at startup from the environment.

use crate::composer::ComposerConfig;
use crate::sidebar::DEFAULT_BREAKPOINT_PX;
use once_cell::sync::OnceCell;
use std::str::FromStr;
use tracing::warn;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const API_BASE_VAR: &str = "INTELIQ_API_BASE";
pub const SIDEBAR_BREAKPOINT_VAR: &str = "INTELIQ_SIDEBAR_BREAKPOINT";
pub const COMPOSER_MAX_HEIGHT_VAR: &str = "INTELIQ_COMPOSER_MAX_HEIGHT";
pub const LOG_VAR: &str = "INTELIQ_LOG";

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_LOG_FILTER: &str = "info";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("{key} must be at least {min}, got {value}")]
    TooSmall {
        key: &'static str,
        value: u32,
        min: u32,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub sidebar_breakpoint_px: u32,
    pub composer: ComposerConfig,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            sidebar_breakpoint_px: DEFAULT_BREAKPOINT_PX,
            composer: ComposerConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing keys keep defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = lookup(API_BASE_VAR).filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(value) = lookup(SIDEBAR_BREAKPOINT_VAR) {
            config.sidebar_breakpoint_px = parse_number(SIDEBAR_BREAKPOINT_VAR, &value)?;
        }
        if let Some(value) = lookup(COMPOSER_MAX_HEIGHT_VAR) {
            let max: u32 = parse_number(COMPOSER_MAX_HEIGHT_VAR, &value)?;
            if max < config.composer.min_height_px {
                return Err(ConfigError::TooSmall {
                    key: COMPOSER_MAX_HEIGHT_VAR,
                    value: max,
                    min: config.composer.min_height_px,
                });
            }
            config.composer.max_height_px = max;
        }
        if let Some(filter) = lookup(LOG_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }
        Ok(config)
    }
}

fn parse_number<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

/// Makes `config` the process-wide configuration. Only the first call wins.
pub fn install(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

/// The installed configuration, reading the environment on first use if
/// nothing was installed.
pub fn current() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        AppConfig::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "invalid configuration, using defaults");
            AppConfig::default()
        })
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: called from main before the runtime or any threads start
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> Vec<(String, String)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
