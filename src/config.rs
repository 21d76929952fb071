//! Application-level configuration loading, including the oracle endpoint
//! and the canned fallback tips served when the oracle is unreachable.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use indexmap::IndexMap;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::{info, warn};

use crate::state::session::GameMode;

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "BULLSEYE_BACK_CONFIG_PATH";
/// Environment variable carrying the generative-text API key. When unset the
/// oracle is disabled and fallback tips serve immediately.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_ORACLE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_ORACLE_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 8_000;

/// Tip of last resort when a mode has no configured fallback list.
const DEFAULT_TIP: &str = "Stay focused on the target.";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    oracle_base_url: String,
    oracle_model: String,
    oracle_timeout: Duration,
    api_key: Option<String>,
    fallback_tips: IndexMap<String, Vec<String>>,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to
    /// baked-in defaults when the file is missing or malformed.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    Self::from(raw)
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        config.with_api_key_from_env()
    }

    /// Base URL of the generative-text endpoint.
    pub fn oracle_base_url(&self) -> &str {
        &self.oracle_base_url
    }

    /// Model name appended to the endpoint path.
    pub fn oracle_model(&self) -> &str {
        &self.oracle_model
    }

    /// Upper bound on a single oracle request.
    pub fn oracle_timeout(&self) -> Duration {
        self.oracle_timeout
    }

    /// API key for the oracle, if one was provided via the environment.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Pick a canned tip for `mode` from the configured fallback list.
    pub fn fallback_tip(&self, mode: GameMode) -> String {
        self.fallback_tips
            .get(mode.key())
            .and_then(|tips| tips.choose(&mut rand::rng()))
            .cloned()
            .unwrap_or_else(|| DEFAULT_TIP.to_string())
    }

    fn with_api_key_from_env(mut self) -> Self {
        self.api_key = env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty());
        if self.api_key.is_none() {
            info!("no oracle API key configured; advisory text will use fallbacks");
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            oracle_base_url: DEFAULT_ORACLE_BASE_URL.to_string(),
            oracle_model: DEFAULT_ORACLE_MODEL.to_string(),
            oracle_timeout: Duration::from_millis(DEFAULT_ORACLE_TIMEOUT_MS),
            api_key: None,
            fallback_tips: default_fallback_tips(),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at
/// [`DEFAULT_CONFIG_PATH`]. Every field is optional; absent fields keep
/// their built-in defaults.
struct RawConfig {
    oracle_base_url: Option<String>,
    oracle_model: Option<String>,
    oracle_timeout_ms: Option<u64>,
    fallback_tips: Option<IndexMap<String, Vec<String>>>,
}

impl From<RawConfig> for AppConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = Self::default();
        Self {
            oracle_base_url: raw.oracle_base_url.unwrap_or(defaults.oracle_base_url),
            oracle_model: raw.oracle_model.unwrap_or(defaults.oracle_model),
            oracle_timeout: raw
                .oracle_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.oracle_timeout),
            api_key: None,
            fallback_tips: raw.fallback_tips.unwrap_or(defaults.fallback_tips),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in fallback tips shipped with the binary, keyed by mode.
fn default_fallback_tips() -> IndexMap<String, Vec<String>> {
    IndexMap::from([
        (
            GameMode::Countdown.key().to_string(),
            vec![
                "Consistency is key. Keep your elbow up!".to_string(),
                "Group on the treble twenty and leave yourself an even finish.".to_string(),
            ],
        ),
        (
            GameMode::Gauntlet.key().to_string(),
            vec![
                "Visualize the dart hitting the target.".to_string(),
                "Treat every double like it is for the match.".to_string(),
            ],
        ),
        (
            GameMode::AroundTheClock.key().to_string(),
            vec![
                "Stay focused on the target.".to_string(),
                "Find a rhythm and let the board guide your eye clockwise.".to_string(),
            ],
        ),
    ])
}
