//! TOML configuration parsing and validation.
//!
//! ```toml
//! [db]
//! path = "./data/chatbot.sqlite"
//!
//! [server]
//! bind = "127.0.0.1:7340"
//!
//! [logging]
//! level = "info"
//!
//! [intent.extra_phrases]
//! dark_mode = ["giao diện đen"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use chatbot_admin_core::intent::{normalize, Intent, IntentRouter};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub intent: IntentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Router customization.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct IntentConfig {
    /// Extra phrases keyed by intent label, appended to the built-in rules.
    #[serde(default)]
    pub extra_phrases: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Build the intent router: built-in rules plus `[intent.extra_phrases]`.
    pub fn intent_router(&self) -> Result<IntentRouter> {
        let mut router = IntentRouter::new();
        for (label, phrases) in &self.intent.extra_phrases {
            let intent: Intent = label.parse()?;
            router
                .extend_phrases(intent, phrases)
                .with_context(|| format!("intent.extra_phrases.{}", label))?;
        }
        Ok(router)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.db.path.as_os_str().is_empty() {
        anyhow::bail!("db.path must not be empty");
    }

    EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("logging.level is invalid: '{}'", config.logging.level))?;

    for (label, phrases) in &config.intent.extra_phrases {
        let intent: Intent = label
            .parse()
            .with_context(|| format!("intent.extra_phrases has an invalid key '{}'", label))?;
        if intent == Intent::Unknown {
            anyhow::bail!("intent.extra_phrases cannot add phrases to 'unknown'");
        }
        if let Some(bad) = phrases.iter().find(|p| normalize(p).is_empty()) {
            anyhow::bail!(
                "intent.extra_phrases.{} contains a phrase with no letters or digits: {:?}",
                label,
                bad
            );
        }
    }

    Ok(())
}
