//! Card configuration as handed over by the host dashboard.
//!
//! A list card is configured with the entity it renders and an optional
//! title override; the dashboard card optionally restricts which list
//! entities it shows. A missing or malformed `entity` is the one hard
//! configuration error in the crate — a card cannot render without knowing
//! its entity.

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

static ENTITY_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^todo\.[a-z0-9_]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("card config must define an entity")]
    MissingEntity,
    #[error("not a to-do entity id: {0}")]
    InvalidEntityId(String),
}

/// Per-list card configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardConfig {
    pub entity: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl CardConfig {
    /// Decode and validate a raw card config object.
    pub fn from_value(raw: &Value) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_value(raw.clone()).map_err(|_| ConfigError::MissingEntity)?;
        if !ENTITY_ID_RE.is_match(&config.entity) {
            return Err(ConfigError::InvalidEntityId(config.entity));
        }
        Ok(config)
    }

    /// Card title: the configured override, the entity's friendly name, or a
    /// stock fallback.
    pub fn display_title(&self, friendly_name: Option<&str>) -> String {
        self.title
            .clone()
            .or_else(|| friendly_name.map(String::from))
            .unwrap_or_else(|| "Hearth To-Do".to_string())
    }
}

/// Dashboard card configuration. With no allow-list the dashboard shows
/// every to-do entity the host exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub entities: Option<Vec<String>>,
    #[serde(default)]
    pub title: Option<String>,
}

impl DashboardConfig {
    /// Decode a raw dashboard config; everything is optional, so malformed
    /// input degrades to the defaults.
    pub fn from_value(raw: &Value) -> Self {
        serde_json::from_value(raw.clone()).unwrap_or_default()
    }

    /// Whether an entity belongs on this dashboard.
    pub fn includes(&self, entity_id: &str) -> bool {
        match &self.entities {
            Some(list) => list.iter().any(|e| e == entity_id),
            None => true,
        }
    }
}
