//! User settings stored as settings.json in the app data directory

use crate::constants::*;
use crate::model::ModelConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Model
    pub model_id: String,
    pub inference_url: String,
    pub hub_url: String,
    pub token_env: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            model_id: DEFAULT_MODEL_ID.to_string(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            hub_url: DEFAULT_HUB_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Model configuration, honouring a one-run `QA_MODEL` override
    pub fn model_config(&self) -> ModelConfig {
        self.model_config_with(std::env::var(MODEL_OVERRIDE_ENV).ok())
    }

    fn model_config_with(&self, model_override: Option<String>) -> ModelConfig {
        let model_id = match model_override {
            Some(id) if !id.trim().is_empty() => {
                info!(model = %id.trim(), "Model overridden from environment");
                id.trim().to_string()
            }
            _ => self.model_id.clone(),
        };
        ModelConfig {
            model_id,
            inference_url: self.inference_url.clone(),
            hub_url: self.hub_url.clone(),
            token_env: self.token_env.clone(),
        }
    }
}
