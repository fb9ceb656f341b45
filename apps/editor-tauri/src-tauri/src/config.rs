//! Editor shell configuration.
//!
//! A single JSON file under the platform config dir:
//! `astra-editor/config.json`. Missing or corrupt files fall back to
//! defaults so the editor always starts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Cloud configuration endpoints, overridable per installation
/// (staging environments, on-premise gateways).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_core")]
    pub core: String,
    #[serde(default = "default_collab")]
    pub collab: String,
    #[serde(default = "default_webauth")]
    pub webauth: String,
    #[serde(default = "default_login")]
    pub login: String,
    #[serde(default = "default_identity")]
    pub identity: String,
    #[serde(default = "default_portal")]
    pub portal: String,
}

fn default_core() -> String {
    "https://core.cloud.astra-engine.dev".into()
}

fn default_collab() -> String {
    "https://collab.cloud.astra-engine.dev".into()
}

fn default_webauth() -> String {
    "https://webauth.cloud.astra-engine.dev".into()
}

fn default_login() -> String {
    "https://login.cloud.astra-engine.dev".into()
}

fn default_identity() -> String {
    "https://id.cloud.astra-engine.dev".into()
}

fn default_portal() -> String {
    "https://portal.cloud.astra-engine.dev".into()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            core: default_core(),
            collab: default_collab(),
            webauth: default_webauth(),
            login: default_login(),
            identity: default_identity(),
            portal: default_portal(),
        }
    }
}

/// Editor shell configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Display name of this editor installation.
    #[serde(default = "default_editor_name")]
    pub editor_name: String,

    /// Cloud endpoint overrides.
    #[serde(default)]
    pub endpoints: Endpoints,
}

fn default_editor_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "Astra Editor".into())
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            editor_name: default_editor_name(),
            endpoints: Endpoints::default(),
        }
    }
}

impl EditorConfig {
    /// Loads configuration, falling back to defaults for a missing or
    /// unparseable file.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<EditorConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse editor config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Writes the configuration back to disk, creating parent dirs.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        tracing::debug!("configuration saved");
        Ok(())
    }
}

/// Returns the access-token store path: `astra-editor/tokens.json`.
pub fn token_store_path() -> Option<PathBuf> {
    config_base_dir().ok().map(|d| d.join("astra-editor").join("tokens.json"))
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_base_dir()?.join("astra-editor").join("config.json"))
}

fn config_base_dir() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home).join(".config"))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        Ok(PathBuf::from(appdata))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home)
            .join("Library")
            .join("Application Support"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoints_are_production() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.core, "https://core.cloud.astra-engine.dev");
        assert_eq!(endpoints.portal, "https://portal.cloud.astra-engine.dev");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{"endpoints": {"core": "https://core.staging.test"}}"#)
                .unwrap();
        assert_eq!(config.endpoints.core, "https://core.staging.test");
        // Everything not mentioned falls back to defaults.
        assert_eq!(config.endpoints.login, "https://login.cloud.astra-engine.dev");
        assert!(!config.editor_name.is_empty());
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = EditorConfig::default();
        config.editor_name = "Workstation 12".into();
        config.endpoints.identity = "https://id.staging.test".into();

        let json = serde_json::to_string(&config).unwrap();
        let back: EditorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.editor_name, "Workstation 12");
        assert_eq!(back.endpoints.identity, "https://id.staging.test");
    }

    #[test]
    fn token_store_path_ends_with_expected_file() {
        let path = token_store_path().unwrap();
        assert!(path.ends_with("astra-editor/tokens.json"));
    }
}
