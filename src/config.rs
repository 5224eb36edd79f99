use anyhow::Result;
use std::path::PathBuf;

/// Runtime configuration for the console.
///
/// The remote base URL differs between deployments, so it is always read from
/// the environment instead of being compiled into call sites.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::api_base_url_from_env(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default()
    }

    fn api_base_url_from_env() -> String {
        std::env::var("SHOPFLOOR_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string())
    }

    /// Directory for client-local persisted state (the session identity).
    pub fn data_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("shopfloor"))
    }
}
