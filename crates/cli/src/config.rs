use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/sotien.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level for the `sotien` and `engine` targets.
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Loads the optional config file, then the `SOTIEN_*` environment.
pub fn load(path: Option<&str>) -> Result<AppConfig> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    let settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("SOTIEN"))
        .build()?
        .try_deserialize()?;
    Ok(settings)
}
