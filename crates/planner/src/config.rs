use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use super::error::Error;

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub total_sites: u32,
    pub extra_links: usize,
    pub min_distance: f64,
    pub max_distance: f64,
    /// Fixed seed reproduces the same network; omit for an OS seed.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub generator: GeneratorConfig,
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    let config_file_path: PathBuf = base_path
        .join("crates")
        .join("planner")
        .join("Config.toml");

    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ::config::Config::builder()
        .add_source(::config::File::from(config_file_path.as_path()).required(true))
        .add_source(
            ::config::Environment::with_prefix("PLANNER")
                .try_parsing(true)
                .separator("_"),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
