use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::debug;

use super::schema::{Config, default_user_agent};
use crate::error::{PwnFinderError, PwnFinderResult};

/// Load configuration: built-in defaults, then a file, then `PWNFINDER_*` env vars
pub fn load_config(config_path: Option<&Path>) -> PwnFinderResult<Config> {
    let mut config_builder = ConfigLoader::builder()
        .set_default("global.user_agent", default_user_agent())?;

    // Default configuration
    config_builder = config_builder.add_source(
        config::File::from_str(
            include_str!("../../config/default.toml"),
            FileFormat::Toml
        )
    );

    // User-provided configuration
    if let Some(path) = config_path {
        if !path.exists() {
            return Err(PwnFinderError::FileError {
                path: path.to_path_buf(),
                message: "Specified configuration file not found".to_string(),
            });
        }
        debug!("Loading user configuration from: {}", path.display());
        config_builder = config_builder.add_source(config::File::from(path));
    } else if let Some(default_path) = get_default_config_path() {
        if default_path.exists() {
            debug!("Loading configuration from: {}", default_path.display());
            config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
        }
    }

    // Environment variables, e.g. PWNFINDER_GLOBAL__USER_AGENT
    config_builder = config_builder.add_source(
        config::Environment::with_prefix("PWNFINDER")
            .prefix_separator("_")
            .separator("__")
    );

    let config: Config = config_builder
        .build()?
        .try_deserialize()
        .map_err(|e| PwnFinderError::ConfigError(format!("Failed to load configuration: {}", e)))?;

    Ok(config)
}

/// Get the default configuration path
pub fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pwnfinder").join("config.toml"))
}
