// src/config/mod.rs
mod loader;
mod schema;

use std::path::Path;

pub use loader::{load_config, get_default_config_path};
pub use schema::{
    Config, GlobalConfig, BreachApiConfig, DumpSearchConfig,
    DEFAULT_BREACH_API, DEFAULT_DUMP_SEARCH,
};

use crate::error::PwnFinderResult;

impl Config {
    /// Load configuration from a file, the default location, and the environment
    pub fn load(config_path: Option<&Path>) -> PwnFinderResult<Self> {
        load_config(config_path)
    }
}
