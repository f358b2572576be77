use serde::{Serialize, Deserialize};

pub const DEFAULT_BREACH_API: &str = "https://haveibeenpwned.com/api/breachedaccount/";
pub const DEFAULT_DUMP_SEARCH: &str = "https://www.databases.today/search-nojs.php";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub global: GlobalConfig,
    pub breach_api: BreachApiConfig,
    pub dump_search: DumpSearchConfig,
}

/// Settings shared by every outgoing request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    pub user_agent: String,
    /// Unset means the HTTP client's default (no timeout).
    pub timeout_seconds: Option<u64>,
}

/// Breach lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreachApiConfig {
    pub base_url: String,
    pub api_version: String,
    pub truncate_response: bool,
}

/// Dump search endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DumpSearchConfig {
    pub url: String,
}

pub fn default_user_agent() -> String {
    format!("pwnfinder/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig {
                user_agent: default_user_agent(),
                timeout_seconds: None,
            },
            breach_api: BreachApiConfig {
                base_url: DEFAULT_BREACH_API.to_string(),
                api_version: "2".to_string(),
                truncate_response: false,
            },
            dump_search: DumpSearchConfig {
                url: DEFAULT_DUMP_SEARCH.to_string(),
            },
        }
    }
}
