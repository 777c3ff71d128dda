use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::storage_config::StorageConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ai: AiConfig,

    /// Resolved from the environment at startup, never read from or written to the file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Config {
    pub fn ai_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
