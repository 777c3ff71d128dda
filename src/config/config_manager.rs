use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, PORT_ENV};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# AI Code Analyzer configuration

[server]
host = "127.0.0.1"
# The PORT environment variable overrides this value
port = 3000
open_browser = false
# Show technical error details on error pages
show_error_details = false

[storage]
uploads_dir = "uploads"
reports_dir = "reports"
max_upload_bytes = 5242880

[ai]
provider = "groq"
base_url = "https://api.groq.com/openai/v1"
model = "llama-3.1-8b-instant"
# Name of the environment variable holding the API key.
# Without a key every analysis is a placeholder (demo) analysis.
api_key_env = "GROQ_API_KEY"
temperature = 0.1
max_tokens = 6000
top_p = 0.9
# request_timeout_secs = 120
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> AnalyzerResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| AnalyzerError::config_error(
                "Could not determine the home directory",
                None,
                Some("Pass an explicit path with --config"),
            ))
    }

    pub fn config_path(explicit: Option<&Path>) -> AnalyzerResult<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_config_path(),
        }
    }

    /// Reads the config file (defaults when the default file is absent), then applies `.env` and
    /// process environment overrides.
    pub fn load(explicit: Option<&Path>) -> AnalyzerResult<Config> {
        if let Err(e) = Self::load_env_file(None) {
            log::warn!("⚠️ Ignoring .env: {}", e);
        }

        let path = Self::config_path(explicit)?;
        let mut config = if path.exists() {
            log::info!("📋 Loading config from: {}", path.display());
            Self::read_file(&path)?
        } else if explicit.is_some() {
            return Err(AnalyzerError::ConfigurationFileError {
                path: path.display().to_string(),
                reason: "file does not exist".to_string(),
            });
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        Self::apply_environment(&mut config, |name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads `path`, or `.env` searched upwards from the working directory. A missing file is
    /// `Ok(None)`; an unreadable or malformed one is an error.
    pub fn load_env_file(path: Option<&Path>) -> AnalyzerResult<Option<PathBuf>> {
        let result = match path {
            Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
            None => dotenvy::dotenv(),
        };

        match result {
            Ok(loaded) => {
                log::debug!("Loaded environment from {}", loaded.display());
                Ok(Some(loaded))
            }
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(AnalyzerError::ConfigurationFileError {
                path: path.map_or_else(|| ".env".to_string(), |p| p.display().to_string()),
                reason: e.to_string(),
            }),
        }
    }

    pub fn read_file(path: &Path) -> AnalyzerResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| AnalyzerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| AnalyzerError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    /// Port override and API key lookup. Blank values count as unset.
    pub fn apply_environment<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(port) = non_blank(PORT_ENV) {
            match port.parse::<u16>() {
                Ok(port) => config.server.port = port,
                Err(_) => log::warn!("⚠️ Ignoring invalid {} value '{}'", PORT_ENV, port),
            }
        }

        config.api_key = non_blank(&config.ai.api_key_env);
    }

    /// Writes the commented sample config; never overwrites an existing file.
    pub fn create_sample_config(explicit: Option<&Path>) -> AnalyzerResult<PathBuf> {
        let path = Self::config_path(explicit)?;

        if path.exists() {
            return Err(AnalyzerError::config_error(
                &format!("Configuration file already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AnalyzerError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(&path, SAMPLE_CONFIG)
            .map_err(|e| AnalyzerError::file_error(&path.display().to_string(), "write config", &e.to_string()))?;

        log::info!("✅ Created sample config at: {}", path.display());
        Ok(path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.parse::<IpAddr>().is_err() {
            errors.push(format!("server.host must be an IP address, got '{}'", config.server.host));
        }

        if config.server.port == 0 {
            errors.push("server.port must be greater than 0".to_string());
        }

        if config.storage.max_upload_bytes == 0 {
            errors.push("storage.max_upload_bytes must be greater than 0".to_string());
        }

        if config.storage.uploads_dir.trim().is_empty() || config.storage.reports_dir.trim().is_empty() {
            errors.push("storage.uploads_dir and storage.reports_dir must not be empty".to_string());
        }

        let ai = &config.ai;
        if !(ai.base_url.starts_with("http://") || ai.base_url.starts_with("https://")) {
            errors.push(format!("ai.base_url must be an http(s) URL, got '{}'", ai.base_url));
        }

        if ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must name an environment variable".to_string());
        }

        if ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than 0".to_string());
        }

        if !(0.0..=2.0).contains(&ai.temperature) {
            errors.push(format!("ai.temperature must be between 0.0 and 2.0, got {}", ai.temperature));
        }

        if !(ai.top_p > 0.0 && ai.top_p <= 1.0) {
            errors.push(format!("ai.top_p must be in (0.0, 1.0], got {}", ai.top_p));
        }

        if ai.request_timeout_secs == Some(0) {
            errors.push("ai.request_timeout_secs must be greater than 0 when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
