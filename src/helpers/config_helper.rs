use crate::config::constants::{
    DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL, DEFAULT_AI_PROVIDER, DEFAULT_API_KEY_ENV,
    DEFAULT_MAX_TOKENS, DEFAULT_REPORTS_DIR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_TEMPERATURE, DEFAULT_TOP_P, DEFAULT_UPLOADS_DIR, MAX_UPLOAD_BYTES,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_uploads_dir() -> String {
        DEFAULT_UPLOADS_DIR.to_string()
    }

    pub fn default_reports_dir() -> String {
        DEFAULT_REPORTS_DIR.to_string()
    }

    pub fn default_max_upload_bytes() -> u64 {
        MAX_UPLOAD_BYTES
    }

    pub fn default_provider() -> String {
        DEFAULT_AI_PROVIDER.to_string()
    }

    pub fn default_base_url() -> String {
        DEFAULT_AI_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_AI_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }

    pub fn default_temperature() -> f32 {
        DEFAULT_TEMPERATURE
    }

    pub fn default_top_p() -> f32 {
        DEFAULT_TOP_P
    }
}
