use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_UPLOADS_DIR: &str = "uploads";
pub const DEFAULT_REPORTS_DIR: &str = "reports";
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;
/// Room for the non-file form fields and multipart framing on top of the file itself.
pub const FORM_OVERHEAD_BYTES: u64 = 64 * 1024;
pub const MAX_REPORT_ID_LENGTH: usize = 64;

pub const DEFAULT_AI_PROVIDER: &str = "groq";
pub const DEFAULT_AI_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_AI_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_MAX_TOKENS: u32 = 6000;
pub const DEFAULT_TOP_P: f32 = 0.9;

pub const CONFIG_DIR_NAME: &str = "ai-code-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ALLOWED_EXTENSIONS: &[&str] = &[
    ".js", ".py", ".java", ".html", ".css", ".php", ".cpp", ".c", ".ts",
];

pub const DEFAULT_TARGET_LANGUAGE: &str = "javascript";

pub const TARGET_LANGUAGES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("java", "java"),
    ("html", "html"),
    ("css", "css"),
    ("php", "php"),
    ("cpp", "cpp"),
    ("c", "c"),
];

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
