use std::path::Path;
use std::time::Duration;
use crate::config::constants::{DEFAULT_TARGET_LANGUAGE, MAX_REPORT_ID_LENGTH, TARGET_LANGUAGES};

/// Lower-cased extension including the leading dot, or an empty string.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Replaces everything outside `[a-zA-Z0-9.-_]` so the name is safe to use on disk.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect()
}

pub fn sanitize_report_id(id: &str) -> String {
    id.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_REPORT_ID_LENGTH)
        .collect()
}

pub fn infer_target_language(file_name: &str) -> String {
    let extension = extension_of(file_name);
    let extension = extension.trim_start_matches('.');

    TARGET_LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| (*language).to_string())
        .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string())
}

/// Resolves the target language from an optional explicit value, falling back to the extension.
pub fn resolve_target_language(explicit: Option<&str>, file_name: &str) -> String {
    match explicit.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_string(),
        None => infer_target_language(file_name),
    }
}

/// Whole MB or KB when the size divides evenly, plain bytes otherwise.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;

    match bytes {
        b if b >= MB && b % MB == 0 => format!("{}MB", b / MB),
        b if b >= KB && b % KB == 0 => format!("{}KB", b / KB),
        b => format!("{} bytes", b),
    }
}

/// Seconds with two decimals, e.g. `1.42s`.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}
