use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use chrono::Utc;
use tokio::fs;

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::file_helper::{sanitize_file_name, sanitize_report_id};
use crate::structs::config::storage_config::StorageConfig;
use crate::structs::report::Report;

/// Uploaded files and finished reports on local disk.
#[derive(Debug, Clone)]
pub struct ReportStore {
    uploads_dir: PathBuf,
    reports_dir: PathBuf,
}

impl ReportStore {
    pub fn new(uploads_dir: impl Into<PathBuf>, reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
            reports_dir: reports_dir.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.uploads_dir, &config.reports_dir)
    }

    pub fn uploads_dir(&self) -> &Path {
        &self.uploads_dir
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub async fn ensure_directories(&self) -> AnalyzerResult<()> {
        for dir in [&self.uploads_dir, &self.reports_dir] {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| AnalyzerError::file_error(&dir.display().to_string(), "create directory", &e.to_string()))?;
        }
        Ok(())
    }

    /// Stores the raw upload as `<millis>-<uuid>-<sanitized name>` and returns its path.
    pub async fn save_upload(&self, file_name: &str, contents: &[u8]) -> AnalyzerResult<PathBuf> {
        let stored_name = format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4().simple(),
            sanitize_file_name(file_name)
        );
        let path = self.uploads_dir.join(stored_name);

        fs::write(&path, contents)
            .await
            .map_err(|e| AnalyzerError::file_error(&path.display().to_string(), "write upload", &e.to_string()))?;

        Ok(path)
    }

    /// Best effort; a missing file is not an error.
    pub async fn remove_upload(&self, path: &Path) {
        match fs::remove_file(path).await {
            Ok(()) => log::debug!("🧹 Removed upload {}", path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("⚠️ Could not remove upload {}: {}", path.display(), e),
        }
    }

    fn report_path(&self, id: &str) -> PathBuf {
        self.reports_dir.join(format!("report-{}.json", id))
    }

    pub async fn save_report(&self, report: &Report) -> AnalyzerResult<PathBuf> {
        let path = self.report_path(&sanitize_report_id(&report.id));
        let json = serde_json::to_string_pretty(report)?;

        fs::write(&path, json)
            .await
            .map_err(|e| AnalyzerError::file_error(&path.display().to_string(), "write report", &e.to_string()))?;

        log::info!("📊 Report saved to {}", path.display());
        Ok(path)
    }

    pub async fn load_report(&self, id: &str) -> AnalyzerResult<Report> {
        let sanitized = sanitize_report_id(id);
        if sanitized.is_empty() || sanitized != id {
            return Err(AnalyzerError::ReportNotFound { id: id.to_string() });
        }

        let path = self.report_path(&sanitized);
        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AnalyzerError::ReportNotFound { id: id.to_string() });
            }
            Err(e) => {
                return Err(AnalyzerError::file_error(&path.display().to_string(), "read report", &e.to_string()));
            }
        };

        Ok(serde_json::from_str(&content)?)
    }
}
