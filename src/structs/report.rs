use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::ui_language::UiLanguage;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::{AnalysisResult, Feedback, Statistics};

/// A finished analysis as stored under the reports directory and rendered on the results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub file_name: String,
    pub original_code: String,
    pub improved_code: String,
    pub feedback: Feedback,
    pub statistics: Statistics,
    pub timestamp: DateTime<Utc>,
    pub language: UiLanguage,
    pub ai_enabled: bool,
    #[serde(default)]
    pub ai_attempted: bool,
    pub ai_provider: String,
    #[serde(default)]
    pub analysis_time: String,
}

impl Report {
    pub fn new(request: &AnalysisRequest, result: AnalysisResult, ai_provider: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file_name: request.file_name.clone(),
            original_code: request.code.clone(),
            improved_code: result.improved_code,
            feedback: result.feedback,
            statistics: result.statistics,
            timestamp: Utc::now(),
            language: request.ui_language,
            ai_enabled: result.ai_enabled,
            ai_attempted: result.ai_attempted,
            ai_provider: ai_provider.to_string(),
            analysis_time: result.analysis_time,
        }
    }
}
