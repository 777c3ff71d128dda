use serde::{Deserialize, Deserializer, Serialize};
use crate::enums::complexity::Complexity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub overall: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub best_practices: Vec<String>,
    pub security: Vec<String>,
    pub performance: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub complexity: Complexity,
    #[serde(deserialize_with = "score_text")]
    pub readability: String,
    #[serde(deserialize_with = "score_text")]
    pub maintainability: String,
    #[serde(deserialize_with = "score_text")]
    pub efficiency: String,
}

/// The object the model is asked to produce. Every field is required: a reply
/// missing any of them is treated as undecodable rather than passed on half-filled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    pub improved_code: String,
    pub feedback: Feedback,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub improved_code: String,
    pub feedback: Feedback,
    pub statistics: Statistics,
    pub analysis_time: String,
    pub ai_enabled: bool,
    #[serde(default)]
    pub ai_attempted: bool,
}

impl ModelAnalysis {
    pub fn into_result(self, analysis_time: String) -> AnalysisResult {
        AnalysisResult {
            improved_code: self.improved_code,
            feedback: self.feedback,
            statistics: self.statistics,
            analysis_time,
            ai_enabled: true,
            ai_attempted: true,
        }
    }
}

// Models regularly answer `"readability": 7` instead of `"7"`.
fn score_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Score {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Score::deserialize(deserializer)? {
        Score::Text(text) => text,
        Score::Number(number) => number.to_string(),
    })
}
