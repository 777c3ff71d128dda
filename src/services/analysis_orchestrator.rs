use std::sync::Arc;
use std::time::Instant;

use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::file_helper::format_elapsed;
use crate::helpers::placeholder_analysis::generate_placeholder_analysis;
use crate::helpers::prompt_generator::generate_review_prompt;
use crate::prompts::code_review_system_prompt::CODE_REVIEW_SYSTEM_PROMPT;
use crate::services::ai_providers::openai::OpenAICompatibleProvider;
use crate::services::response_decoder::decode_analysis;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::traits::ai_provider::AiProvider;

pub const NO_PROVIDER_NAME: &str = "none";

/// Turns a code upload into an [`AnalysisResult`], one model call per request.
///
/// Holds no per-request state; clone it or share it behind an `Arc`.
#[derive(Clone)]
pub struct AnalysisOrchestrator {
    provider: Option<Arc<dyn AiProvider>>,
    provider_name: String,
}

impl AnalysisOrchestrator {
    pub fn new(provider: Option<Arc<dyn AiProvider>>, provider_name: &str) -> Self {
        let provider_name = if provider.is_some() { provider_name } else { NO_PROVIDER_NAME };
        Self {
            provider,
            provider_name: provider_name.to_string(),
        }
    }

    /// Placeholder-only orchestrator.
    pub fn disabled() -> Self {
        Self::new(None, NO_PROVIDER_NAME)
    }

    /// Builds the remote client when an API key was resolved at startup.
    pub fn from_config(config: &Config) -> AnalyzerResult<Self> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(Self::disabled());
        };

        let provider = OpenAICompatibleProvider::new(api_key, &config.ai)
            .map_err(|e| AnalyzerError::system_error("creating AI client", &e.to_string()))?;

        Ok(Self::new(Some(Arc::new(provider)), &config.ai.provider))
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Never fails: every problem along the way degrades to the placeholder result.
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        let Some(provider) = &self.provider else {
            log::info!("🎭 No AI provider configured, using placeholder analysis for {}", request.file_name);
            return generate_placeholder_analysis(&request.code, request.ui_language);
        };

        let started = Instant::now();
        log::info!(
            "🚀 Starting {} analysis of {} with model {}",
            self.provider_name.to_uppercase(),
            request.file_name,
            provider.model()
        );

        let prompt = generate_review_prompt(request);
        let reply = match provider.chat(CODE_REVIEW_SYSTEM_PROMPT.to_string(), vec![prompt]).await {
            Ok(reply) => reply,
            Err(error) => {
                self.log_provider_failure(&request.file_name, &error);
                return Self::attempted_placeholder(request);
            }
        };

        let analysis_time = format_elapsed(started.elapsed());
        log::info!(
            "✅ {} replied in {} ({} characters)",
            self.provider_name.to_uppercase(),
            analysis_time,
            reply.chars().count()
        );

        match decode_analysis(&reply) {
            Ok(analysis) => {
                log::info!(
                    "📈 Complexity: {}, readability: {}, improvements: {}",
                    analysis.statistics.complexity,
                    analysis.statistics.readability,
                    analysis.feedback.improvements.len()
                );
                analysis.into_result(analysis_time)
            }
            Err(error) => {
                log::error!("❌ Could not decode analysis for {}: {}", request.file_name, error);
                log::info!("🔄 Falling back to placeholder analysis");
                Self::attempted_placeholder(request)
            }
        }
    }

    fn attempted_placeholder(request: &AnalysisRequest) -> AnalysisResult {
        let mut result = generate_placeholder_analysis(&request.code, request.ui_language);
        result.ai_attempted = true;
        result
    }

    fn log_provider_failure(&self, file_name: &str, error: &AiProviderError) {
        log::error!(
            "❌ {} analysis of {} failed [{}]: {}",
            self.provider_name.to_uppercase(),
            file_name,
            error.class(),
            error
        );

        match error {
            AiProviderError::RateLimited(_) => {
                log::warn!("💸 Rate limit reached while analyzing {}, no retry attempted", file_name);
            }
            AiProviderError::BadRequest(_) => {
                log::warn!("🔧 Model rejected the request for {}, check the configured model", file_name);
            }
            AiProviderError::AuthenticationError(_) => {
                log::warn!("🔑 API key was rejected while analyzing {}", file_name);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, Once};
    use crate::enums::ui_language::UiLanguage;
    use crate::helpers::placeholder_analysis::{PLACEHOLDER_OVERALL_EN, PLACEHOLDER_OVERALL_NL};
    use crate::traits::ai_provider::MockAiProvider;

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CapturingLogger;

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            RECORDS.lock().unwrap().push(format!("{} {}", record.level(), record.args()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger;

    fn install_logger() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            log::set_logger(&LOGGER).ok();
            log::set_max_level(log::LevelFilter::Trace);
        });
    }

    fn logged(needle: &str) -> Vec<String> {
        RECORDS
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .cloned()
            .collect()
    }

    const MODEL_REPLY: &str = r#"{"improvedCode":"const total = items.reduce((a, b) => a + b, 0);","feedback":{"overall":"Compact and clear.","strengths":["Uses reduce"],"improvements":["Validate input"],"bestPractices":["Add JSDoc"],"security":["Sanitize items"],"performance":["Avoid copies"]},"statistics":{"complexity":"low","readability":"9","maintainability":"8","efficiency":"9"}}"#;

    fn request(file_name: &str, language: UiLanguage) -> AnalysisRequest {
        AnalysisRequest::new(
            "let total = 0; for (const i of items) total += i;".to_string(),
            file_name.to_string(),
            language,
            "javascript".to_string(),
        )
    }

    fn orchestrator_replying(reply: Result<String, AiProviderError>) -> AnalysisOrchestrator {
        let mut provider = MockAiProvider::new();
        provider.expect_model().return_const("llama-3.1-8b-instant".to_string());
        provider
            .expect_chat()
            .times(1)
            .returning(move |_, _| reply.clone());
        AnalysisOrchestrator::new(Some(Arc::new(provider)), "groq")
    }

    #[tokio::test]
    async fn disabled_orchestrator_returns_placeholder() {
        let orchestrator = AnalysisOrchestrator::disabled();

        let dutch = orchestrator.analyze(&request("a.js", UiLanguage::Nl)).await;
        let english = orchestrator.analyze(&request("a.js", UiLanguage::En)).await;

        assert!(!dutch.ai_enabled);
        assert!(!dutch.ai_attempted);
        assert_eq!(dutch.feedback.overall, PLACEHOLDER_OVERALL_NL);
        assert_eq!(english.feedback.overall, PLACEHOLDER_OVERALL_EN);
        assert_eq!(orchestrator.provider_name(), "none");
    }

    #[tokio::test]
    async fn well_formed_reply_passes_through() {
        let orchestrator = orchestrator_replying(Ok(MODEL_REPLY.to_string()));

        let result = orchestrator.analyze(&request("sum.js", UiLanguage::En)).await;

        assert!(result.ai_enabled);
        assert!(result.ai_attempted);
        assert_eq!(result.improved_code, "const total = items.reduce((a, b) => a + b, 0);");
        assert_eq!(result.feedback.overall, "Compact and clear.");
        assert_eq!(result.statistics.readability, "9");
        assert!(result.analysis_time.ends_with('s'));
        let seconds: f64 = result.analysis_time.trim_end_matches('s').parse().unwrap();
        assert!(seconds >= 0.0);
    }

    #[tokio::test]
    async fn fenced_reply_matches_plain_reply() {
        let plain = orchestrator_replying(Ok(MODEL_REPLY.to_string()))
            .analyze(&request("sum.js", UiLanguage::En))
            .await;
        let fenced = orchestrator_replying(Ok(format!("```json\n{}\n```", MODEL_REPLY)))
            .analyze(&request("sum.js", UiLanguage::En))
            .await;

        assert_eq!(plain.feedback, fenced.feedback);
        assert_eq!(plain.statistics, fenced.statistics);
        assert_eq!(plain.improved_code, fenced.improved_code);
        assert!(fenced.ai_enabled);
    }

    #[tokio::test]
    async fn prose_before_reply_is_ignored() {
        let orchestrator = orchestrator_replying(Ok(format!("Here is the result: {}", MODEL_REPLY)));

        let result = orchestrator.analyze(&request("sum.js", UiLanguage::En)).await;

        assert!(result.ai_enabled);
        assert_eq!(result.feedback.strengths, vec!["Uses reduce".to_string()]);
    }

    #[tokio::test]
    async fn unparseable_reply_falls_back_but_records_the_attempt() {
        install_logger();
        let orchestrator = orchestrator_replying(Ok("I cannot comply".to_string()));

        let result = orchestrator.analyze(&request("refusal-case.js", UiLanguage::En)).await;

        assert!(!result.ai_enabled);
        assert!(result.ai_attempted);
        assert_eq!(result.feedback.overall, PLACEHOLDER_OVERALL_EN);
        assert!(!logged("Could not decode analysis for refusal-case.js").is_empty());
    }

    #[tokio::test]
    async fn rate_limit_falls_back_without_retry_and_is_logged() {
        install_logger();
        let orchestrator = orchestrator_replying(Err(AiProviderError::RateLimited("slow down".to_string())));

        let result = orchestrator.analyze(&request("rate-limited-case.js", UiLanguage::Nl)).await;

        assert!(!result.ai_enabled);
        assert_eq!(result.feedback.overall, PLACEHOLDER_OVERALL_NL);
        assert_eq!(result.analysis_time, "0s");
        let lines = logged("rate-limited-case.js");
        assert!(lines.iter().any(|line| line.starts_with("ERROR") && line.contains("[rate_limit]")));
        assert!(lines.iter().any(|line| line.starts_with("WARN") && line.contains("no retry")));
    }

    #[tokio::test]
    async fn network_failure_falls_back() {
        let orchestrator = orchestrator_replying(Err(AiProviderError::NetworkError("connection refused".to_string())));

        let result = orchestrator.analyze(&request("offline.js", UiLanguage::En)).await;

        assert!(!result.ai_enabled);
        assert_eq!(result.improved_code, request("offline.js", UiLanguage::En).code);
    }

    #[tokio::test]
    async fn prompt_embeds_request_details() {
        let mut provider = MockAiProvider::new();
        provider.expect_model().return_const("llama-3.1-8b-instant".to_string());
        provider
            .expect_chat()
            .withf(|system, prompts| {
                system == CODE_REVIEW_SYSTEM_PROMPT
                    && prompts.len() == 1
                    && prompts[0].contains("- File name: prompt-check.py")
                    && prompts[0].contains("Answer in Dutch.")
            })
            .times(1)
            .returning(|_, _| Ok(MODEL_REPLY.to_string()));
        let orchestrator = AnalysisOrchestrator::new(Some(Arc::new(provider)), "groq");

        let mut req = request("prompt-check.py", UiLanguage::Nl);
        req.target_language = "python".to_string();
        let result = orchestrator.analyze(&req).await;

        assert!(result.ai_enabled);
    }

    #[test]
    fn config_without_key_is_disabled() {
        let orchestrator = AnalysisOrchestrator::from_config(&Config::default()).unwrap();
        assert!(!orchestrator.is_enabled());
    }

    #[test]
    fn config_with_key_enables_the_named_provider() {
        let config = Config {
            api_key: Some("gsk_test".to_string()),
            ..Config::default()
        };
        let orchestrator = AnalysisOrchestrator::from_config(&config).unwrap();
        assert!(orchestrator.is_enabled());
        assert_eq!(orchestrator.provider_name(), "groq");
    }
}
