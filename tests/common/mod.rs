use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};

use ai_code_analyzer::enums::ai_provider_error::AiProviderError;
use ai_code_analyzer::structs::config::ai_config::AiConfig;
use ai_code_analyzer::traits::ai_provider::AiProvider;

/// Provider that answers every call with the same canned reply.
pub struct StubProvider {
    reply: Result<String, AiProviderError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: AiProviderError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for StubProvider {
    async fn chat(&self, _system_prompt: String, _user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    fn model(&self) -> String {
        "stub-model".to_string()
    }
}

pub fn analysis_json() -> Value {
    json!({
        "improvedCode": "const total = items.reduce((sum, item) => sum + item.price, 0);",
        "feedback": {
            "overall": "Compact and readable.",
            "strengths": ["Uses reduce"],
            "improvements": ["Guard against missing prices"],
            "bestPractices": ["Prefer const"],
            "security": ["No user input reaches the DOM"],
            "performance": ["Single pass over the array"]
        },
        "statistics": {
            "complexity": "laag",
            "readability": 8,
            "maintainability": "7",
            "efficiency": "9"
        }
    })
}

pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 80, "total_tokens": 200 }
    })
}

pub fn ai_config(base_url: &str) -> AiConfig {
    AiConfig {
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        request_timeout_secs: Some(5),
        ..AiConfig::default()
    }
}
