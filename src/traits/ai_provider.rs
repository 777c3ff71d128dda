use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;

/// A remote chat-completion model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends one system prompt plus user prompts and returns the raw text of the reply.
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError>;

    fn model(&self) -> String;
}
