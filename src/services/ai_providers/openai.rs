use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;

use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Client for any endpoint speaking the OpenAI chat-completions dialect (Groq by default).
#[derive(Clone)]
pub struct OpenAICompatibleProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

impl OpenAICompatibleProvider {
    pub fn new(api_key: String, config: &AiConfig) -> Result<Self, AiProviderError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| AiProviderError::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
        })
    }

    fn get_openai_messages(&self, system_prompt: String, user_prompts: Vec<String>) -> Vec<OpenAIMessage> {
        let mut messages = Vec::with_capacity(user_prompts.len() + 1);

        if !system_prompt.is_empty() {
            messages.push(OpenAIMessage::system(system_prompt));
        }

        messages.extend(user_prompts.into_iter().map(OpenAIMessage::user));
        messages
    }

    fn get_request(&self, system_prompt: String, user_prompts: Vec<String>) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: self.get_openai_messages(system_prompt, user_prompts),
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
            stream: false,
            top_p: Some(self.top_p),
        }
    }

    async fn make_request(&self, url: &str, request_body: &OpenAIRequest) -> Result<reqwest::Response, AiProviderError> {
        log::debug!("📦 Request model: {}", request_body.model);

        self.client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))
    }
}

#[async_trait]
impl AiProvider for OpenAICompatibleProvider {
    async fn chat(&self, system_prompt: String, user_prompts: Vec<String>) -> Result<String, AiProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = self.get_request(system_prompt, user_prompts);

        let response = self.make_request(&url, &request_body).await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let body: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        if let Some(usage) = &body.usage {
            log::debug!(
                "🧮 Tokens used: {} prompt + {} completion = {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        body.first_content()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }

    fn model(&self) -> String {
        self.model.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAICompatibleProvider {
        OpenAICompatibleProvider::new("test-key".to_string(), &AiConfig::default()).unwrap()
    }

    #[test]
    fn request_carries_fixed_sampling_parameters() {
        let request = provider().get_request("system".to_string(), vec!["review this".to_string()]);

        assert_eq!(request.model, "llama-3.1-8b-instant");
        assert_eq!(request.max_tokens, Some(6000));
        assert_eq!(request.temperature, Some(0.1));
        assert_eq!(request.top_p, Some(0.9));
        assert!(!request.stream);
        assert_eq!(
            request.messages,
            vec![OpenAIMessage::system("system".to_string()), OpenAIMessage::user("review this".to_string())]
        );
    }

    #[test]
    fn empty_system_prompt_is_omitted() {
        let messages = provider().get_openai_messages(String::new(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.role == "user"));
    }

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let config = AiConfig { base_url: "http://localhost:9999/v1/".to_string(), ..AiConfig::default() };
        let provider = OpenAICompatibleProvider::new("test-key".to_string(), &config).unwrap();
        assert_eq!(provider.base_url, "http://localhost:9999/v1");
    }
}
