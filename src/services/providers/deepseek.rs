/// DeepSeek chat-completion client for candidate generation
///
/// Sends the preference summary as the user message alongside a fixed system
/// instruction and returns the raw completion text. The model promises no
/// output shape; an absent completion comes back as an empty string, which
/// the parser downstream treats as zero candidates.
use std::time::Duration;

use reqwest::{header::AUTHORIZATION, Client as HttpClient};
use serde::{Deserialize, Serialize};

use crate::{
    error::{EngineError, EngineResult},
    services::providers::CandidateTextProvider,
};

const SYSTEM_INSTRUCTION: &str = "You are an expert anime recommender. Based on the user's \
    preferences and watched history, suggest 5 anime titles that would match their taste. For \
    each recommendation, provide a brief explanation of why it matches their preferences. \
    Format each suggestion on its own line as 'Title: reason'.";

const TEMPERATURE: f64 = 0.7;

#[derive(Clone)]
pub struct DeepSeekClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f64,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl DeepSeekClient {
    /// Creates a DeepSeek client with a per-request timeout
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> EngineResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            api_key,
            api_url,
            model,
        })
    }
}

#[async_trait::async_trait]
impl CandidateTextProvider for DeepSeekClient {
    async fn generate_candidates(&self, preference_summary: &str) -> EngineResult<String> {
        let url = format!("{}/chat/completions", self.api_url.trim_end_matches('/'));
        let request = ChatRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Here are my preferences and watched history: {}",
                        preference_summary
                    ),
                },
            ],
        };

        let response = self
            .http_client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::ExternalApi(format!(
                "DeepSeek API returned status {}: {}",
                status, body
            )));
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        tracing::info!(
            chars = content.len(),
            provider = "deepseek",
            "Candidate text generated"
        );

        Ok(content)
    }
}
