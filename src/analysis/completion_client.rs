// src/analysis/completion_client.rs
use super::prompt::{build_prompt, SYSTEM_PROMPT};
use super::types::AnalysisResult;
use crate::profile::ProfileData;
use crate::utils::{mask_secret, normalize_base_url};
use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

pub const DEFAULT_COMPLETION_API_URL: &str = "https://api.openai.com/v1";
pub const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;
const USER_AGENT: &str = "FindnAI-Backend/1.0";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Completion API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: Unable to reach completion API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response format from completion API")]
    MissingContent,

    #[error("AI returned invalid response format: {0}")]
    InvalidFormat(#[source] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completion client for profile analysis.
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_COMPLETION_API_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = normalize_base_url(url);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn analyze(&self, profile: &ProfileData) -> Result<AnalysisResult, CompletionError> {
        let prompt = build_prompt(profile);

        info!(
            "Calling completion API for {} profile with key: {}",
            profile.platform,
            mask_secret(&self.api_key)
        );

        let content = self.send_completion(SYSTEM_PROMPT, &prompt).await?;
        parse_analysis(&content)
    }

    pub async fn send_completion(&self, system: &str, user: &str) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Completion API error {}: {}", status, body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let chat: ChatResponse =
            serde_json::from_str(&body).map_err(|_| CompletionError::MissingContent)?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or(CompletionError::MissingContent)
    }
}

/// Parse model output as an [`AnalysisResult`], tolerating a markdown fence.
pub fn parse_analysis(content: &str) -> Result<AnalysisResult, CompletionError> {
    serde_json::from_str(strip_json_fences(content)).map_err(|e| {
        error!("Failed to parse AI response as JSON: {}", content);
        CompletionError::InvalidFormat(e)
    })
}

fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}
