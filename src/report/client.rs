use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::registry::ProviderDef;

pub const NO_API_KEY_PLACEHOLDER: &str =
    "No API key found. Please provide one or set the environment variable.";

const SYSTEM_PROMPT: &str = "You are an expert protein scientist.";
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 2000;
const TIMEOUT_SECS: u64 = 60;

/// Resolve the summarizer credential: explicit caller-supplied key first,
/// then the provider's environment variable (with `.env` loading). When
/// neither yields a key, summarization is skipped, never attempted.
pub fn resolve_api_key(provider: &ProviderDef, explicit: Option<&str>) -> Option<String> {
    if let Some(key) = explicit {
        let key = key.trim();
        if !key.is_empty() {
            return Some(key.to_string());
        }
    }
    dotenvy::dotenv().ok();
    match std::env::var(provider.key_env) {
        Ok(key) if !key.trim().is_empty() => Some(key.trim().to_string()),
        _ => None,
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Blocking chat-completions client for the configured provider.
pub struct AiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl AiClient {
    pub fn new(provider: &ProviderDef, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            client,
            api_base: provider.api_base.to_string(),
            model: provider.model.to_string(),
            api_key,
        })
    }

    pub fn summarize(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .context("summarization request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("summarization request returned status {}", resp.status());
        }

        let parsed: ChatResponse = resp
            .json()
            .context("failed to parse summarization response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("summarization response contained no choices")?;
        Ok(content)
    }
}
