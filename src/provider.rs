use anyhow::Context;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_TEMPERATURE: f32 = 0.7;

const SYSTEM_PROMPT: &str = "You help experts in health, bodywork, and \
traditional Chinese medicine write careful, understandable texts. Do not \
make diagnoses, do not give guarantees of a cure, and do not promise \
miraculous results. Remind the reader that the text does not replace a \
medical consultation or diagnostics, but do it gently, without scare \
tactics.";

/// Seam between dispatch and the external generation call, so tests can
/// substitute a stub without any network traffic.
#[async_trait]
pub trait DraftProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub model: String,
    pub temperature: f32,
}

fn parse_or_default<T: FromStr + Copy + std::fmt::Display>(
    name: &str,
    raw: Option<String>,
    default: T,
) -> T {
    match raw {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Invalid {} value. Fallback to default {}.", name, default);
                default
            }
        },
    }
}

impl ProviderConfig {
    /// Returns None when no OPENAI_API_KEY is set, meaning the service runs
    /// in mock-only mode. Malformed numeric overrides are logged and
    /// defaulted, never fatal.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_seconds = parse_or_default(
            "OPENAI_TIMEOUT_SECONDS",
            std::env::var("OPENAI_TIMEOUT_SECONDS").ok(),
            DEFAULT_TIMEOUT_SECONDS,
        );
        let model = std::env::var("OPENAI_MODEL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = parse_or_default(
            "OPENAI_TEMPERATURE",
            std::env::var("OPENAI_TEMPERATURE").ok(),
            DEFAULT_TEMPERATURE,
        );
        Some(ProviderConfig {
            api_key,
            base_url,
            timeout_seconds,
            model,
            temperature,
        })
    }
}

/// Chat-completions client for any OpenAI-compatible endpoint. One call per
/// request, bounded by the client-level timeout, no retries.
pub struct OpenAiProvider {
    config: ProviderConfig,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(config: ProviderConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { config, client })
    }
}

fn extract_content(body: &Value) -> anyhow::Result<String> {
    let message = body
        .pointer("/choices/0/message")
        .context("malformed provider response: missing choices[0].message")?;
    // A null content is treated as an empty completion, not an error.
    Ok(message
        .get("content")
        .and_then(|c| c.as_str())
        .unwrap_or("")
        .to_string())
}

#[async_trait]
impl DraftProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let request_body = json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await
            .context("chat completion request failed")?
            .error_for_status()
            .context("chat completion returned an error status")?;

        let body: Value = response
            .json()
            .await
            .context("chat completion response is not valid JSON")?;
        extract_content(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_default_accepts_valid_values() {
        assert_eq!(parse_or_default("T", Some("12".to_string()), 30u64), 12);
        assert_eq!(parse_or_default("T", Some("0.2".to_string()), 0.7f32), 0.2);
    }

    #[test]
    fn parse_or_default_falls_back_on_garbage() {
        assert_eq!(parse_or_default("T", Some("abc".to_string()), 30u64), 30);
        assert_eq!(
            parse_or_default("T", Some("warm".to_string()), 0.7f32),
            0.7
        );
        assert_eq!(parse_or_default("T", None, 0.7f32), 0.7);
    }

    #[test]
    fn extract_content_reads_first_choice() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "draft"}}]
        });
        assert_eq!(extract_content(&body).unwrap(), "draft");
    }

    #[test]
    fn extract_content_treats_null_content_as_empty() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        });
        assert_eq!(extract_content(&body).unwrap(), "");
    }

    #[test]
    fn extract_content_rejects_missing_choices() {
        let body = json!({"error": {"message": "overloaded"}});
        assert!(extract_content(&body).is_err());
    }
}
