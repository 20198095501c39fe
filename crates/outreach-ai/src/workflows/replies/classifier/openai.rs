//! OpenAI-compatible chat-completions client for intent extraction.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::super::domain::ExtractionResult;
use super::capability::{parse_extraction, CapabilityError, IntentCapability};
use super::ClassifierConfig;

const SYSTEM_PROMPT: &str = "You classify replies to outbound sales emails. \
Respond with a single JSON object and nothing else, using exactly these keys: \
\"intent\" (one of interested, not_interested, ask_info, spam, unsubscribe, schedule_request, unknown), \
\"confidence\" (number between 0 and 1), \
\"requested_product\", \"budget_hint\", \"meeting_time\" (strings or null), \
\"language\" (ISO 639-1 code). \
If the intent is ambiguous, choose the most likely one and lower the confidence.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Intent capability backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiIntentCapability {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OpenAiIntentCapability {
    /// Returns `Ok(None)` when no API key is configured.
    pub fn from_config(config: &ClassifierConfig) -> Result<Option<Self>, CapabilityError> {
        let Some(api_key) = config.api_key.as_deref() else {
            return Ok(None);
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            CapabilityError::Unavailable("API key contains invalid header characters".to_string())
        })?;
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl IntentCapability for OpenAiIntentCapability {
    fn name(&self) -> &str {
        &self.model
    }

    async fn classify(&self, text: &str) -> Result<ExtractionResult, CapabilityError> {
        let request = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(CapabilityError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CapabilityError::InvalidResponse("no completion choices".to_string()))?;

        parse_extraction(&content)
    }
}
