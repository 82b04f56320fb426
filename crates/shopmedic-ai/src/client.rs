//! HTTP client for the generative-text endpoint.
//!
//! Builds the `contents`/`systemInstruction`/`generationConfig` payload,
//! retries rate-limited calls with exponential backoff, and validates the
//! response (safety rejections and empty candidates are terminal). With no
//! API credential configured the client performs no I/O and returns an
//! explicitly tagged placeholder instead.

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, warn};

use crate::retry::RetryPolicy;
use crate::schema::Schema;

/// Default generative endpoint.
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Fixed degraded-mode reply when no schema was requested.
const DEGRADED_TEXT: &str = "Generated content unavailable: no API credential is configured.";

#[derive(Debug, Error)]
pub enum GenError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generative API returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("generation blocked by safety settings")]
    SafetyBlocked,
    #[error("generative API returned no usable content")]
    EmptyResponse,
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Endpoint configuration. A missing `api_key` selects degraded mode.
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

impl GenConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }
}

/// How a generation was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// A live call to the generative endpoint.
    Live,
    /// Placeholder output; no credential was configured and no I/O happened.
    Degraded,
}

/// A completed generation.
#[derive(Debug, Clone)]
pub struct Generated {
    pub text: String,
    /// Attempts issued against the endpoint; 0 in degraded mode.
    pub attempts: u32,
    pub mode: GenMode,
}

impl Generated {
    pub fn is_degraded(&self) -> bool {
        self.mode == GenMode::Degraded
    }
}

/// Raw endpoint response before validation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One POST to the generative endpoint. Abstracted so the retry loop can be
/// exercised against a scripted sequence of responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, payload: &Value) -> Result<RawResponse, GenError>;
}

/// reqwest-backed transport carrying the API key as a query parameter.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(api_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{api_url}?key={api_key}"),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, payload: &Value) -> Result<RawResponse, GenError> {
        let resp = self.client.post(&self.url).json(payload).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

/// Trait seam the remediation flows depend on, so they can be tested with a
/// scripted generator.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_query: &str,
        schema: Option<&Schema>,
    ) -> Result<Generated, GenError>;
}

/// Generative client: payload construction, retry/backoff, validation.
pub struct GenClient {
    transport: Option<Box<dyn Transport>>,
    retry: RetryPolicy,
}

impl GenClient {
    pub fn new(config: &GenConfig) -> Self {
        let transport = config
            .api_key
            .as_ref()
            .map(|key| Box::new(HttpTransport::new(&config.api_url, key)) as Box<dyn Transport>);
        if transport.is_none() {
            warn!("no generative API credential configured; client is in degraded mode");
        }
        Self {
            transport,
            retry: RetryPolicy::default(),
        }
    }

    /// Client over an explicit transport and retry policy, for tests and
    /// alternative endpoints.
    pub fn with_transport(transport: Box<dyn Transport>, retry: RetryPolicy) -> Self {
        Self {
            transport: Some(transport),
            retry,
        }
    }

    /// Client that never performs I/O and always answers with placeholders.
    pub fn degraded() -> Self {
        Self {
            transport: None,
            retry: RetryPolicy::default(),
        }
    }

    async fn generate_inner(
        &self,
        system_prompt: &str,
        user_query: &str,
        schema: Option<&Schema>,
    ) -> Result<Generated, GenError> {
        let Some(transport) = &self.transport else {
            let text = match schema {
                Some(schema) => schema.placeholder().to_string(),
                None => DEGRADED_TEXT.to_string(),
            };
            return Ok(Generated {
                text,
                attempts: 0,
                mode: GenMode::Degraded,
            });
        };

        let payload = build_payload(system_prompt, user_query, schema);
        let mut attempt = 0u32;
        loop {
            attempt += 1;
            match transport.post(&payload).await {
                Ok(raw) if (200..300).contains(&raw.status) => {
                    let text = extract_text(&raw.body)?;
                    info!(attempts = attempt, chars = text.len(), "generation complete");
                    return Ok(Generated {
                        text,
                        attempts: attempt,
                        mode: GenMode::Live,
                    });
                }
                Ok(raw) if self.retry.is_retryable(raw.status) => {
                    if attempt >= self.retry.max_attempts {
                        return Err(GenError::Server {
                            status: raw.status,
                            body: raw.body,
                        });
                    }
                    let delay = self.retry.backoff(attempt - 1);
                    warn!(
                        status = raw.status,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "rate limited, backing off"
                    );
                    tokio::time::sleep(delay).await;
                }
                Ok(raw) => {
                    return Err(GenError::Server {
                        status: raw.status,
                        body: raw.body,
                    });
                }
                Err(e) if attempt < self.retry.max_attempts => {
                    warn!(attempt, error = %e, "transport fault, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl Generator for GenClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_query: &str,
        schema: Option<&Schema>,
    ) -> Result<Generated, GenError> {
        self.generate_inner(system_prompt, user_query, schema).await
    }
}

/// Endpoint payload: user query under `contents`, persona under
/// `systemInstruction`, structured-output directives under
/// `generationConfig` when a schema is supplied.
fn build_payload(system_prompt: &str, user_query: &str, schema: Option<&Schema>) -> Value {
    let generation_config = match schema {
        Some(schema) => json!({
            "responseMimeType": "application/json",
            "responseSchema": schema.to_json(),
        }),
        None => json!({}),
    };
    json!({
        "contents": [{ "parts": [{ "text": user_query }] }],
        "systemInstruction": { "parts": [{ "text": system_prompt }] },
        "generationConfig": generation_config,
    })
}

/// Pull the generated text out of a successful response body.
///
/// A safety finish reason or an absent text part is a terminal error for
/// the call, never retried.
fn extract_text(body: &str) -> Result<String, GenError> {
    let value: Value = serde_json::from_str(body)?;
    let candidate = value.pointer("/candidates/0");
    if candidate
        .and_then(|c| c.get("finishReason"))
        .and_then(Value::as_str)
        == Some("SAFETY")
    {
        return Err(GenError::SafetyBlocked);
    }
    candidate
        .and_then(|c| c.pointer("/content/parts/0/text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(GenError::EmptyResponse)
}
