//! OpenRouter model gateway
//!
//! One HTTP POST per model call against the OpenAI-compatible
//! `/chat/completions` endpoint. The per-call timeout is enforced here, not
//! by the orchestrator; without it a stalled provider would stall the whole
//! council turn.

use crate::openrouter::protocol::{ChatRequest, ChatResponse, WireMessage};
use async_trait::async_trait;
use council_application::ports::model_gateway::{GatewayError, ModelGateway};
use council_domain::{Message, Model, ModelReply};
use std::time::Duration;
use tracing::{debug, warn};

/// Default OpenRouter API base
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Environment variable consulted for the API key by default
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "OPENROUTER_BASE_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// ModelGateway adapter for the OpenRouter HTTP API
pub struct OpenRouterGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    default_timeout: Duration,
}

impl OpenRouterGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a gateway from the environment. The key is read from
    /// `api_key_env` (default `OPENROUTER_API_KEY`); the base URL from
    /// `OPENROUTER_BASE_URL` when set.
    pub fn from_env(api_key_env: Option<&str>) -> Result<Self, GatewayError> {
        let key_var = api_key_env.unwrap_or(API_KEY_ENV);
        let api_key = std::env::var(key_var).map_err(|_| {
            GatewayError::ConnectionError(format!("environment variable {key_var} is not set"))
        })?;
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self::new(base_url, api_key))
    }

    /// Build a gateway from the `[openrouter]` config section. The key is
    /// still resolved through the environment; only its variable name comes
    /// from the file.
    pub fn from_file_config(
        config: &crate::config::FileOpenRouterConfig,
    ) -> Result<Self, GatewayError> {
        let mut gateway = Self::from_env(config.api_key_env.as_deref())?;
        if let Some(base_url) = &config.base_url {
            gateway.base_url = base_url.clone();
        }
        if let Some(secs) = config.request_timeout_secs {
            gateway.default_timeout = Duration::from_secs(secs);
        }
        Ok(gateway)
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ModelGateway for OpenRouterGateway {
    async fn query(
        &self,
        model: &Model,
        messages: &[Message],
        timeout: Option<Duration>,
    ) -> Result<ModelReply, GatewayError> {
        let body = ChatRequest {
            model: model.as_str(),
            messages: messages.iter().map(WireMessage::from_message).collect(),
        };

        debug!("POST {} model={}", self.completions_url(), model);

        // The timeout covers the full exchange, body included; a provider
        // that stalls mid-body must not stall the council turn.
        let exchange = async {
            let response = self
                .client
                .post(self.completions_url())
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                warn!("Model {} returned HTTP {}", model, status.as_u16());
                return Err(GatewayError::HttpStatus(status.as_u16()));
            }

            response
                .json::<ChatResponse>()
                .await
                .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
        };

        let payload = tokio::time::timeout(timeout.unwrap_or(self.default_timeout), exchange)
            .await
            .map_err(|_| {
                warn!("Model {} timed out", model);
                GatewayError::Timeout
            })??;

        payload.into_reply().ok_or_else(|| {
            GatewayError::MalformedResponse("response carried no content".to_string())
        })
    }
}
