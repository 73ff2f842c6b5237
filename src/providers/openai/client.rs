use crate::client::ChatCompletionClient;
use crate::config::OpenAIConfig;
use crate::{ChatCompletionRequest, ChatCompletionResponse, Error};
use reqwest::Client;

/// OpenAI chat completion client.
pub struct OpenAIClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl OpenAIClient {
    /// Create a new OpenAI client against the public endpoint.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::from_config(&OpenAIConfig::new(api_key))
    }

    /// Create a new OpenAI client with custom base URL.
    pub fn new_with_base_url(api_key: String, base_url: String) -> Result<Self, Error> {
        Self::from_config(&OpenAIConfig::new(api_key).with_base_url(base_url))
    }

    pub fn from_config(config: &OpenAIConfig) -> Result<Self, Error> {
        if config.base_url.is_empty() {
            return Err(Error::config("base URL must not be empty"));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from `OPENAI_API_KEY` / `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(&OpenAIConfig::from_env())
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Error bodies are kept as JSON when they parse, otherwise as a JSON string.
    fn error_payload(body: String) -> serde_json::Value {
        serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body))
    }
}

#[async_trait::async_trait]
impl ChatCompletionClient for OpenAIClient {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        let mut http_request = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .json(request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::remote(status.as_u16(), Self::error_payload(body)));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
