//! Service and client configuration.

use crate::prompts::{DEFAULT_MODEL, HEALTH_ASSESSMENT_INSTRUCTION, SAMPLE_PROFILE_CONTEXT};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed request parameters injected into the completion service.
///
/// An empty `instruction` or `context` drops that segment from every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub model: String,
    pub instruction: String,
    pub context: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            instruction: HEALTH_ASSESSMENT_INSTRUCTION.to_string(),
            context: SAMPLE_PROFILE_CONTEXT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }
}

/// Connection settings for the OpenAI chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAIConfig {
    /// Bearer token. When absent the request goes out unauthenticated and the
    /// endpoint reports the failure.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Client-side request timeout. `None` waits for the endpoint indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `OPENAI_API_KEY` and `OPENAI_BASE_URL`. Neither is required.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty());
        let base_url = lookup("OPENAI_BASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            api_key,
            base_url,
            timeout: None,
        }
    }
}
