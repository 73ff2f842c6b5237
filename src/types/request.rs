use super::message::Message;
use serde::{Deserialize, Serialize};

/// Body of a chat completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

/// Caller input to the completion service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<Vec<Message>>,
}

impl CompletionInput {
    /// Input carrying only a prompt.
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            chat_history: None,
        }
    }

    /// Attach prior conversation turns.
    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.chat_history = Some(history);
        self
    }

    /// The prompt with surrounding whitespace removed; empty when absent.
    pub fn sanitized_prompt(&self) -> &str {
        self.prompt.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Successful completion output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResult {
    pub result: String,
}
