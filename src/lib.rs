//! Health assessment completions over a hosted chat-completion endpoint.
//!
//! Every request carries a fixed instruction and a sample profile context ahead of
//! the caller's conversation; the text of the first response choice is returned.

pub mod client;
pub mod config;
pub mod error;
pub mod prompts;
pub mod providers;
pub mod service;
pub mod telemetry;
pub mod types;

// Re-export core types for easy usage
pub use client::ChatCompletionClient;
pub use config::{OpenAIConfig, ServiceConfig};
pub use error::{Error, ServiceError};
pub use providers::*;
pub use service::{CompletionOutcome, CompletionService};
pub use types::*;
