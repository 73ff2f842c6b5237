//! Chat completion client implementations.

pub mod openai;

// Re-export commonly used client types
pub use openai::OpenAIClient;
