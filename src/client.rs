use crate::{ChatCompletionRequest, ChatCompletionResponse, Error};

/// A collaborator that sends one chat completion request and returns the parsed response.
///
/// Implementations report an endpoint that answered with an error status as
/// [`Error::Remote`] so the caller can tell it apart from transport failures.
#[async_trait::async_trait]
pub trait ChatCompletionClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error>;
}

#[async_trait::async_trait]
impl<C: ChatCompletionClient + ?Sized> ChatCompletionClient for Box<C> {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        (**self).create_chat_completion(request).await
    }
}

#[async_trait::async_trait]
impl<C: ChatCompletionClient + ?Sized> ChatCompletionClient for std::sync::Arc<C> {
    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, Error> {
        (**self).create_chat_completion(request).await
    }
}
