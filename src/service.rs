//! Message assembly and response extraction around a chat completion client.

use crate::client::ChatCompletionClient;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::providers::OpenAIClient;
use crate::{ChatCompletionRequest, CompletionInput, CompletionResult, Error, Message};
use serde_json::Value;

/// Outcome of a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    /// The endpoint produced a completion.
    Completed(CompletionResult),
    /// The endpoint answered with an error status; `payload` is its raw body.
    RemoteRejected { status: u16, payload: Value },
    /// The request never produced a structured answer.
    Failed(ServiceError),
}

impl CompletionOutcome {
    /// Sort a client error by whether the endpoint itself answered.
    pub fn classify(error: Error) -> Self {
        match error {
            Error::Remote { status, payload } => {
                tracing::error!(status, %payload, "chat completion rejected by endpoint");
                CompletionOutcome::RemoteRejected { status, payload }
            }
            other => {
                tracing::error!(error = %other, "Error with OpenAI API request");
                CompletionOutcome::Failed(ServiceError::request_failed())
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CompletionOutcome::Completed(_))
    }

    /// Collapse into a single success channel.
    ///
    /// A completion becomes `{"result": ...}` and a remote rejection resolves
    /// with the endpoint's payload unchanged. Only local failures are `Err`.
    pub fn into_legacy(self) -> Result<Value, ServiceError> {
        match self {
            CompletionOutcome::Completed(result) => {
                Ok(serde_json::json!({ "result": result.result }))
            }
            CompletionOutcome::RemoteRejected { payload, .. } => Ok(payload),
            CompletionOutcome::Failed(err) => Err(err),
        }
    }
}

/// Forwards a prompt and prior turns to the model behind a fixed instruction and context.
pub struct CompletionService<C> {
    client: C,
    config: ServiceConfig,
}

impl<C: ChatCompletionClient> CompletionService<C> {
    pub fn new(client: C, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Instruction, context, history, then the trimmed prompt. Empty segments are skipped.
    pub fn assemble_messages(&self, input: &CompletionInput) -> Vec<Message> {
        let history = input.chat_history.as_deref().unwrap_or_default();
        let mut messages = Vec::with_capacity(history.len() + 3);

        if !self.config.instruction.is_empty() {
            messages.push(Message::user(self.config.instruction.as_str()));
        }
        if !self.config.context.is_empty() {
            messages.push(Message::user(self.config.context.as_str()));
        }
        messages.extend_from_slice(history);

        let prompt = input.sanitized_prompt();
        if !prompt.is_empty() {
            messages.push(Message::user(prompt));
        }

        messages
    }

    pub fn build_request(&self, input: &CompletionInput) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: self.assemble_messages(input),
        }
    }

    /// Send one request and resolve the first choice's text.
    pub async fn generate_completion(&self, input: CompletionInput) -> CompletionOutcome {
        let request = self.build_request(&input);
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            ?request,
            "chat request"
        );

        match self.client.create_chat_completion(&request).await {
            Ok(response) => CompletionOutcome::Completed(CompletionResult {
                result: response.first_choice_text(),
            }),
            Err(err) => CompletionOutcome::classify(err),
        }
    }
}

impl CompletionService<OpenAIClient> {
    /// OpenAI-backed service using the default prompts and credentials from the environment.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(OpenAIClient::from_env()?, ServiceConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChatCompletionResponse, Choice, ResponseMessage, Role};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    enum Reply {
        Text(&'static str),
        Empty,
        Remote(u16, Value),
        Config(&'static str),
    }

    struct RecordingClient {
        reply: Reply,
        requests: Mutex<Vec<ChatCompletionRequest>>,
        peak_recorded: AtomicUsize,
    }

    impl RecordingClient {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                requests: Mutex::new(Vec::new()),
                peak_recorded: AtomicUsize::new(0),
            })
        }

        fn requests(&self) -> Vec<ChatCompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ChatCompletionClient for RecordingClient {
        async fn create_chat_completion(
            &self,
            request: &ChatCompletionRequest,
        ) -> Result<ChatCompletionResponse, Error> {
            self.requests.lock().unwrap().push(request.clone());
            tokio::task::yield_now().await;
            let recorded = self.requests.lock().unwrap().len();
            self.peak_recorded.fetch_max(recorded, Ordering::SeqCst);
            match &self.reply {
                Reply::Text(text) => Ok(ChatCompletionResponse {
                    choices: vec![Choice {
                        message: Some(ResponseMessage {
                            role: Some(Role::Assistant),
                            content: Some(text.to_string()),
                        }),
                        ..Choice::default()
                    }],
                    ..ChatCompletionResponse::default()
                }),
                Reply::Empty => Ok(ChatCompletionResponse::default()),
                Reply::Remote(status, payload) => Err(Error::remote(*status, payload.clone())),
                Reply::Config(msg) => Err(Error::config(*msg)),
            }
        }
    }

    fn test_config() -> ServiceConfig {
        ServiceConfig::default()
            .with_model("test-model")
            .with_instruction("INSTRUCTION")
            .with_context("CONTEXT")
    }

    fn service(reply: Reply) -> (CompletionService<Arc<RecordingClient>>, Arc<RecordingClient>) {
        let client = RecordingClient::new(reply);
        (CompletionService::new(client.clone(), test_config()), client)
    }

    fn contents(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn test_blank_prompt_keeps_only_fixed_segments() {
        let (svc, _) = service(Reply::Empty);
        for input in [
            CompletionInput::default(),
            CompletionInput::prompt(""),
            CompletionInput::prompt("   \n\t"),
        ] {
            let messages = svc.assemble_messages(&input);
            assert_eq!(contents(&messages), vec!["INSTRUCTION", "CONTEXT"]);
            assert!(messages.iter().all(|m| m.role == Role::User));
        }
    }

    #[test]
    fn test_prompt_is_trimmed_and_last() {
        let (svc, _) = service(Reply::Empty);
        let messages = svc.assemble_messages(&CompletionInput::prompt("  what  now?  \n"));
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], Message::user("what  now?"));
    }

    #[test]
    fn test_history_sits_between_context_and_prompt() {
        let (svc, _) = service(Reply::Empty);
        let history = vec![
            Message::user("first"),
            Message::assistant("second"),
            Message::system("third"),
        ];
        let input = CompletionInput::prompt("latest").with_history(history.clone());

        let messages = svc.assemble_messages(&input);
        assert_eq!(
            contents(&messages),
            vec!["INSTRUCTION", "CONTEXT", "first", "second", "third", "latest"]
        );
        assert_eq!(&messages[2..5], history.as_slice());
    }

    #[test]
    fn test_empty_fixed_segments_are_omitted() {
        let config = ServiceConfig::default().with_instruction("").with_context("");
        let svc = CompletionService::new(RecordingClient::new(Reply::Empty), config);

        assert!(svc.assemble_messages(&CompletionInput::default()).is_empty());

        let input = CompletionInput::default().with_history(vec![Message::assistant("only")]);
        assert_eq!(contents(&svc.assemble_messages(&input)), vec!["only"]);
    }

    #[test]
    fn test_build_request_uses_configured_model() {
        let (svc, _) = service(Reply::Empty);
        let request = svc.build_request(&CompletionInput::prompt("hi"));
        assert_eq!(request.model, "test-model");
        assert_eq!(request.messages.len(), 3);
    }

    #[tokio::test]
    async fn test_completion_returns_first_choice() {
        let (svc, client) = service(Reply::Text("assessment"));
        let outcome = svc.generate_completion(CompletionInput::prompt("go")).await;

        assert_eq!(
            outcome,
            CompletionOutcome::Completed(CompletionResult {
                result: "assessment".to_string()
            })
        );
        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "test-model");
    }

    #[tokio::test]
    async fn test_empty_choices_resolve_to_empty_result() {
        let (svc, _) = service(Reply::Empty);
        let outcome = svc.generate_completion(CompletionInput::default()).await;
        assert_eq!(
            outcome,
            CompletionOutcome::Completed(CompletionResult::default())
        );
    }

    #[tokio::test]
    async fn test_remote_rejection_is_passed_through() {
        let (svc, _) = service(Reply::Remote(429, json!({"msg": "rate limited"})));
        let outcome = svc.generate_completion(CompletionInput::prompt("go")).await;

        assert_eq!(
            outcome,
            CompletionOutcome::RemoteRejected {
                status: 429,
                payload: json!({"msg": "rate limited"})
            }
        );
        assert_eq!(outcome.into_legacy(), Ok(json!({"msg": "rate limited"})));
    }

    #[tokio::test]
    async fn test_local_failure_is_normalized() {
        let (svc, _) = service(Reply::Config("socket hang up"));
        let outcome = svc.generate_completion(CompletionInput::prompt("go")).await;

        assert_eq!(outcome, CompletionOutcome::Failed(ServiceError::request_failed()));
        let err = outcome.into_legacy().unwrap_err();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"error": {"message": "An error occurred during your request."}})
        );
    }

    #[test]
    fn test_legacy_completed_shape() {
        let outcome = CompletionOutcome::Completed(CompletionResult {
            result: "text".to_string(),
        });
        assert!(outcome.is_completed());
        assert_eq!(outcome.into_legacy(), Ok(json!({"result": "text"})));
    }

    #[tokio::test]
    async fn test_concurrent_calls_do_not_share_prompts() {
        let (svc, client) = service(Reply::Text("ok"));
        let prompts = ["alpha", "beta", "gamma", "delta"];

        let outcomes = join_four(&svc, &prompts).await;
        assert!(outcomes.iter().all(CompletionOutcome::is_completed));
        // Every call was in flight before the first one replied.
        assert_eq!(client.peak_recorded.load(Ordering::SeqCst), prompts.len());

        let mut last: Vec<String> = client
            .requests()
            .into_iter()
            .map(|req| {
                assert_eq!(req.messages.len(), 3);
                assert_eq!(req.messages[0].content, "INSTRUCTION");
                assert_eq!(req.messages[1].content, "CONTEXT");
                req.messages[2].content.clone()
            })
            .collect();
        last.sort();
        assert_eq!(last, vec!["alpha", "beta", "delta", "gamma"]);
    }

    async fn join_four(
        svc: &CompletionService<Arc<RecordingClient>>,
        prompts: &[&str],
    ) -> Vec<CompletionOutcome> {
        let (a, b, c, d) = tokio::join!(
            svc.generate_completion(CompletionInput::prompt(prompts[0])),
            svc.generate_completion(CompletionInput::prompt(prompts[1])),
            svc.generate_completion(CompletionInput::prompt(prompts[2])),
            svc.generate_completion(CompletionInput::prompt(prompts[3])),
        );
        vec![a, b, c, d]
    }
}
