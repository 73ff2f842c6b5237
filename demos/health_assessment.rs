//! Request a health assessment for the sample profile.
//!
//! ```bash
//! export OPENAI_API_KEY=your_api_key_here
//! cargo run --example health_assessment -- "Which intervention should I start with?"
//! ```

use health_completion::{telemetry, CompletionInput, CompletionOutcome, CompletionService, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();
    telemetry::init("debug");

    let service = CompletionService::from_env()?;
    let prompt = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    match service.generate_completion(CompletionInput::prompt(prompt)).await {
        CompletionOutcome::Completed(result) => println!("{}", result.result),
        CompletionOutcome::RemoteRejected { status, payload } => {
            println!("Endpoint rejected the request ({status}): {payload}");
        }
        CompletionOutcome::Failed(err) => println!("{}", err.message()),
    }

    Ok(())
}
