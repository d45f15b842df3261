use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Error;

/// The fixed instruction sent as the system message with every request.
const SYSTEM_PROMPT: &str = "You are a helpful assistant that ONLY returns valid, \
    self-contained Go code. Do not include explanations or markdown formatting.";

// Models sometimes wrap output in a code fence or trail off into HTML
// comments anyway; these stop sequences cut the completion short there.
const STOP_SEQUENCES: [&str; 2] = ["```", "<!--"];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct RequestBody {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    stop: [&'static str; 2],
}

#[derive(Debug, Deserialize, Clone)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize, Clone)]
struct ResponseBody {
    choices: Vec<Choice>,
}

/// Status and raw body of one completed HTTP exchange.
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// The one network capability the client needs: POST a JSON payload and
/// get the full response back. Tests swap in a scripted implementation
/// instead of hitting the real API.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, url: &str, api_key: &str, body: String) -> Result<HttpResponse, Error>;
}

/// Live transport backed by `reqwest`. No retries and no timeout beyond
/// what reqwest defaults to; the process blocks until the API answers.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &str, api_key: &str, body: String) -> Result<HttpResponse, Error> {
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

/// `ApiClient` sends a single chat completion request to an OpenAI
/// compatible API and returns the generated code.
///
/// It builds a fixed-shape request body from the configured prompt (a
/// system instruction plus the user prompt, deterministic sampling),
/// posts it through the supplied transport, and extracts the first
/// choice's message content from the response. Every failure along the
/// way surfaces as a distinct [`Error`] kind.
pub struct ApiClient<T: Transport> {
    config: Config,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: Config, transport: T) -> Self {
        ApiClient { config, transport }
    }

    /// Runs the single request/response exchange.
    ///
    /// # Returns:
    /// - `Result<String>`: the trimmed content of the first choice on
    ///   success, or the error that stopped the sequence (request
    ///   serialization, network failure, non-success status with the
    ///   body echoed, decode failure, or an empty choices array).
    pub async fn generate(&self) -> Result<String, Error> {
        let url = format!("{}/v1/chat/completions", self.config.api);
        let request = self.build_request_body();
        let body = serde_json::to_string(&request).map_err(Error::Serialize)?;

        let response = self
            .transport
            .post(&url, &self.config.api_key, body)
            .await?;
        if !response.status.is_success() {
            return Err(Error::Api {
                status: response.status,
                body: response.body,
            });
        }

        extract_content(&response.body)
    }

    /// Constructs the request body: exactly two messages (the fixed
    /// system instruction, then the user's prompt verbatim), temperature
    /// pinned to zero for reproducibility, and the fence/comment stop
    /// sequences.
    fn build_request_body(&self) -> RequestBody {
        RequestBody {
            model: self.config.model_id.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: self.config.prompt.clone(),
                },
            ],
            temperature: 0.0,
            stop: STOP_SEQUENCES,
        }
    }
}

/// Parses the response body and pulls out the first choice's message
/// content, trimmed of surrounding whitespace. A well-formed response
/// with no choices is its own error kind, distinct from a decode
/// failure.
fn extract_content(response_text: &str) -> Result<String, Error> {
    let response: ResponseBody = serde_json::from_str(response_text).map_err(Error::Decode)?;
    let choice = response.choices.into_iter().next().ok_or(Error::NoChoices)?;
    Ok(choice.message.content.trim().to_string())
}
