use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between parsing the arguments and
/// writing the output file. All of these are fatal; `main` prints the
/// message and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API key must be provided via --key or the OPENAI_API_KEY environment variable")]
    MissingApiKey,

    #[error("Failed to serialize request body: {0}")]
    Serialize(serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success status from the API; the raw response body is kept
    /// verbatim so the remote error detail survives to the user.
    #[error("API request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(serde_json::Error),

    #[error("No choices returned")]
    NoChoices,

    #[error("Failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
