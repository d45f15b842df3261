use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::error::Error;

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "vibe",
    version = "0.1.0",
    about = "Generates self-contained Go code from a prompt with the OpenAI chat API and writes it to a file."
)]
pub struct Config {
    #[clap(
        value_name = "OUTPUT_FILE",
        help = "The file to write the generated code to"
    )]
    pub output: PathBuf,

    #[clap(
        value_name = "PROMPT",
        help = "The prompt describing the code to generate"
    )]
    pub prompt: String,

    #[clap(
        long("key"),
        value_name = "API_KEY",
        help = "Sets the API key for the remote endpoint; if absent, the envvar 'OPENAI_API_KEY' is checked",
        default_value = ""
    )]
    pub api_key: String,

    #[clap(
        long("api"),
        value_name = "URL",
        help = "The API endpoint base URL to use.",
        default_value = "https://api.openai.com"
    )]
    pub api: String,

    #[clap(
        long,
        value_name = "MODEL_ID",
        help = "Sets the model to use for generating completions with the API",
        default_value = "gpt-4.1"
    )]
    pub model_id: String,
}

impl Config {
    pub fn from_cli() -> Result<Self, Error> {
        let mut config = Config::parse();
        config.api_key = resolve_api_key(config.api_key, env::var("OPENAI_API_KEY").ok())?;
        Ok(config)
    }
}

/// Picks the credential: an explicit `--key` wins, otherwise fall back
/// to the environment. Empty strings count as absent on both sides.
fn resolve_api_key(flag: String, env_value: Option<String>) -> Result<String, Error> {
    if !flag.is_empty() {
        return Ok(flag);
    }
    match env_value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(Error::MissingApiKey),
    }
}
