mod api;
mod config;
mod error;
mod output;

use std::process::exit;

use anyhow::Result;

use api::{ApiClient, HttpTransport};
use config::Config;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("ERROR: {}", e);
        exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_cli()?;
    let output_path = config.output.clone();

    let client = ApiClient::new(config, HttpTransport::new());
    let code = client.generate().await?;

    output::write_code(&output_path, &code)?;
    println!("Go code written to {}", output_path.display());
    Ok(())
}
