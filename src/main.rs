#![warn(clippy::pedantic)]

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;

mod claims;
mod cli;
mod comment;
mod constants;
mod event;
#[cfg(test)]
mod fixtures;
mod github;
mod processor;
mod server;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Serve(args) => {
            server::serve(args).await?;
        }
        cli::Commands::Render => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            print!("{}", render_response(&input)?);
        }
    }
    Ok(())
}

/// Preview what would be posted for a rewards service response.
fn render_response(json: &str) -> Result<String> {
    let claims::CreateClaimsResponse { new_claims } =
        serde_json::from_str(json).context("Input is not a claims response")?;
    comment::render(&new_claims)
}
