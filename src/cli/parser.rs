use clap::{Args, Parser, Subcommand};
use reqwest::Url;

use crate::claims::RewardsConfig;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start web hook server
    Serve(ServeArgs),
    /// Print the comment for a claims response (`{"newClaims": [...]}`) read from stdin
    Render,
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    /// IP and port to listen on
    #[arg(default_value = "0.0.0.0:3000")]
    pub(crate) addr: String,
    /// Webhook secret as configured on GitHub
    #[arg(long, env)]
    pub(crate) secret_token: Option<String>,
    /// GitHub App ID
    #[arg(long, env)]
    pub(crate) app_id: u64,
    /// GitHub App private key (PEM)
    #[arg(long, env, hide_env_values = true)]
    pub(crate) app_key: Option<String>,
    /// Base URL of the GitPOAP API
    #[arg(long, env)]
    pub(crate) api_url: Url,
}

impl ServeArgs {
    pub(crate) fn rewards_config(&self) -> RewardsConfig {
        RewardsConfig {
            api_url: self.api_url.clone(),
        }
    }
}
