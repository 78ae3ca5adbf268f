use anyhow::{Context, Result};
use octocrab::models::AppId;
use secrecy::{ExposeSecret, SecretString};

use crate::github::OctocrabApp;
use crate::utils::get_credential;

use super::ServeArgs;

/// Build the App client. If the key has not been passed via CLI or env, get it as a credential.
pub(crate) fn github_app(args: &mut ServeArgs) -> Result<OctocrabApp> {
    let app_key = args
        .app_key
        .take()
        .map(SecretString::new)
        .ok_or(())
        .or_else(|()| get_credential("app_key"))?;
    app_from_pem(args.app_id, &app_key)
}

fn app_from_pem(app_id: u64, app_key: &SecretString) -> Result<OctocrabApp> {
    let key = jsonwebtoken::EncodingKey::from_rsa_pem(app_key.expose_secret().as_bytes())
        .context("App key is not a valid RSA private key")?;
    tracing::info!("Authenticating as GitHub App {app_id}");
    OctocrabApp::new(AppId(app_id), key)
}
