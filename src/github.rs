use std::future::Future;

use anyhow::{Context, Result};
use jsonwebtoken::EncodingKey;
use octocrab::models::{AppId, InstallationId};
use octocrab::Octocrab;
use secrecy::SecretString;

use crate::event::PullRequestEvent;

/// What the bot needs from GitHub while handling an event.
pub(crate) trait GitHubApp {
    /// A JWT identifying the App itself, not one of its installations.
    fn app_token(&self) -> Result<SecretString>;

    /// Comment on the event’s PR, returning the comment’s URL.
    fn create_comment(
        &self,
        event: &PullRequestEvent,
        body: String,
    ) -> impl Future<Output = Result<String>> + Send;
}

pub(crate) struct OctocrabApp {
    app_id: AppId,
    key: EncodingKey,
    client: Octocrab,
}

impl OctocrabApp {
    pub(crate) fn new(app_id: AppId, key: EncodingKey) -> Result<Self> {
        let client = Octocrab::builder().app(app_id, key.clone()).build()?;
        Ok(OctocrabApp {
            app_id,
            key,
            client,
        })
    }
}

impl GitHubApp for OctocrabApp {
    fn app_token(&self) -> Result<SecretString> {
        let jwt = octocrab::auth::create_jwt(self.app_id, &self.key)?;
        Ok(SecretString::new(jwt))
    }

    async fn create_comment(&self, event: &PullRequestEvent, body: String) -> Result<String> {
        let installation = event
            .installation
            .with_context(|| format!("Event for {event} carries no installation"))?;
        let comment = self
            .client
            .installation(InstallationId(installation))
            .issues(&event.owner, &event.repo)
            .create_comment(event.number, body)
            .await?;
        Ok(comment.html_url.to_string())
    }
}
