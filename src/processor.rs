use anyhow::Result;

use crate::claims::{ClaimRequest, RewardsClient};
use crate::comment;
use crate::event::{PullRequestEvent, SkipReason};
use crate::github::GitHubApp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Skipped(SkipReason),
    NoClaims,
    Commented { claims: usize, url: String },
}

pub(crate) struct EventProcessor<G> {
    rewards: RewardsClient,
    github: G,
}

impl<G: GitHubApp> EventProcessor<G> {
    pub(crate) fn new(rewards: RewardsClient, github: G) -> Self {
        EventProcessor { rewards, github }
    }

    /// Filter, fetch claims, then render and post, each step gating the next.
    pub(crate) async fn process(&self, event: &PullRequestEvent) -> Result<Outcome> {
        if let Some(reason) = event.skip_reason() {
            tracing::info!("Skipping {event}: {reason}");
            return Ok(Outcome::Skipped(reason));
        }
        tracing::info!("Handling newly merged PR: {}", event.html_url());

        let token = self.github.app_token()?;
        let claims = self
            .rewards
            .fetch_claims(&ClaimRequest::from(event), &token)
            .await?;
        if claims.is_empty() {
            tracing::info!("No new claims were created by {event}");
            return Ok(Outcome::NoClaims);
        }
        tracing::info!("{} new claims were created by {event}", claims.len());

        let body = comment::render(&claims)?;
        let url = self.github.create_comment(event, body).await?;
        tracing::info!("Posted comment about new claims: {url}");
        Ok(Outcome::Commented {
            claims: claims.len(),
            url,
        })
    }
}
