use reqwest::{header::ACCEPT, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::constants::CLAIMS_ENDPOINT;
use crate::event::PullRequestEvent;

/// Asks the rewards service to create claims for a merged PR.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClaimRequest {
    pub repo: String,
    pub owner: String,
    pub pull_request_number: u64,
}

impl From<&PullRequestEvent> for ClaimRequest {
    fn from(event: &PullRequestEvent) -> Self {
        ClaimRequest {
            repo: event.repo.clone(),
            owner: event.owner.clone(),
            pull_request_number: event.number,
        }
    }
}

/// The GitPOAP backing a claim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GitPoapRef {
    pub id: u64,
    pub poap_event_id: u64,
    pub threshold: u64,
}

/// A badge earned by the merge.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Claim {
    pub id: u64,
    #[serde(rename = "gitPOAP")]
    pub git_poap: GitPoapRef,
    pub name: String,
    pub image_url: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateClaimsResponse {
    pub new_claims: Vec<Claim>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum FetchError {
    #[error("An issue occurred (response code: {status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("Request to rewards service failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub(crate) struct RewardsConfig {
    /// Base URL of the rewards service
    pub api_url: Url,
}

#[derive(Debug, Clone)]
pub(crate) struct RewardsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RewardsClient {
    pub(crate) fn new(config: RewardsConfig) -> Self {
        let endpoint = format!(
            "{}/{CLAIMS_ENDPOINT}",
            config.api_url.as_str().trim_end_matches('/')
        );
        RewardsClient {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Issue exactly one request, an empty result means nothing was earned.
    pub(crate) async fn fetch_claims(
        &self,
        req: &ClaimRequest,
        token: &SecretString,
    ) -> Result<Vec<Claim>, FetchError> {
        let res = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .bearer_auth(token.expose_secret())
            .json(req)
            .send()
            .await?;
        let status = res.status();
        if status != StatusCode::OK {
            let body = res.text().await?;
            return Err(FetchError::Status { status, body });
        }
        let CreateClaimsResponse { new_claims } = res.json().await?;
        Ok(new_claims)
    }
}
