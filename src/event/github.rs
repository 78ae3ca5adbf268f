use serde::Deserialize;

/// A stripped down version of [`octocrab::models::webhook_events::WebhookEvent`].
/// When used in a [`axum::extract::FromRequest`] extractor, it will only match PR events.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PullRequestWebhook {
    /// The action this event represents.
    pub action: PullRequestAction,
    /// The pull request number this event corresponds to.
    pub number: u64,
    /// The repository this event corresponds to
    pub repository: Repository,
    /// The pull request this event corresponds to
    pub pull_request: PullRequest,
    /// The App installation that received the event
    pub installation: Option<Installation>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PullRequestAction {
    Opened,
    Closed,
    Reopened,
    Synchronize,
    Edited,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccountType {
    User,
    Bot,
    Organization,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Repository {
    pub name: String,
    pub owner: Account,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PullRequest {
    /// Only set on `closed` events, `null` on some older payloads
    pub merged: Option<bool>,
    pub user: Account,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Account {
    pub login: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub(crate) struct Installation {
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use crate::fixtures::PR_MERGED;

    use super::*;

    #[test]
    fn test_deserialize() {
        let event = serde_json::from_str::<PullRequestWebhook>(PR_MERGED).unwrap();
        assert_eq!(event.action, PullRequestAction::Closed);
        assert_eq!(event.number, 42);
        assert_eq!(event.repository.name, "foo");
        assert_eq!(event.repository.owner.login, "bar");
        assert_eq!(event.pull_request.merged, Some(true));
        assert_eq!(event.pull_request.user.kind, AccountType::User);
        assert_eq!(event.installation.map(|i| i.id), Some(31_337));
    }

    #[test]
    fn test_deserialize_unknown_variants() {
        let action: PullRequestAction = serde_json::from_str(r#""ready_for_review""#).unwrap();
        assert_eq!(action, PullRequestAction::Other);
        let kind: AccountType = serde_json::from_str(r#""Mannequin""#).unwrap();
        assert_eq!(kind, AccountType::Other);
    }
}
