use crate::claims::{Claim, GitPoapRef};
use crate::event::{AccountType, PullRequestAction, PullRequestEvent};

/// Throwaway key, only used to sign JWTs in tests.
pub(crate) const APP_KEY: &str = include_str!("fixtures/app-key.pem");

/// A `pull_request.closed` delivery for a merged PR, trimmed to the fields GitHub always sends.
pub(crate) const PR_MERGED: &str = r#"{
  "action": "closed",
  "number": 42,
  "pull_request": {
    "url": "https://api.github.com/repos/bar/foo/pulls/42",
    "id": 1785212370,
    "node_id": "PR_kwDOH2x5Ks5qaBTS",
    "html_url": "https://github.com/bar/foo/pull/42",
    "number": 42,
    "state": "closed",
    "locked": false,
    "title": "Fix linter warnings",
    "user": {
      "login": "octo-contributor",
      "id": 5678,
      "node_id": "MDQ6VXNlcjU2Nzg=",
      "type": "User",
      "site_admin": false
    },
    "body": null,
    "created_at": "2024-03-01T10:00:00Z",
    "updated_at": "2024-03-02T12:00:00Z",
    "closed_at": "2024-03-02T12:00:00Z",
    "merged_at": "2024-03-02T12:00:00Z",
    "merge_commit_sha": "a4786471ee4d4e894fec150e426c3551db0f31e0",
    "draft": false,
    "merged": true,
    "merged_by": {
      "login": "bar",
      "id": 1234,
      "node_id": "MDEyOk9yZ2FuaXphdGlvbjEyMzQ=",
      "type": "User",
      "site_admin": false
    },
    "commits": 1,
    "additions": 3,
    "deletions": 3,
    "changed_files": 1
  },
  "repository": {
    "id": 526612010,
    "node_id": "R_kgDOH2x5Kg",
    "name": "foo",
    "full_name": "bar/foo",
    "private": false,
    "owner": {
      "login": "bar",
      "id": 1234,
      "node_id": "MDEyOk9yZ2FuaXphdGlvbjEyMzQ=",
      "type": "Organization",
      "site_admin": false
    },
    "html_url": "https://github.com/bar/foo",
    "default_branch": "main"
  },
  "sender": {
    "login": "bar",
    "id": 1234,
    "node_id": "MDEyOk9yZ2FuaXphdGlvbjEyMzQ=",
    "type": "User",
    "site_admin": false
  },
  "installation": {
    "id": 31337,
    "node_id": "MDIzOkludGVncmF0aW9uSW5zdGFsbGF0aW9uMzEzMzc="
  }
}"#;

/// The event [`PR_MERGED`] narrows to.
pub(crate) fn merged_pr() -> PullRequestEvent {
    PullRequestEvent {
        action: PullRequestAction::Closed,
        merged: true,
        author_type: AccountType::User,
        author_login: "octo-contributor".to_owned(),
        repo: "foo".to_owned(),
        owner: "bar".to_owned(),
        number: 42,
        installation: Some(31_337),
    }
}

pub(crate) fn claim(id: u64, gitpoap_id: u64, name: &str) -> Claim {
    Claim {
        id,
        git_poap: GitPoapRef {
            id: gitpoap_id,
            poap_event_id: 5000 + gitpoap_id,
            threshold: 1,
        },
        name: name.to_owned(),
        image_url: format!("https://img/{gitpoap_id}.png"),
        description: format!("{name} description"),
    }
}
