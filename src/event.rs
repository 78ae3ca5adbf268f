use std::fmt::Display;

mod github;

pub(crate) use github::{AccountType, PullRequestAction, PullRequestWebhook};

/// The parts of a pull request delivery the bot acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestEvent {
    pub action: PullRequestAction,
    pub merged: bool,
    pub author_type: AccountType,
    pub author_login: String,
    pub repo: String,
    pub owner: String,
    pub number: u64,
    pub installation: Option<u64>,
}

/// Why an event does not earn a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SkipReason {
    NotClosed(PullRequestAction),
    NotMerged,
    BotAuthor(String),
}

impl PullRequestEvent {
    /// `None` when the event should be processed.
    /// Rules are checked in order, the first one that applies wins.
    pub(crate) fn skip_reason(&self) -> Option<SkipReason> {
        if self.action != PullRequestAction::Closed {
            Some(SkipReason::NotClosed(self.action))
        } else if !self.merged {
            Some(SkipReason::NotMerged)
        } else if self.author_type == AccountType::Bot {
            Some(SkipReason::BotAuthor(self.author_login.clone()))
        } else {
            None
        }
    }

    pub(crate) fn html_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/pull/{}",
            self.owner, self.repo, self.number
        )
    }
}

impl From<PullRequestWebhook> for PullRequestEvent {
    fn from(hook: PullRequestWebhook) -> Self {
        PullRequestEvent {
            action: hook.action,
            merged: hook.pull_request.merged.unwrap_or(false),
            author_type: hook.pull_request.user.kind,
            author_login: hook.pull_request.user.login,
            repo: hook.repository.name,
            owner: hook.repository.owner.login,
            number: hook.number,
            installation: hook.installation.map(|i| i.id),
        }
    }
}

impl Display for PullRequestEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotClosed(action) => write!(f, "action is {action:?}, not closed"),
            SkipReason::NotMerged => f.write_str("closed without merge"),
            SkipReason::BotAuthor(login) => write!(f, "PR made by bot \"{login}\""),
        }
    }
}
