use futures::{channel::mpsc::Sender, SinkExt};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Router,
};
use axum_github_webhook_extract::{GithubEvent, GithubToken as GitHubSecret};
use tower_http::trace::TraceLayer;

use crate::event::{PullRequestEvent, PullRequestWebhook};

#[derive(Debug, Clone)]
struct AppState {
    sender: Sender<PullRequestEvent>,
    secret: GitHubSecret,
}

impl FromRef<AppState> for GitHubSecret {
    fn from_ref(state: &AppState) -> GitHubSecret {
        state.secret.clone()
    }
}

async fn handle(
    State(mut state): State<AppState>,
    GithubEvent(payload): GithubEvent<PullRequestWebhook>,
) -> Result<String, (StatusCode, String)> {
    let event = PullRequestEvent::from(payload);
    tracing::info!("Received {:?} event for {event}", event.action);
    state
        .sender
        .send(event)
        .await
        .map(|()| "enqueued".to_owned())
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error: Failed to send event".to_owned(),
            )
        })
}

pub(crate) fn listen(sender: Sender<PullRequestEvent>, secret: SecretString) -> axum::Router {
    let state = AppState {
        sender,
        secret: GitHubSecret(Arc::new(secret.expose_secret().to_owned())),
    };
    std::mem::drop(secret);

    Router::new()
        .route("/", post(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
