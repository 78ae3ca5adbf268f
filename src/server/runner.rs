use futures::{channel::mpsc::Receiver, StreamExt};
use tracing::Instrument;

use crate::event::PullRequestEvent;
use crate::github::GitHubApp;
use crate::processor::{EventProcessor, Outcome};

pub(crate) async fn runner<G: GitHubApp>(
    mut receiver: Receiver<PullRequestEvent>,
    processor: EventProcessor<G>,
) {
    // loop runs until sender disconnects
    while let Some(event) = receiver.next().await {
        match processor
            .process(&event)
            .instrument(tracing::info_span!("handle_event", pr = %event))
            .await
        {
            Ok(Outcome::Commented { claims, url }) => {
                tracing::info!("Announced {claims} claims at {url}");
            }
            Ok(_) => {}
            Err(error) => tracing::error!("Failed to handle {event}: {error:#}"),
        }
    }
}
