use anyhow::Result;
use futures::FutureExt;
use futures::{channel::mpsc::channel, TryFutureExt};
use secrecy::SecretString;
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use crate::claims::RewardsClient;
use crate::cli::{github_app, ServeArgs};
use crate::event::PullRequestEvent;
use crate::processor::EventProcessor;
use crate::utils::get_credential;

mod listener;
mod runner;

pub(crate) async fn serve(mut args: ServeArgs) -> Result<()> {
    let (sender, receiver) = channel::<PullRequestEvent>(32);
    // If secret has not been passed via CLI or env, get it as a credential.
    let secret_token = args
        .secret_token
        .take()
        .map(SecretString::new)
        .ok_or(())
        .or_else(|()| get_credential("webhook_secret"))?;
    let processor = EventProcessor::new(
        RewardsClient::new(args.rewards_config()),
        github_app(&mut args)?,
    );

    let service = listener::listen(sender, secret_token);
    let tcp_listener = TcpListener::bind(&args.addr).await?;
    tracing::info!("Listening on {}", args.addr);

    let mut set: JoinSet<Result<()>> = JoinSet::new();
    set.spawn(axum::serve(tcp_listener, service).into_future().err_into());
    set.spawn(runner::runner(receiver, processor).map(Result::Ok));
    join_all(set).await
}

/// Wait for all tasks, failing on the first task that panics or returns an error.
async fn join_all(mut set: JoinSet<Result<()>>) -> Result<()> {
    while let Some(res) = set.join_next().await {
        res??;
    }
    Ok(())
}
