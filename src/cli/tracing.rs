use tracing::Level;
use tracing_subscriber::{filter::Targets, prelude::*};

/// Log at INFO, with request traces and GitHub API calls at DEBUG.
/// `RUST_LOG` replaces these targets entirely, e.g. `RUST_LOG=gitpoap_bot=debug,reqwest=trace`.
pub(crate) fn init() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|directives| directives.parse::<Targets>().ok())
        .unwrap_or_else(default_targets);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn default_targets() -> Targets {
    Targets::new()
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("tower_http::trace::on_request", Level::DEBUG)
        .with_target("tower_http::trace::on_response", Level::DEBUG)
        .with_target("octocrab", Level::DEBUG)
        .with_default(Level::INFO)
}
