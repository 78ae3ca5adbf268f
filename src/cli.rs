mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use octocrab_utils::github_app;
pub(crate) use parser::{Cli, Commands, ServeArgs};
pub(crate) use tracing::init as init_tracing;
