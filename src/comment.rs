use anyhow::{ensure, Result};
use askama::Template;

use crate::claims::Claim;
use crate::constants::{BADGE_HEIGHT, GITPOAP_URL};

#[derive(Template)]
#[template(path = "comment.md.j2", escape = "none")]
struct Comment<'a> {
    qualifier: &'a str,
    claims: &'a [Claim],
    gitpoap_url: &'a str,
    badge_height: &'a str,
}

/// Render the comment announcing `claims`, in the order given.
///
/// Callers skip posting when nothing was earned, so an empty slice is a bug.
pub(crate) fn render(claims: &[Claim]) -> Result<String> {
    ensure!(!claims.is_empty(), "Refusing to render a comment without claims");
    let qualifier = if claims.len() > 1 {
        "some GitPOAPs"
    } else {
        "a GitPOAP"
    };
    Ok(Comment {
        qualifier,
        claims,
        gitpoap_url: GITPOAP_URL,
        badge_height: BADGE_HEIGHT,
    }
    .render()?)
}
