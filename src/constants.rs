pub(crate) const GITPOAP_URL: &str = "https://www.gitpoap.io";
/// Relative to the rewards service’s base URL
pub(crate) const CLAIMS_ENDPOINT: &str = "claims/gitpoap-bot/create";
pub(crate) const BADGE_HEIGHT: &str = "200px";
