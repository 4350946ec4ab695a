use crate::config::Config;
use crate::content::{ContentSections, Profile};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only content table; validated once at startup.
    pub content: &'static ContentSections,
    pub profile: &'static Profile,
}
