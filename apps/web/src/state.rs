use std::sync::Arc;

use chrono::Duration;

use crate::catalog::CareerCatalog;
use crate::config::Config;
use crate::matching::matcher::CareerMatcher;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only career dataset, loaded once at startup.
    pub catalog: Arc<CareerCatalog>,
    /// Pluggable matcher. Default: OverlapMatcher. Swap via PATHWISE_MATCHER.
    pub matcher: Arc<dyn CareerMatcher>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config, catalog: CareerCatalog, matcher: Arc<dyn CareerMatcher>) -> Self {
        let sessions = SessionStore::new(Duration::minutes(config.session_idle_minutes));
        AppState {
            config,
            catalog: Arc::new(catalog),
            matcher,
            sessions,
        }
    }
}
