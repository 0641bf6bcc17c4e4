use std::sync::Arc;

use crate::config::Config;
use crate::matching::engine::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Retained for handlers that need deployment settings (none do today).
    #[allow(dead_code)]
    pub config: Config,
    /// Process-wide scoring engine. Read-only after construction; holds the
    /// once-loaded embedding model handle referenced by every request.
    pub engine: Arc<MatchEngine>,
}
