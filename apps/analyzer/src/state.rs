use crate::analysis::client::CvAnalysisClient;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; analyses share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: CvAnalysisClient,
    pub config: Config,
}
