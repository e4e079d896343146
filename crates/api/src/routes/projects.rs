//! Route definitions for project progress computations.

use axum::routing::post;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes mounted at `/projects`.
///
/// ```text
/// POST /progress    -> progress
/// POST /timeline    -> timeline
/// POST /portfolio   -> portfolio
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress", post(projects::progress))
        .route("/timeline", post(projects::timeline))
        .route("/portfolio", post(projects::portfolio))
}
