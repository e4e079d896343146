use axum::routing::post;
use axum::Router;

use crate::handlers::milestones;
use crate::state::AppState;

/// Milestone routes mounted at `/milestones`.
///
/// ```text
/// POST /summary   -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/summary", post(milestones::summary))
}
