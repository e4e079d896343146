use axum::routing::post;
use axum::Router;

use crate::handlers::cases;
use crate::state::AppState;

/// Case routes mounted at `/cases`.
///
/// ```text
/// POST /tickets/summary   -> tickets_summary
/// POST /pqrs/summary      -> pqrs_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tickets/summary", post(cases::tickets_summary))
        .route("/pqrs/summary", post(cases::pqrs_summary))
}
