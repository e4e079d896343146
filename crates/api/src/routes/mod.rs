pub mod cases;
pub mod catalog;
pub mod health;
pub mod milestones;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /catalog/states                          lifecycle state catalog
/// /catalog/milestone-types                 milestone type catalog
/// /catalog/milestone-types/{id}            resolved milestone type
/// /catalog/document-types                  document type catalog
/// /catalog/document-types/{id}             resolved document type
/// /catalog/cases                           ticket + PQR catalogs
///
/// /projects/progress                       snapshot for one project (POST)
/// /projects/timeline                       lifecycle timeline (POST)
/// /projects/portfolio                      batch snapshots + summary (POST)
///
/// /milestones/summary                      milestone history summary (POST)
///
/// /cases/tickets/summary                   ticket counts (POST)
/// /cases/pqrs/summary                      PQR counts (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/projects", projects::router())
        .nest("/milestones", milestones::router())
        .nest("/cases", cases::router())
}
