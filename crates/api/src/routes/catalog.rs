//! Route definitions for the read-only reference catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes mounted at `/catalog`.
///
/// ```text
/// GET  /states                  -> list_states
/// GET  /milestone-types         -> list_milestone_types
/// GET  /milestone-types/{id}    -> get_milestone_type
/// GET  /document-types          -> list_document_types
/// GET  /document-types/{id}     -> get_document_type
/// GET  /cases                   -> case_catalogs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/states", get(catalog::list_states))
        .route("/milestone-types", get(catalog::list_milestone_types))
        .route("/milestone-types/{id}", get(catalog::get_milestone_type))
        .route("/document-types", get(catalog::list_document_types))
        .route("/document-types/{id}", get(catalog::get_document_type))
        .route("/cases", get(catalog::case_catalogs))
}
