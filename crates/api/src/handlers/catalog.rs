//! Handlers for the read-only reference catalogs.
//!
//! The catalogs are compiled into the binary; these endpoints let the front
//! end render labels, icons and colours from the same source of truth the
//! calculations use.

use axum::Json;
use heliotrack_core::cases::{
    CaseLabel, CaseStatus, Priority, PQR_STATUSES, PQR_TYPES, PRIORITIES, TICKET_STATUSES,
    TICKET_TYPES,
};
use heliotrack_core::catalog::{
    self, DocumentType, MilestoneType, ResolvedType, DOCUMENT_TYPES, MILESTONE_TYPES,
};
use heliotrack_core::lifecycle::{self, STATE_CATALOG};
use heliotrack_core::progress::percent_complete;
use heliotrack_core::types::StateId;
use serde::Serialize;

use crate::extract::PathParam;
use crate::response::DataResponse;

/// A lifecycle state with its display percentage.
#[derive(Debug, Serialize)]
pub struct StateEntry {
    pub id: StateId,
    pub name: &'static str,
    pub expected_duration_days: Option<i64>,
    pub percent_complete: u8,
    pub terminal: bool,
}

/// All case-related catalogs in one payload.
#[derive(Debug, Serialize)]
pub struct CaseCatalogs {
    pub ticket_types: &'static [CaseLabel],
    pub ticket_statuses: &'static [CaseStatus],
    pub priorities: &'static [Priority],
    pub pqr_types: &'static [CaseLabel],
    pub pqr_statuses: &'static [CaseStatus],
}

/// GET /api/v1/catalog/states
pub async fn list_states() -> Json<DataResponse<Vec<StateEntry>>> {
    let states = STATE_CATALOG
        .iter()
        .map(|s| StateEntry {
            id: s.id,
            name: s.name,
            expected_duration_days: s.expected_duration_days,
            percent_complete: percent_complete(s.id),
            terminal: lifecycle::is_terminal(s.id),
        })
        .collect();
    Json(DataResponse { data: states })
}

/// GET /api/v1/catalog/milestone-types
pub async fn list_milestone_types() -> Json<DataResponse<&'static [MilestoneType]>> {
    Json(DataResponse {
        data: MILESTONE_TYPES,
    })
}

/// GET /api/v1/catalog/milestone-types/{id}
///
/// Unknown ids, including ones outside the catalog id range, resolve to the
/// fallback type rather than 404, matching how the dashboard displays them.
pub async fn get_milestone_type(
    PathParam(id): PathParam<i64>,
) -> Json<DataResponse<ResolvedType>> {
    Json(DataResponse {
        data: catalog::resolve_milestone_type(id),
    })
}

/// GET /api/v1/catalog/document-types
pub async fn list_document_types() -> Json<DataResponse<&'static [DocumentType]>> {
    Json(DataResponse {
        data: DOCUMENT_TYPES,
    })
}

/// GET /api/v1/catalog/document-types/{id}
pub async fn get_document_type(
    PathParam(id): PathParam<i64>,
) -> Json<DataResponse<ResolvedType>> {
    Json(DataResponse {
        data: catalog::resolve_document_type(id),
    })
}

/// GET /api/v1/catalog/cases
pub async fn case_catalogs() -> Json<DataResponse<CaseCatalogs>> {
    Json(DataResponse {
        data: CaseCatalogs {
            ticket_types: TICKET_TYPES,
            ticket_statuses: TICKET_STATUSES,
            priorities: PRIORITIES,
            pqr_types: PQR_TYPES,
            pqr_statuses: PQR_STATUSES,
        },
    })
}
