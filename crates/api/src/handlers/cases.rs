//! Handlers for ticket and PQR dashboard counts.

use axum::Json;
use heliotrack_core::cases::{self, PqrSummary, TicketSummary};
use heliotrack_core::ingest;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::DataResponse;

/// Body for `POST /cases/tickets/summary`.
#[derive(Debug, Deserialize, Validate)]
pub struct TicketsRequest {
    #[validate(length(max = 10000))]
    pub tickets: Vec<serde_json::Value>,
}

/// Body for `POST /cases/pqrs/summary`.
#[derive(Debug, Deserialize, Validate)]
pub struct PqrsRequest {
    #[validate(length(max = 10000))]
    pub pqrs: Vec<serde_json::Value>,
}

/// POST /api/v1/cases/tickets/summary
pub async fn tickets_summary(
    JsonBody(body): JsonBody<TicketsRequest>,
) -> AppResult<Json<DataResponse<TicketSummary>>> {
    body.validate()?;
    let tickets = ingest::normalize_all(&body.tickets, ingest::normalize_ticket)?;
    Ok(Json(DataResponse {
        data: cases::summarize_tickets(&tickets),
    }))
}

/// POST /api/v1/cases/pqrs/summary
pub async fn pqrs_summary(
    JsonBody(body): JsonBody<PqrsRequest>,
) -> AppResult<Json<DataResponse<PqrSummary>>> {
    body.validate()?;
    let pqrs = ingest::normalize_all(&body.pqrs, ingest::normalize_pqr)?;
    Ok(Json(DataResponse {
        data: cases::summarize_pqrs(&pqrs),
    }))
}
