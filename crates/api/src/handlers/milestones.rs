//! Handlers for milestone and document aggregation.

use axum::Json;
use heliotrack_core::ingest;
use heliotrack_core::milestones::{self, DocumentEntry, MilestoneSummary, MilestoneView};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::DataResponse;

/// Body for `POST /milestones/summary`.
#[derive(Debug, Deserialize, Validate)]
pub struct MilestoneSummaryRequest {
    #[validate(length(max = 2000))]
    pub milestones: Vec<serde_json::Value>,
    /// Documents uploaded directly to the project, outside any milestone.
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub documents: Vec<serde_json::Value>,
    /// User directory used to resolve responsible/participant names.
    #[serde(default)]
    #[validate(length(max = 5000))]
    pub users: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct MilestoneSummaryResponse {
    pub summary: MilestoneSummary,
    /// Milestone history, newest first.
    pub history: Vec<MilestoneView>,
    pub documents: Vec<DocumentEntry>,
}

/// POST /api/v1/milestones/summary
pub async fn summary(
    JsonBody(body): JsonBody<MilestoneSummaryRequest>,
) -> AppResult<Json<DataResponse<MilestoneSummaryResponse>>> {
    body.validate()?;

    let records = ingest::normalize_all(&body.milestones, ingest::normalize_milestone)?;
    let project_documents = ingest::normalize_all(&body.documents, ingest::normalize_document)?;
    let users = ingest::normalize_all(&body.users, ingest::normalize_user)?;

    let summary = milestones::summarize_milestones(&records, &project_documents, &users);
    let history = milestones::milestones_by_date_desc(&records)
        .into_iter()
        .map(|m| milestones::milestone_view(m, &users))
        .collect();
    let documents = milestones::flatten_documents(&records, &project_documents);

    tracing::debug!(
        milestones = summary.milestone_count,
        documents = summary.total_documents,
        "Milestone summary computed"
    );

    Ok(Json(DataResponse {
        data: MilestoneSummaryResponse {
            summary,
            history,
            documents,
        },
    }))
}
