//! Handlers for project progress computations.
//!
//! Records arrive exactly as the persistence backend returned them; each
//! one is normalized, then measured against the clock sampled for this
//! request. Nothing is stored between requests.

use axum::extract::State;
use axum::Json;
use heliotrack_core::ingest;
use heliotrack_core::portfolio::{self, PortfolioSummary};
use heliotrack_core::progress::{self, HealthIndicator, ProgressSnapshot, TimelineStep};
use heliotrack_core::project::Project;
use heliotrack_core::types::{StateId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for `POST /projects/portfolio`.
#[derive(Debug, Deserialize, Validate)]
pub struct PortfolioRequest {
    #[validate(length(max = 5000))]
    pub projects: Vec<serde_json::Value>,
}

/// Query params for `POST /projects/portfolio`.
#[derive(Debug, Deserialize)]
pub struct PortfolioQuery {
    /// Only list snapshots with this health colour. The summary always
    /// covers the whole batch.
    pub health: Option<HealthIndicator>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub project_id: String,
    pub state_id: Option<StateId>,
    pub percent_complete: u8,
    pub computed_at: Timestamp,
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub computed_at: Timestamp,
    pub summary: PortfolioSummary,
    pub projects: Vec<ProgressSnapshot>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/projects/progress
///
/// Returns every derived metric for one project record.
pub async fn progress(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> AppResult<Json<DataResponse<ProgressSnapshot>>> {
    let project = ingest::normalize_project(&body)?;
    let snapshot = snapshot_of(&project, state.clock.now());
    Ok(Json(DataResponse { data: snapshot }))
}

/// POST /api/v1/projects/timeline
pub async fn timeline(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> AppResult<Json<DataResponse<TimelineResponse>>> {
    let project = ingest::normalize_project(&body)?;
    let now = state.clock.now();

    Ok(Json(DataResponse {
        data: TimelineResponse {
            project_id: project.id.clone(),
            state_id: project.current_state_id,
            percent_complete: project.current_state_id.map_or(0, progress::percent_complete),
            computed_at: now,
            steps: progress::build_timeline(&project, now),
        },
    }))
}

/// POST /api/v1/projects/portfolio
///
/// Computes snapshots for a batch of projects plus the portfolio summary.
/// Every project in the batch is measured against the same instant.
pub async fn portfolio(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PortfolioQuery>,
    JsonBody(body): JsonBody<PortfolioRequest>,
) -> AppResult<Json<DataResponse<PortfolioResponse>>> {
    body.validate()?;

    let projects = ingest::normalize_all(&body.projects, ingest::normalize_project)?;
    let now = state.clock.now();

    let summary = portfolio::summarize_portfolio(&projects, now);
    let snapshots: Vec<ProgressSnapshot> = projects
        .iter()
        .map(|p| snapshot_of(p, now))
        .filter(|s| params.health.map_or(true, |h| s.health == h))
        .collect();

    tracing::debug!(
        total = summary.total,
        red = summary.red,
        yellow = summary.yellow,
        "Portfolio computed"
    );

    Ok(Json(DataResponse {
        data: PortfolioResponse {
            computed_at: now,
            summary,
            projects: snapshots,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Compute a snapshot and log any data problems its zeros are hiding.
fn snapshot_of(project: &Project, now: Timestamp) -> ProgressSnapshot {
    let snapshot = progress::compute_progress(project, now);
    if !snapshot.warnings.is_empty() {
        tracing::warn!(
            project_id = %snapshot.project_id,
            warnings = ?snapshot.warnings,
            "Project metrics computed from incomplete data"
        );
    }
    snapshot
}
