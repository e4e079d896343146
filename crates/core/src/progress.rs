//! Project progress calculator.
//!
//! Pure functions deriving display metrics from a [`Project`] and the
//! current time. Nothing here is stored: every value is recomputed on each
//! read so the figures drift forward with the wall clock.
//!
//! Missing or malformed data never raises. Each metric degrades to zero
//! (or green) so a dashboard can always render a partially synced record;
//! [`diagnose`] reports what was masked.

use serde::{Deserialize, Serialize};

use crate::dates::{self, parse_date, whole_days_between};
use crate::lifecycle::{
    self, find_state, is_exception_state, is_progress_state, STATE_CATALOG, STATE_CONNECTED,
};
use crate::project::{entered_date_field, Project};
use crate::types::{StateId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Completion percentage shown for each progress state.
const PERCENT_BY_STATE: &[(StateId, u8)] = &[
    (1, 5),
    (2, 10),
    (3, 20),
    (4, 30),
    (5, 40),
    (6, 50),
    (7, 70),
    (8, 80),
    (9, 85),
    (10, 95),
    (11, 100),
];

/// Multiple of the expected duration after which a state counts as slow.
pub const SLOW_STATE_FACTOR: f64 = 1.5;

pub const COLOR_GREEN: &str = "#22c55e";
pub const COLOR_YELLOW: &str = "#eab308";
pub const COLOR_RED: &str = "#ef4444";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Traffic-light summary of whether a project is on track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthIndicator {
    Green,
    Yellow,
    Red,
}

impl HealthIndicator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }

    /// Hex colour used by the dashboard badge.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Green => COLOR_GREEN,
            Self::Yellow => COLOR_YELLOW,
            Self::Red => COLOR_RED,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "En tiempo",
            Self::Yellow => "En riesgo",
            Self::Red => "Retrasado",
        }
    }
}

/// Position of a lifecycle step relative to the project's current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

/// A data-quality problem hidden behind a zero-valued metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DataWarning {
    /// The record has no current state.
    MissingState,
    /// The current state id is not in the catalog.
    UnknownState { state_id: StateId },
    /// The entered date for the current state was never recorded.
    MissingEnteredDate {
        state_id: StateId,
        field: String,
    },
    /// A date field holds text that does not parse.
    UnparseableDate {
        field: String,
        value: String,
    },
    /// A date field lies after the current time.
    FutureDate {
        field: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Every derived metric for one project at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub project_id: String,
    pub project_name: String,
    pub state_id: Option<StateId>,
    pub state_name: &'static str,
    pub expected_duration_days: Option<i64>,
    pub days_in_state: i64,
    pub days_total: i64,
    pub days_delay: i64,
    pub percent_complete: u8,
    pub health: HealthIndicator,
    pub health_color: &'static str,
    pub health_label: &'static str,
    pub warnings: Vec<DataWarning>,
}

/// One row of the lifecycle timeline (states 1..=11).
#[derive(Debug, Clone, Serialize)]
pub struct TimelineStep {
    pub state_id: StateId,
    pub name: &'static str,
    pub status: StepStatus,
    pub entered_at: Option<Timestamp>,
    pub expected_duration_days: Option<i64>,
    pub percent_complete: u8,
    /// Days spent so far; only set on the current step.
    pub days_in_state: Option<i64>,
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// Whole days since the project entered its current state.
///
/// Returns 0 for exception, unknown or missing states and when the entered
/// date is absent, unparseable or in the future.
pub fn days_in_current_state(project: &Project, now: Timestamp) -> i64 {
    match project.current_state_id {
        Some(id) if is_progress_state(id) => dates::days_since(project.entered_date(id), now),
        _ => 0,
    }
}

/// Whole days since the project start date, 0 when it is missing.
pub fn days_total(project: &Project, now: Timestamp) -> i64 {
    dates::days_since(project.start_date.as_deref(), now)
}

/// Whole days past the estimated completion date.
///
/// Always 0 once connected; never negative.
pub fn days_delay(project: &Project, now: Timestamp) -> i64 {
    if project.current_state_id == Some(STATE_CONNECTED) {
        return 0;
    }
    match dates::parse_optional(project.estimated_completion_date.as_deref()) {
        Some(estimated) => whole_days_between(estimated, now).max(0),
        None => 0,
    }
}

/// Completion percentage for a state id.
///
/// Exception and unknown states show 0 rather than the last progress
/// reached.
pub fn percent_complete(state_id: StateId) -> u8 {
    PERCENT_BY_STATE
        .iter()
        .find(|(id, _)| *id == state_id)
        .map_or(0, |(_, pct)| *pct)
}

/// Classify a project; the first matching rule wins.
///
/// 1. connected: green
/// 2. suspended or cancelled: red
/// 3. past the estimated completion date: red
/// 4. in the current state longer than 1.5x its expected duration: yellow
/// 5. otherwise green
pub fn health_indicator(project: &Project, now: Timestamp) -> HealthIndicator {
    let state_id = project.current_state_id;

    if state_id == Some(STATE_CONNECTED) {
        return HealthIndicator::Green;
    }
    if state_id.is_some_and(is_exception_state) {
        return HealthIndicator::Red;
    }
    if days_delay(project, now) > 0 {
        return HealthIndicator::Red;
    }

    let expected = state_id.and_then(lifecycle::expected_duration_days);
    if let Some(expected) = expected {
        let days = days_in_current_state(project, now);
        if days as f64 > expected as f64 * SLOW_STATE_FACTOR {
            return HealthIndicator::Yellow;
        }
    }

    HealthIndicator::Green
}

/// Compute every metric for `project` at `now`.
pub fn compute_progress(project: &Project, now: Timestamp) -> ProgressSnapshot {
    let state = project.current_state_id.and_then(find_state);
    let health = health_indicator(project, now);

    ProgressSnapshot {
        project_id: project.id.clone(),
        project_name: project.display_name().to_string(),
        state_id: project.current_state_id,
        state_name: project
            .current_state_id
            .map_or(lifecycle::UNKNOWN_STATE_NAME, lifecycle::state_name),
        expected_duration_days: state.and_then(|s| s.expected_duration_days),
        days_in_state: days_in_current_state(project, now),
        days_total: days_total(project, now),
        days_delay: days_delay(project, now),
        percent_complete: project.current_state_id.map_or(0, percent_complete),
        health,
        health_color: health.color(),
        health_label: health.label(),
        warnings: diagnose(project, now),
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Build the step list for the lifecycle progress bar.
///
/// For suspended or cancelled projects a step counts as completed when its
/// entered date was recorded, since the exact point of interruption is not
/// otherwise known.
pub fn build_timeline(project: &Project, now: Timestamp) -> Vec<TimelineStep> {
    let current = project.current_state_id;

    STATE_CATALOG
        .iter()
        .filter(|s| is_progress_state(s.id))
        .map(|state| {
            let raw = project.entered_date(state.id);
            let entered_at = dates::parse_optional(raw);

            let status = match current {
                Some(STATE_CONNECTED) => StepStatus::Completed,
                Some(c) if is_progress_state(c) => {
                    if state.id < c {
                        StepStatus::Completed
                    } else if state.id == c {
                        StepStatus::Current
                    } else {
                        StepStatus::Pending
                    }
                }
                Some(c) if is_exception_state(c) && entered_at.is_some() => StepStatus::Completed,
                _ => StepStatus::Pending,
            };

            let days_in_state = (status == StepStatus::Current)
                .then(|| days_in_current_state(project, now));

            TimelineStep {
                state_id: state.id,
                name: state.name,
                status,
                entered_at,
                expected_duration_days: state.expected_duration_days,
                percent_complete: percent_complete(state.id),
                days_in_state,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// List the data problems that the metrics above silently absorb.
pub fn diagnose(project: &Project, now: Timestamp) -> Vec<DataWarning> {
    let mut warnings = Vec::new();

    match project.current_state_id {
        None => warnings.push(DataWarning::MissingState),
        Some(id) if find_state(id).is_none() => {
            warnings.push(DataWarning::UnknownState { state_id: id });
        }
        Some(id) => {
            if let Some(field) = entered_date_field(id) {
                match project.entered_date(id).filter(|v| !v.trim().is_empty()) {
                    None => warnings.push(DataWarning::MissingEnteredDate {
                        state_id: id,
                        field: field.to_string(),
                    }),
                    Some(value) => check_date(field, value, now, &mut warnings),
                }
            }
        }
    }

    // State 1 already checked the start date above.
    if project.current_state_id != Some(lifecycle::STATE_STARTED) {
        if let Some(value) = project.start_date.as_deref() {
            check_date("start_date", value, now, &mut warnings);
        }
    }

    if let Some(value) = project.estimated_completion_date.as_deref() {
        if !value.trim().is_empty() && parse_date(value).is_none() {
            warnings.push(DataWarning::UnparseableDate {
                field: "estimated_completion_date".to_string(),
                value: value.to_string(),
            });
        }
    }

    warnings
}

/// Flag an entered-date value that does not parse or lies in the future.
fn check_date(field: &str, value: &str, now: Timestamp, warnings: &mut Vec<DataWarning>) {
    if value.trim().is_empty() {
        return;
    }
    match parse_date(value) {
        None => warnings.push(DataWarning::UnparseableDate {
            field: field.to_string(),
            value: value.to_string(),
        }),
        Some(at) if at > now => warnings.push(DataWarning::FutureDate {
            field: field.to_string(),
            value: value.to_string(),
        }),
        Some(_) => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
