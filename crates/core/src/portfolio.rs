//! Portfolio-level summary across many projects.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lifecycle::{self, STATE_CANCELLED, STATE_CONNECTED, STATE_SUSPENDED};
use crate::progress::{self, HealthIndicator};
use crate::project::Project;
use crate::types::{StateId, Timestamp};

/// Number of projects sitting in one lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateCount {
    pub state_id: StateId,
    pub name: &'static str,
    pub count: usize,
}

/// Summary of a batch of projects at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub total: usize,
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
    /// Projects past their estimated completion date.
    pub delayed: usize,
    pub connected: usize,
    pub suspended: usize,
    pub cancelled: usize,
    /// Projects without a usable state id.
    pub without_state: usize,
    pub by_state: Vec<StateCount>,
    /// Mean completion percentage, rounded; 0 for an empty batch.
    pub average_percent_complete: u8,
}

/// Summarize `projects` at `now`.
pub fn summarize_portfolio(projects: &[Project], now: Timestamp) -> PortfolioSummary {
    let mut health_counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut state_counts: BTreeMap<StateId, usize> = BTreeMap::new();
    let mut delayed = 0usize;
    let mut without_state = 0usize;
    let mut percent_sum = 0u64;

    for project in projects {
        let health = progress::health_indicator(project, now);
        *health_counts.entry(health.as_str()).or_default() += 1;

        if progress::days_delay(project, now) > 0 {
            delayed += 1;
        }

        match project.current_state_id {
            Some(id) if lifecycle::find_state(id).is_some() => {
                *state_counts.entry(id).or_default() += 1;
                percent_sum += u64::from(progress::percent_complete(id));
            }
            _ => without_state += 1,
        }
    }

    let count_of = |h: HealthIndicator| health_counts.get(h.as_str()).copied().unwrap_or(0);
    let state_count = |id: StateId| state_counts.get(&id).copied().unwrap_or(0);

    let average_percent_complete = if projects.is_empty() {
        0
    } else {
        (percent_sum as f64 / projects.len() as f64).round() as u8
    };

    PortfolioSummary {
        total: projects.len(),
        green: count_of(HealthIndicator::Green),
        yellow: count_of(HealthIndicator::Yellow),
        red: count_of(HealthIndicator::Red),
        delayed,
        connected: state_count(STATE_CONNECTED),
        suspended: state_count(STATE_SUSPENDED),
        cancelled: state_count(STATE_CANCELLED),
        without_state,
        by_state: state_counts
            .iter()
            .map(|(&state_id, &count)| StateCount {
                state_id,
                name: lifecycle::state_name(state_id),
                count,
            })
            .collect(),
        average_percent_complete,
    }
}
