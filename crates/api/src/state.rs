use std::sync::Arc;

use heliotrack_core::types::Timestamp;

use crate::config::ServerConfig;

/// Source of "now" for every computation.
///
/// Derived metrics drift forward in real time, so the system clock is
/// sampled once per request and never cached.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(Timestamp),
}

impl Clock {
    pub fn now(&self) -> Timestamp {
        match self {
            Self::System => chrono::Utc::now(),
            Self::Fixed(at) => *at,
        }
    }
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub clock: Clock,
}

impl AppState {
    /// Build state from configuration, pinning the clock when `FIXED_NOW`
    /// was set.
    pub fn new(config: ServerConfig) -> Self {
        let clock = config.fixed_now.map_or(Clock::System, Clock::Fixed);
        Self {
            config: Arc::new(config),
            clock,
        }
    }
}
