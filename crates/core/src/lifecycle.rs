//! Project lifecycle state catalog.
//!
//! The 13 states a solar installation project moves through, from signing
//! to grid connection, plus the two exception states. The integer ids are a
//! fixed contract with the persistence backend and must not be renumbered.

use serde::Serialize;

use crate::types::StateId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATE_STARTED: StateId = 1;
pub const STATE_APPLICATION_SUBMITTED: StateId = 2;
pub const STATE_TECHNICAL_REVIEW: StateId = 3;
pub const STATE_OPERATOR_APPROVAL: StateId = 4;
pub const STATE_EQUIPMENT_PURCHASE: StateId = 5;
pub const STATE_INSTALLATION: StateId = 6;
pub const STATE_INSPECTION_REQUESTED: StateId = 7;
pub const STATE_INSPECTION: StateId = 8;
pub const STATE_METER_INSTALLATION: StateId = 9;
pub const STATE_COMMISSIONING: StateId = 10;
/// The only successful terminal state.
pub const STATE_CONNECTED: StateId = 11;
pub const STATE_SUSPENDED: StateId = 12;
pub const STATE_CANCELLED: StateId = 13;

/// Last state of the normal (non-exception) progression.
pub const LAST_PROGRESS_STATE: StateId = STATE_CONNECTED;

/// Display name used for ids missing from the catalog.
pub const UNKNOWN_STATE_NAME: &str = "Desconocido";

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One stage of the regulatory/installation progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifecycleState {
    pub id: StateId,
    pub name: &'static str,
    /// Expected days in this state; `None` for terminal states.
    pub expected_duration_days: Option<i64>,
}

/// All lifecycle states, ordered by id.
pub const STATE_CATALOG: &[LifecycleState] = &[
    LifecycleState {
        id: STATE_STARTED,
        name: "Inicio de proyecto",
        expected_duration_days: Some(5),
    },
    LifecycleState {
        id: STATE_APPLICATION_SUBMITTED,
        name: "Solicitud radicada",
        expected_duration_days: Some(15),
    },
    LifecycleState {
        id: STATE_TECHNICAL_REVIEW,
        name: "Revisión técnica",
        expected_duration_days: Some(10),
    },
    LifecycleState {
        id: STATE_OPERATOR_APPROVAL,
        name: "Aprobación del operador",
        expected_duration_days: Some(10),
    },
    LifecycleState {
        id: STATE_EQUIPMENT_PURCHASE,
        name: "Compra de equipos",
        expected_duration_days: Some(15),
    },
    LifecycleState {
        id: STATE_INSTALLATION,
        name: "Instalación",
        expected_duration_days: Some(10),
    },
    LifecycleState {
        id: STATE_INSPECTION_REQUESTED,
        name: "Solicitud de inspección",
        expected_duration_days: Some(7),
    },
    LifecycleState {
        id: STATE_INSPECTION,
        name: "Inspección",
        expected_duration_days: Some(5),
    },
    LifecycleState {
        id: STATE_METER_INSTALLATION,
        name: "Instalación de medidor",
        expected_duration_days: Some(10),
    },
    LifecycleState {
        id: STATE_COMMISSIONING,
        name: "Pruebas y puesta en servicio",
        expected_duration_days: Some(5),
    },
    LifecycleState {
        id: STATE_CONNECTED,
        name: "Conectado",
        expected_duration_days: None,
    },
    LifecycleState {
        id: STATE_SUSPENDED,
        name: "Suspendido",
        expected_duration_days: None,
    },
    LifecycleState {
        id: STATE_CANCELLED,
        name: "Cancelado",
        expected_duration_days: None,
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Look up a state by id.
pub fn find_state(id: StateId) -> Option<&'static LifecycleState> {
    STATE_CATALOG.iter().find(|s| s.id == id)
}

/// Display name for a state id, falling back to [`UNKNOWN_STATE_NAME`].
pub fn state_name(id: StateId) -> &'static str {
    find_state(id).map_or(UNKNOWN_STATE_NAME, |s| s.name)
}

/// Expected duration for a state id, `None` when terminal or unknown.
pub fn expected_duration_days(id: StateId) -> Option<i64> {
    find_state(id).and_then(|s| s.expected_duration_days)
}

/// Whether the state belongs to the normal progression (1..=11).
pub fn is_progress_state(id: StateId) -> bool {
    (STATE_STARTED..=LAST_PROGRESS_STATE).contains(&id)
}

/// Whether the state is one of the two unfavourable exception states.
pub fn is_exception_state(id: StateId) -> bool {
    id == STATE_SUSPENDED || id == STATE_CANCELLED
}

/// Whether the state is terminal (connected, suspended or cancelled).
pub fn is_terminal(id: StateId) -> bool {
    id == STATE_CONNECTED || is_exception_state(id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirteen_states_in_id_order() {
        assert_eq!(STATE_CATALOG.len(), 13);
        for (i, state) in STATE_CATALOG.iter().enumerate() {
            assert_eq!(state.id as usize, i + 1);
        }
    }

    #[test]
    fn only_terminal_states_lack_expected_duration() {
        for state in STATE_CATALOG {
            assert_eq!(
                state.expected_duration_days.is_none(),
                is_terminal(state.id),
                "state {} ({})",
                state.id,
                state.name
            );
        }
    }

    #[test]
    fn inspection_request_expects_seven_days() {
        assert_eq!(expected_duration_days(STATE_INSPECTION_REQUESTED), Some(7));
    }

    #[test]
    fn unknown_state_falls_back() {
        assert!(find_state(0).is_none());
        assert_eq!(state_name(99), UNKNOWN_STATE_NAME);
        assert_eq!(expected_duration_days(-1), None);
    }

    #[test]
    fn connected_is_terminal_but_not_exception() {
        assert!(is_terminal(STATE_CONNECTED));
        assert!(!is_exception_state(STATE_CONNECTED));
        assert!(is_progress_state(STATE_CONNECTED));
    }

    #[test]
    fn exception_states_are_outside_progression() {
        assert!(!is_progress_state(STATE_SUSPENDED));
        assert!(!is_progress_state(STATE_CANCELLED));
        assert!(is_exception_state(STATE_SUSPENDED));
        assert!(is_exception_state(STATE_CANCELLED));
    }
}
