//! Canonical project record.
//!
//! Produced by [`crate::ingest::normalize_project`] from whichever record
//! shape the backend sent. Dates are kept as the raw strings received so
//! the calculator can tell "missing" from "unparseable" when diagnosing.

use serde::{Deserialize, Serialize};

use crate::lifecycle::{
    STATE_APPLICATION_SUBMITTED, STATE_COMMISSIONING, STATE_CONNECTED, STATE_EQUIPMENT_PURCHASE,
    STATE_INSPECTION, STATE_INSPECTION_REQUESTED, STATE_INSTALLATION, STATE_METER_INSTALLATION,
    STATE_OPERATOR_APPROVAL, STATE_STARTED, STATE_TECHNICAL_REVIEW,
};
use crate::types::StateId;

/// Canonical field name holding the entered date of each progress state.
const ENTERED_DATE_FIELDS: &[(StateId, &str)] = &[
    (STATE_STARTED, "start_date"),
    (STATE_APPLICATION_SUBMITTED, "application_submitted_date"),
    (STATE_TECHNICAL_REVIEW, "technical_review_date"),
    (STATE_OPERATOR_APPROVAL, "operator_approval_date"),
    (STATE_EQUIPMENT_PURCHASE, "equipment_purchase_date"),
    (STATE_INSTALLATION, "installation_date"),
    (STATE_INSPECTION_REQUESTED, "inspection_request_date"),
    (STATE_INSPECTION, "inspection_date"),
    (STATE_METER_INSTALLATION, "meter_installation_date"),
    (STATE_COMMISSIONING, "commissioning_date"),
    (STATE_CONNECTED, "connection_date"),
];

/// Name of the field recording entry into `state_id`.
pub fn entered_date_field(state_id: StateId) -> Option<&'static str> {
    ENTERED_DATE_FIELDS
        .iter()
        .find(|(id, _)| *id == state_id)
        .map(|(_, field)| *field)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Business code, e.g. `"SOL-2025-014"`.
    pub id: String,
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub city: Option<String>,
    pub current_state_id: Option<StateId>,

    pub start_date: Option<String>,
    pub application_submitted_date: Option<String>,
    pub technical_review_date: Option<String>,
    pub operator_approval_date: Option<String>,
    pub equipment_purchase_date: Option<String>,
    pub installation_date: Option<String>,
    pub inspection_request_date: Option<String>,
    pub inspection_date: Option<String>,
    pub meter_installation_date: Option<String>,
    pub commissioning_date: Option<String>,
    pub connection_date: Option<String>,

    pub estimated_completion_date: Option<String>,
}

impl Project {
    /// Create an empty project with only its business code set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Raw date recorded when the project entered `state_id`.
    ///
    /// Only states 1..=11 have an entered-date field; any other id (the
    /// exception states included) returns `None`.
    pub fn entered_date(&self, state_id: StateId) -> Option<&str> {
        let field = match state_id {
            STATE_STARTED => &self.start_date,
            STATE_APPLICATION_SUBMITTED => &self.application_submitted_date,
            STATE_TECHNICAL_REVIEW => &self.technical_review_date,
            STATE_OPERATOR_APPROVAL => &self.operator_approval_date,
            STATE_EQUIPMENT_PURCHASE => &self.equipment_purchase_date,
            STATE_INSTALLATION => &self.installation_date,
            STATE_INSPECTION_REQUESTED => &self.inspection_request_date,
            STATE_INSPECTION => &self.inspection_date,
            STATE_METER_INSTALLATION => &self.meter_installation_date,
            STATE_COMMISSIONING => &self.commissioning_date,
            STATE_CONNECTED => &self.connection_date,
            _ => return None,
        };
        field.as_deref()
    }

    /// Mutable slot for the entered date of `state_id`, if it has one.
    pub fn entered_date_mut(&mut self, state_id: StateId) -> Option<&mut Option<String>> {
        let field = match state_id {
            STATE_STARTED => &mut self.start_date,
            STATE_APPLICATION_SUBMITTED => &mut self.application_submitted_date,
            STATE_TECHNICAL_REVIEW => &mut self.technical_review_date,
            STATE_OPERATOR_APPROVAL => &mut self.operator_approval_date,
            STATE_EQUIPMENT_PURCHASE => &mut self.equipment_purchase_date,
            STATE_INSTALLATION => &mut self.installation_date,
            STATE_INSPECTION_REQUESTED => &mut self.inspection_request_date,
            STATE_INSPECTION => &mut self.inspection_date,
            STATE_METER_INSTALLATION => &mut self.meter_installation_date,
            STATE_COMMISSIONING => &mut self.commissioning_date,
            STATE_CONNECTED => &mut self.connection_date,
            _ => return None,
        };
        Some(field)
    }

    /// Display label: the project name when present, else its code.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.id)
    }
}
