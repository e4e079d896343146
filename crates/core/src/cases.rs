//! Support ticket and PQR (petición, queja, reclamo) catalogs.
//!
//! Cases have no state machine: the status is a flat enumerated field set
//! directly by users. This module only resolves catalog ids for display and
//! counts cases for the dashboard cards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{CatalogId, DbId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const FALLBACK_CASE_LABEL: &str = "Desconocido";
pub const FALLBACK_CASE_COLOR: &str = "#94a3b8";

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// A labelled catalog value (case type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseLabel {
    pub id: CatalogId,
    pub name: &'static str,
}

/// A case status; `open` statuses still need attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseStatus {
    pub id: CatalogId,
    pub name: &'static str,
    pub open: bool,
    pub color: &'static str,
}

/// A ticket priority, ordered by `id` (higher is more urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Priority {
    pub id: CatalogId,
    pub name: &'static str,
    pub color: &'static str,
}

pub const TICKET_TYPES: &[CaseLabel] = &[
    CaseLabel {
        id: 1,
        name: "Soporte técnico",
    },
    CaseLabel {
        id: 2,
        name: "Garantía",
    },
    CaseLabel {
        id: 3,
        name: "Mantenimiento",
    },
    CaseLabel {
        id: 4,
        name: "Facturación",
    },
    CaseLabel {
        id: 5,
        name: "Consulta general",
    },
];

pub const TICKET_STATUSES: &[CaseStatus] = &[
    CaseStatus {
        id: 1,
        name: "Abierto",
        open: true,
        color: "#3b82f6",
    },
    CaseStatus {
        id: 2,
        name: "En progreso",
        open: true,
        color: "#f59e0b",
    },
    CaseStatus {
        id: 3,
        name: "En espera",
        open: true,
        color: "#a855f7",
    },
    CaseStatus {
        id: 4,
        name: "Resuelto",
        open: false,
        color: "#22c55e",
    },
    CaseStatus {
        id: 5,
        name: "Cerrado",
        open: false,
        color: "#64748b",
    },
];

pub const PRIORITIES: &[Priority] = &[
    Priority {
        id: 1,
        name: "Baja",
        color: "#22c55e",
    },
    Priority {
        id: 2,
        name: "Media",
        color: "#eab308",
    },
    Priority {
        id: 3,
        name: "Alta",
        color: "#f97316",
    },
    Priority {
        id: 4,
        name: "Urgente",
        color: "#ef4444",
    },
];

pub const PQR_TYPES: &[CaseLabel] = &[
    CaseLabel {
        id: 1,
        name: "Petición",
    },
    CaseLabel {
        id: 2,
        name: "Queja",
    },
    CaseLabel {
        id: 3,
        name: "Reclamo",
    },
    CaseLabel {
        id: 4,
        name: "Sugerencia",
    },
];

pub const PQR_STATUSES: &[CaseStatus] = &[
    CaseStatus {
        id: 1,
        name: "Radicada",
        open: true,
        color: "#3b82f6",
    },
    CaseStatus {
        id: 2,
        name: "En trámite",
        open: true,
        color: "#f59e0b",
    },
    CaseStatus {
        id: 3,
        name: "Respondida",
        open: false,
        color: "#22c55e",
    },
    CaseStatus {
        id: 4,
        name: "Cerrada",
        open: false,
        color: "#64748b",
    },
];

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A comment left on a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseComment {
    pub author: Option<DbId>,
    pub date: Option<String>,
    pub text: String,
}

/// A support ticket. Built by `ingest::normalize_ticket`, which fills
/// missing or null fields with defaults so partially synced records still
/// count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: DbId,
    pub type_id: CatalogId,
    pub status_id: CatalogId,
    pub priority_id: CatalogId,
    pub subject: String,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub client_id: Option<DbId>,
    pub comments: Vec<CaseComment>,
    pub attachments: Vec<String>,
}

/// A petition, complaint or claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pqr {
    pub id: DbId,
    pub type_id: CatalogId,
    pub status_id: CatalogId,
    pub subject: String,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub client_id: Option<DbId>,
    pub comments: Vec<CaseComment>,
    pub attachments: Vec<String>,
}

// ---------------------------------------------------------------------------
// Summaries
// ---------------------------------------------------------------------------

/// Count of cases sharing one catalog value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub id: CatalogId,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    /// Open tickets at the highest priority.
    pub urgent_open: usize,
    pub by_status: Vec<LabelCount>,
    pub by_priority: Vec<LabelCount>,
    pub by_type: Vec<LabelCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PqrSummary {
    pub total: usize,
    pub open: usize,
    pub closed: usize,
    pub by_status: Vec<LabelCount>,
    pub by_type: Vec<LabelCount>,
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn ticket_type_name(id: CatalogId) -> &'static str {
    label_name(TICKET_TYPES, id)
}

pub fn pqr_type_name(id: CatalogId) -> &'static str {
    label_name(PQR_TYPES, id)
}

pub fn find_ticket_status(id: CatalogId) -> Option<&'static CaseStatus> {
    TICKET_STATUSES.iter().find(|s| s.id == id)
}

pub fn find_pqr_status(id: CatalogId) -> Option<&'static CaseStatus> {
    PQR_STATUSES.iter().find(|s| s.id == id)
}

pub fn ticket_status_name(id: CatalogId) -> &'static str {
    find_ticket_status(id).map_or(FALLBACK_CASE_LABEL, |s| s.name)
}

pub fn pqr_status_name(id: CatalogId) -> &'static str {
    find_pqr_status(id).map_or(FALLBACK_CASE_LABEL, |s| s.name)
}

pub fn find_priority(id: CatalogId) -> Option<&'static Priority> {
    PRIORITIES.iter().find(|p| p.id == id)
}

pub fn priority_name(id: CatalogId) -> &'static str {
    find_priority(id).map_or(FALLBACK_CASE_LABEL, |p| p.name)
}

pub fn priority_color(id: CatalogId) -> &'static str {
    find_priority(id).map_or(FALLBACK_CASE_COLOR, |p| p.color)
}

fn label_name(labels: &'static [CaseLabel], id: CatalogId) -> &'static str {
    labels
        .iter()
        .find(|l| l.id == id)
        .map_or(FALLBACK_CASE_LABEL, |l| l.name)
}

/// Whether a ticket status counts as open. Unknown statuses count as open
/// so they stay visible until someone classifies them.
pub fn is_ticket_open(status_id: CatalogId) -> bool {
    find_ticket_status(status_id).map_or(true, |s| s.open)
}

/// Whether a PQR status counts as open. Unknown statuses count as open.
pub fn is_pqr_open(status_id: CatalogId) -> bool {
    find_pqr_status(status_id).map_or(true, |s| s.open)
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

fn count_labels(
    ids: impl Iterator<Item = CatalogId>,
    name_of: impl Fn(CatalogId) -> &'static str,
) -> Vec<LabelCount> {
    let mut counts: BTreeMap<CatalogId, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(id, count)| LabelCount {
            id,
            name: name_of(id),
            count,
        })
        .collect()
}

pub fn summarize_tickets(tickets: &[Ticket]) -> TicketSummary {
    let open = tickets.iter().filter(|t| is_ticket_open(t.status_id)).count();
    let top_priority = PRIORITIES.iter().map(|p| p.id).max().unwrap_or_default();
    let urgent_open = tickets
        .iter()
        .filter(|t| t.priority_id == top_priority && is_ticket_open(t.status_id))
        .count();

    TicketSummary {
        total: tickets.len(),
        open,
        closed: tickets.len() - open,
        urgent_open,
        by_status: count_labels(tickets.iter().map(|t| t.status_id), ticket_status_name),
        by_priority: count_labels(tickets.iter().map(|t| t.priority_id), priority_name),
        by_type: count_labels(tickets.iter().map(|t| t.type_id), ticket_type_name),
    }
}

pub fn summarize_pqrs(pqrs: &[Pqr]) -> PqrSummary {
    let open = pqrs.iter().filter(|p| is_pqr_open(p.status_id)).count();

    PqrSummary {
        total: pqrs.len(),
        open,
        closed: pqrs.len() - open,
        by_status: count_labels(pqrs.iter().map(|p| p.status_id), pqr_status_name),
        by_type: count_labels(pqrs.iter().map(|p| p.type_id), pqr_type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status_id: CatalogId, priority_id: CatalogId) -> Ticket {
        Ticket {
            id: 1,
            type_id: 1,
            status_id,
            priority_id,
            subject: "Inversor sin señal".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_ids_use_fallbacks() {
        assert_eq!(ticket_type_name(0), FALLBACK_CASE_LABEL);
        assert_eq!(pqr_type_name(50), FALLBACK_CASE_LABEL);
        assert_eq!(ticket_status_name(50), FALLBACK_CASE_LABEL);
        assert_eq!(pqr_status_name(50), FALLBACK_CASE_LABEL);
        assert_eq!(priority_name(9), FALLBACK_CASE_LABEL);
        assert_eq!(priority_color(9), FALLBACK_CASE_COLOR);
    }

    #[test]
    fn known_ids_resolve() {
        assert_eq!(pqr_type_name(3), "Reclamo");
        assert_eq!(priority_name(4), "Urgente");
        assert_eq!(ticket_status_name(4), "Resuelto");
    }

    #[test]
    fn unknown_status_counts_as_open() {
        assert!(is_ticket_open(77));
        assert!(is_pqr_open(77));
        assert!(!is_ticket_open(5));
        assert!(!is_pqr_open(3));
    }

    #[test]
    fn ticket_summary_counts() {
        let tickets = vec![ticket(1, 4), ticket(2, 4), ticket(5, 4), ticket(4, 1)];
        let summary = summarize_tickets(&tickets);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.open, 2);
        assert_eq!(summary.closed, 2);
        assert_eq!(summary.urgent_open, 2);
        assert_eq!(
            summary.by_priority,
            vec![
                LabelCount {
                    id: 1,
                    name: "Baja",
                    count: 1,
                },
                LabelCount {
                    id: 4,
                    name: "Urgente",
                    count: 3,
                },
            ]
        );
        assert_eq!(summary.by_type.len(), 1);
    }

    #[test]
    fn pqr_summary_counts() {
        let pqrs = vec![
            Pqr {
                id: 1,
                type_id: 2,
                status_id: 1,
                ..Default::default()
            },
            Pqr {
                id: 2,
                type_id: 3,
                status_id: 4,
                ..Default::default()
            },
        ];
        let summary = summarize_pqrs(&pqrs);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.open, 1);
        assert_eq!(summary.closed, 1);
        assert_eq!(summary.by_type[0].name, "Queja");
    }

    #[test]
    fn empty_summaries() {
        assert_eq!(summarize_tickets(&[]).total, 0);
        assert!(summarize_pqrs(&[]).by_status.is_empty());
    }
}
