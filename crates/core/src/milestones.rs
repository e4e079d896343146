//! Milestone and document aggregation for the project detail view.
//!
//! Reduces the milestone history of one project (each milestone optionally
//! carrying documents) into counts, the most recent event and display rows
//! with type names and user names already resolved. The `core` crate
//! contains no database dependencies; all records are passed in by the
//! caller.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::dates;
use crate::types::{CatalogId, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Display name for an unset or unknown user reference.
pub const UNASSIGNED_USER: &str = "Sin asignar";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A file attached to a milestone or directly to a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DbId,
    pub type_id: CatalogId,
    pub name: String,
    /// Size in bytes.
    pub size: Option<u64>,
    pub uploaded_date: Option<String>,
    /// Opaque reference into the external file store.
    pub storage_ref: Option<String>,
}

/// A recorded event in a project's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: DbId,
    pub type_id: CatalogId,
    pub date: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub responsible: Option<DbId>,
    #[serde(default)]
    pub participants: Vec<DbId>,
    #[serde(default)]
    pub documents: Vec<Document>,
    pub notes: Option<String>,
}

impl Milestone {
    /// Parsed milestone date, `None` when missing or unparseable.
    pub fn parsed_date(&self) -> Option<Timestamp> {
        dates::parse_optional(self.date.as_deref())
    }
}

/// Minimal user directory entry used for name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: DbId,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A document with its owning milestone and resolved type.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentEntry {
    /// `None` for documents uploaded directly to the project.
    pub milestone_id: Option<DbId>,
    pub type_name: &'static str,
    pub type_icon: &'static str,
    pub document: Document,
}

/// Count of records sharing one catalog type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub type_id: CatalogId,
    pub name: &'static str,
    pub count: usize,
}

/// A milestone ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneView {
    pub id: DbId,
    pub title: String,
    pub date: Option<String>,
    pub type_id: CatalogId,
    pub type_name: &'static str,
    pub type_icon: &'static str,
    pub type_color: &'static str,
    pub responsible_name: String,
    pub participant_names: Vec<String>,
    pub document_count: usize,
}

/// Aggregate figures for a project's milestone history.
#[derive(Debug, Clone, Serialize)]
pub struct MilestoneSummary {
    pub milestone_count: usize,
    pub milestone_documents: usize,
    pub project_documents: usize,
    pub total_documents: usize,
    pub most_recent: Option<MilestoneView>,
    pub milestones_by_type: Vec<TypeCount>,
    pub documents_by_type: Vec<TypeCount>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Number of documents attached across all milestones.
pub fn total_document_count(milestones: &[Milestone]) -> usize {
    milestones.iter().map(|m| m.documents.len()).sum()
}

/// The milestone with the latest date, `None` for an empty list.
///
/// Among equal dates the first one in input order wins. Milestones whose
/// date is missing or unparseable rank below every dated milestone.
pub fn most_recent_milestone(milestones: &[Milestone]) -> Option<&Milestone> {
    let mut iter = milestones.iter();
    let mut best = iter.next()?;
    let mut best_date = best.parsed_date();

    for m in iter {
        let date = m.parsed_date();
        if date > best_date {
            best = m;
            best_date = date;
        }
    }
    Some(best)
}

/// Milestones ordered newest first; undated milestones last, ties keep
/// input order.
pub fn milestones_by_date_desc(milestones: &[Milestone]) -> Vec<&Milestone> {
    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by(|a, b| compare_dates_desc(a.parsed_date(), b.parsed_date()));
    sorted
}

fn compare_dates_desc(a: Option<Timestamp>, b: Option<Timestamp>) -> Ordering {
    b.cmp(&a)
}

/// Flatten milestone documents and project-level documents into one list.
pub fn flatten_documents(
    milestones: &[Milestone],
    project_documents: &[Document],
) -> Vec<DocumentEntry> {
    let from_milestones = milestones.iter().flat_map(|m| {
        m.documents
            .iter()
            .map(move |d| document_entry(Some(m.id), d))
    });
    let direct = project_documents.iter().map(|d| document_entry(None, d));

    from_milestones.chain(direct).collect()
}

fn document_entry(milestone_id: Option<DbId>, document: &Document) -> DocumentEntry {
    DocumentEntry {
        milestone_id,
        type_name: catalog::document_type_name(document.type_id),
        type_icon: catalog::document_type_icon(document.type_id),
        document: document.clone(),
    }
}

/// Count documents per document type, ordered by type id.
pub fn documents_by_type(entries: &[DocumentEntry]) -> Vec<TypeCount> {
    count_by_type(
        entries.iter().map(|e| e.document.type_id),
        catalog::document_type_name,
    )
}

/// Count milestones per milestone type, ordered by type id.
pub fn milestones_by_type(milestones: &[Milestone]) -> Vec<TypeCount> {
    count_by_type(
        milestones.iter().map(|m| m.type_id),
        catalog::milestone_type_name,
    )
}

fn count_by_type(
    ids: impl Iterator<Item = CatalogId>,
    name_of: fn(CatalogId) -> &'static str,
) -> Vec<TypeCount> {
    let mut counts: BTreeMap<CatalogId, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(type_id, count)| TypeCount {
            type_id,
            name: name_of(type_id),
            count,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Name resolution
// ---------------------------------------------------------------------------

/// Resolve a user reference to a display name.
pub fn resolve_user_name(users: &[UserRef], id: Option<DbId>) -> String {
    id.and_then(|id| users.iter().find(|u| u.id == id))
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNASSIGNED_USER.to_string())
}

/// Resolve every participant; unknown ids keep their position.
pub fn resolve_participants(users: &[UserRef], ids: &[DbId]) -> Vec<String> {
    ids.iter()
        .map(|id| resolve_user_name(users, Some(*id)))
        .collect()
}

/// Build the display row for one milestone.
pub fn milestone_view(milestone: &Milestone, users: &[UserRef]) -> MilestoneView {
    MilestoneView {
        id: milestone.id,
        title: milestone.title.clone(),
        date: milestone.date.clone(),
        type_id: milestone.type_id,
        type_name: catalog::milestone_type_name(milestone.type_id),
        type_icon: catalog::milestone_type_icon(milestone.type_id),
        type_color: catalog::milestone_type_color(milestone.type_id),
        responsible_name: resolve_user_name(users, milestone.responsible),
        participant_names: resolve_participants(users, &milestone.participants),
        document_count: milestone.documents.len(),
    }
}

/// Aggregate a project's milestone history.
pub fn summarize_milestones(
    milestones: &[Milestone],
    project_documents: &[Document],
    users: &[UserRef],
) -> MilestoneSummary {
    let entries = flatten_documents(milestones, project_documents);
    let milestone_documents = total_document_count(milestones);

    MilestoneSummary {
        milestone_count: milestones.len(),
        milestone_documents,
        project_documents: project_documents.len(),
        total_documents: milestone_documents + project_documents.len(),
        most_recent: most_recent_milestone(milestones).map(|m| milestone_view(m, users)),
        milestones_by_type: milestones_by_type(milestones),
        documents_by_type: documents_by_type(&entries),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
