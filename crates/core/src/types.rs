/// Backend record identifiers for milestones, documents, users and cases.
pub type DbId = i64;

/// Identifier in one of the fixed lookup catalogs (types, statuses,
/// priorities) shared with the backend.
pub type CatalogId = i16;

/// Lifecycle state identifier.
pub type StateId = CatalogId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
