//! Heliotrack domain core.
//!
//! Pure, synchronous logic for the solar project dashboard: the lifecycle
//! state catalog, the progress calculator, milestone/document aggregation,
//! case (ticket/PQR) catalogs and the ingestion step that turns backend
//! records into canonical structs. Nothing in this crate performs I/O; the
//! caller passes in pre-loaded records and the current time.

pub mod cases;
pub mod catalog;
pub mod dates;
pub mod error;
pub mod ingest;
pub mod lifecycle;
pub mod milestones;
pub mod portfolio;
pub mod progress;
pub mod project;
pub mod types;
