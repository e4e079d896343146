/// Errors raised at the ingestion boundary.
///
/// The calculators themselves never fail; missing or malformed data
/// degrades to zero or a fallback instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}
