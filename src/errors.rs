use thiserror::Error;

/// Errors that can arise while operating on garden state.
///
/// Expected gameplay edge conditions (nothing ready, inventory full, not
/// enough gems) are reported through the operation outcome types instead;
/// these variants cover genuinely exceptional situations.
#[derive(Debug, Error)]
pub enum GardenError {
    /// Returned when looking up a catalog entry the caller asserts exists.
    #[error("unknown catalog entry: {0}")]
    UnknownCatalogEntry(String),

    /// Returned when deserializing a profile with an unexpected schema version.
    #[error("schema mismatch for {entity}: expected {expected}, got {found}")]
    SchemaMismatch {
        entity: &'static str,
        expected: u8,
        found: u8,
    },

    /// Wrapper around serde_json errors when decoding host-supplied records.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
