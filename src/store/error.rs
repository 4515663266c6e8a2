//! Store error type.

use crate::domain::NoteId;
use thiserror::Error;

/// Errors raised while assembling a store.
///
/// The everyday note and tag operations never fail; only seeding a store
/// with pre-built notes can violate the unique-id invariant.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A note with the same id is already in the store.
    #[error("note already exists: {id}")]
    DuplicateId { id: NoteId },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
