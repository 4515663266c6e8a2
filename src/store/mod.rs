//! In-memory note store and the filtered, sorted view derived from it.

mod error;
mod events;
mod note_store;
mod projection;
mod samples;

pub use error::{StoreError, StoreResult};
pub use events::{LogObserver, StoreEvent, StoreObserver};
pub use note_store::NoteStore;
pub use projection::{filter_notes, project, sort_notes};
pub use samples::{sample_notes, sample_tags};
