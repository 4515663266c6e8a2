//! Core types: Note, NoteId (ULID), TagRegistry, and session Preferences.

mod note;
mod note_id;
mod preferences;
mod tag;

pub use note::{Note, NoteBuilder, NoteColor, TIMESTAMP_FORMAT};
pub use note_id::{MIN_FRAGMENT_LEN, NoteId, ParseNoteIdError};
pub use preferences::{
    AccentColor, FontSize, ParsePreferenceError, Preferences, SortOrder, ViewMode,
};
pub use tag::{DEFAULT_TAGS, TagRegistry, is_blank};
