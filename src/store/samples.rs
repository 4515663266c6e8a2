//! Notes and tags that a fresh session starts with.

use crate::domain::{Note, NoteId, TagRegistry};
use chrono::{DateTime, Duration, Utc};

/// (title, content, tag, created ms since epoch)
const SAMPLES: [(&str, &str, &str, i64); 3] = [
    (
        "Welcome",
        "This is a sample note for localization practice.",
        "Important",
        1_704_067_200_000, // 2024-01-01
    ),
    (
        "Shopping List",
        "Apples, Milk, Bread",
        "Personal",
        1_706_745_600_000, // 2024-02-01
    ),
    (
        "Project Idea",
        "Create a localized app for students.",
        "Work",
        1_709_251_200_000, // 2024-03-01
    ),
];

/// Returns the three sample notes in insertion order.
pub fn sample_notes() -> Vec<Note> {
    SAMPLES
        .iter()
        .map(|(title, content, tag, ms)| {
            let created = DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(*ms);
            Note::builder(NoteId::from_datetime(created), *title, created)
                .content(*content)
                .tag(Some(*tag))
                .build()
        })
        .collect()
}

/// Returns the default tag registry.
pub fn sample_tags() -> TagRegistry {
    TagRegistry::with_defaults()
}
