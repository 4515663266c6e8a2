//! Note record: title, content, optional tag, and creation time.

use crate::domain::NoteId;
use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;
use std::fmt;

/// Display format used for note timestamps in human output.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// ARGB color attached to a note.
///
/// Carried on every note but never assigned by a store operation; it is
/// reserved for a future per-note color feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NoteColor(pub u32);

/// A single user-authored text note.
///
/// `id` and `timestamp` are fixed at creation. `title`, `content` and `tag`
/// are replaced wholesale by an update. The tag is a plain name and is not
/// required to exist in the tag registry.
///
/// # Examples
///
/// ```
/// use jot::domain::Note;
///
/// let note = Note::new("Groceries", "milk, eggs", Some("Personal".to_string()));
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.tag(), Some("Personal"));
/// assert!(note.color().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
    timestamp: DateTime<Utc>,
    tag: Option<String>,
    color: Option<NoteColor>,
}

impl Note {
    /// Creates a note stamped with the current time and a fresh id.
    pub fn new(title: impl Into<String>, content: impl Into<String>, tag: Option<String>) -> Self {
        let now = Utc::now().trunc_subsecs(3);
        Self {
            id: NoteId::from_datetime(now),
            title: title.into(),
            content: content.into(),
            timestamp: now,
            tag,
            color: None,
        }
    }

    /// Creates a builder for a note whose id and creation time are already known.
    pub fn builder(id: NoteId, title: impl Into<String>, timestamp: DateTime<Utc>) -> NoteBuilder {
        NoteBuilder {
            id,
            title: title.into(),
            content: String::new(),
            timestamp,
            tag: None,
            color: None,
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's title (may be empty).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body text (may be empty).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the creation time as milliseconds since the Unix epoch.
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }

    /// Returns the referenced tag name, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Returns the reserved display color, if any.
    pub fn color(&self) -> Option<NoteColor> {
        self.color
    }

    /// Returns true if `needle` occurs in the title or content, ignoring case.
    ///
    /// An empty needle matches every note.
    pub fn matches_query(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }

    /// Replaces the editable fields, keeping id, timestamp, and color.
    pub(crate) fn revise(&mut self, title: String, content: String, tag: Option<String>) {
        self.title = title;
        self.content = content;
        self.tag = tag;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id.short())
    }
}

/// Builder for a Note with a known id and timestamp.
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    timestamp: DateTime<Utc>,
    tag: Option<String>,
    color: Option<NoteColor>,
}

impl NoteBuilder {
    /// Sets the body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the tag reference.
    pub fn tag(mut self, tag: Option<impl Into<String>>) -> Self {
        self.tag = tag.map(Into::into);
        self
    }

    /// Sets the reserved display color.
    pub fn color(mut self, color: Option<NoteColor>) -> Self {
        self.color = color;
        self
    }

    /// Builds the Note. The timestamp is truncated to millisecond precision.
    pub fn build(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            timestamp: self.timestamp.trunc_subsecs(3),
            tag: self.tag,
            color: self.color,
        }
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("timestamp", &self.timestamp_millis())?;

        if let Some(ref tag) = self.tag {
            map.serialize_entry("tag", tag)?;
        }
        if let Some(color) = self.color {
            map.serialize_entry("color", &color)?;
        }

        map.end()
    }
}
