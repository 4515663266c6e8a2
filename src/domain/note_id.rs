//! ULID-based note identifier with short handles and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::SystemTime;
use thiserror::Error;
use ulid::Ulid;

/// Number of characters in a short handle.
const SHORT_LEN: usize = 8;

/// Minimum fragment length accepted by [`NoteId::matches_fragment`].
pub const MIN_FRAGMENT_LEN: usize = 4;

/// A unique identifier for notes based on ULID.
///
/// The first ten characters of a ULID encode its millisecond timestamp, so
/// notes created in the same burst share a prefix. The short handle shown in
/// listings is therefore taken from the random tail instead.
///
/// # Examples
///
/// ```
/// use jot::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.to_string().len(), 26);
/// assert_eq!(id.short().len(), 8);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates a NoteId whose time component is `datetime`.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let system_time: SystemTime = datetime.into();
        Self(Ulid::from_datetime(system_time))
    }

    /// Returns the last 8 characters of the ULID.
    pub fn short(&self) -> String {
        let s = self.0.to_string();
        s[s.len() - SHORT_LEN..].to_string()
    }

    /// Returns true if `fragment` occurs anywhere in this id, ignoring case.
    ///
    /// Fragments shorter than [`MIN_FRAGMENT_LEN`] never match.
    pub fn matches_fragment(&self, fragment: &str) -> bool {
        if fragment.len() < MIN_FRAGMENT_LEN {
            return false;
        }
        let fragment = fragment.to_ascii_uppercase();
        let full = self.0.to_string();
        full.contains(&fragment)
    }

    /// Returns the millisecond timestamp encoded in the ULID.
    pub fn timestamp_ms(&self) -> u64 {
        self.0.timestamp_ms()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone, Error)]
#[error("invalid note id '{value}': {reason}")]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const KNOWN: &str = "01HQ3K5M7NXJK4QZPW8V2R6T9Y";

    #[test]
    fn new_creates_valid_ulid() {
        let s = NoteId::new().to_string();
        assert_eq!(s.len(), 26);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn short_is_random_tail() {
        let id: NoteId = KNOWN.parse().unwrap();
        assert_eq!(id.short(), "8V2R6T9Y");
    }

    #[test]
    fn from_datetime_keeps_timestamp() {
        let dt = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let id = NoteId::from_datetime(dt);
        assert_eq!(id.timestamp_ms() as i64, dt.timestamp_millis());
    }

    #[test]
    fn many_ids_are_unique() {
        let ids: Vec<NoteId> = (0..500).map(|_| NoteId::new()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn ids_created_together_have_distinct_short_handles() {
        let ids: Vec<NoteId> = (0..50).map(|_| NoteId::new()).collect();
        let handles: HashSet<_> = ids.iter().map(NoteId::short).collect();
        assert_eq!(handles.len(), 50);
    }

    #[test]
    fn matches_any_substring_case_insensitively() {
        let id: NoteId = KNOWN.parse().unwrap();
        assert!(id.matches_fragment("01hq3k"));
        assert!(id.matches_fragment("2R6T9Y"));
        assert!(id.matches_fragment("K4QZPW"));
        assert!(id.matches_fragment("k4qzpw"));
        assert!(id.matches_fragment(KNOWN));
        assert!(!id.matches_fragment("ZZZZ"));
    }

    #[test]
    fn short_fragments_never_match() {
        let id: NoteId = KNOWN.parse().unwrap();
        assert!(!id.matches_fragment("01H"));
        assert!(!id.matches_fragment(""));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "not-an-id".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "not-an-id");
        assert!(err.to_string().contains("invalid note id 'not-an-id'"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id: NoteId = KNOWN.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", KNOWN));
        let back: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn debug_format() {
        let id: NoteId = KNOWN.parse().unwrap();
        assert_eq!(format!("{:?}", id), format!("NoteId(\"{}\")", KNOWN));
    }
}
