//! Note resolution utilities.

use anyhow::{Result, bail};
use std::fmt::Write as _;

use crate::domain::{MIN_FRAGMENT_LEN, Note};
use crate::store::NoteStore;

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// Resolves a note identifier against the store.
///
/// Resolution order:
/// 1. ID fragment match (if input looks like part of a ULID)
/// 2. Exact title match, ignoring case
///
/// A single ID match wins outright. Otherwise candidates from both
/// methods are pooled and deduplicated.
pub fn resolve_note<'a>(store: &'a NoteStore, identifier: &str) -> ResolveResult<'a> {
    let identifier = identifier.trim();

    let looks_like_id = identifier.len() >= MIN_FRAGMENT_LEN
        && identifier.chars().all(|c| c.is_ascii_alphanumeric());

    let mut candidates: Vec<&Note> = Vec::new();

    if looks_like_id {
        let id_matches = store.find_by_id_fragment(identifier);
        if let [only] = id_matches.as_slice() {
            return ResolveResult::Unique(*only);
        }
        candidates.extend(id_matches);
    }

    for note in store.find_by_title(identifier) {
        if !candidates.iter().any(|c| c.id() == note.id()) {
            candidates.push(note);
        }
    }

    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates[0]),
        _ => ResolveResult::Ambiguous(candidates),
    }
}

/// Resolves `identifier` to exactly one note, or fails with a message
/// listing the candidates.
pub fn require_note<'a>(store: &'a NoteStore, identifier: &str) -> Result<&'a Note> {
    match resolve_note(store, identifier) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(notes) => bail!(describe_ambiguous(identifier, &notes)),
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Describes ambiguous notes so the user can tell them apart.
fn describe_ambiguous(identifier: &str, notes: &[&Note]) -> String {
    let mut msg = format!("ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        let _ = write!(msg, "\n  {} - {}", note.id().short(), note.title());
        if let Some(tag) = note.tag() {
            let _ = write!(msg, " ({})", tag);
        }
    }
    msg.push_str("\nUse the ID to specify which note you mean.");
    msg
}
