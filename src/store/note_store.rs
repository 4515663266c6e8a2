//! The note store: canonical notes, tag registry, and session preferences.

use crate::domain::{
    AccentColor, FontSize, Note, NoteId, Preferences, SortOrder, TagRegistry, ViewMode,
};
use crate::store::events::{StoreEvent, StoreObserver};
use crate::store::projection::project;
use crate::store::samples::{sample_notes, sample_tags};
use crate::store::{StoreError, StoreResult};
use log::{debug, trace};
use std::fmt;

/// Owns every note, the tag registry, and the session preferences.
///
/// A store is built explicitly and handed by reference to whatever needs it.
/// Mutation is single-threaded; wrap the store in a lock before sharing it
/// across threads.
///
/// Observers are told about each effective change as it happens. Callers that
/// prefer polling can compare [`revision`](Self::revision) values instead.
///
/// # Examples
///
/// ```
/// use jot::domain::SortOrder;
/// use jot::store::NoteStore;
///
/// let mut store = NoteStore::new();
/// let note = store.add_note("Groceries", "milk", None);
/// assert!(store.update_note(note.id(), "Groceries", "milk, eggs", None));
/// store.set_sort_order(SortOrder::TitleAsc);
/// assert_eq!(store.list_notes()[0].content(), "milk, eggs");
/// ```
pub struct NoteStore {
    notes: Vec<Note>,
    tags: TagRegistry,
    preferences: Preferences,
    revision: u64,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl NoteStore {
    /// Creates an empty store with no notes, no tags, and default preferences.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            tags: TagRegistry::new(),
            preferences: Preferences::default(),
            revision: 0,
            observers: Vec::new(),
        }
    }

    /// Creates a store seeded with the sample notes and default tags.
    pub fn with_samples() -> Self {
        let mut store = Self::new();
        store.notes = sample_notes();
        store.tags = sample_tags();
        store
    }

    /// Creates a store from pre-built parts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if two notes share an id.
    pub fn from_parts(
        notes: Vec<Note>,
        tags: TagRegistry,
        preferences: Preferences,
    ) -> StoreResult<Self> {
        let mut store = Self::new();
        store.tags = tags;
        store.preferences = preferences;
        for note in notes {
            store.insert_note(note)?;
        }
        store.revision = 0;
        Ok(store)
    }

    /// Registers an observer for future changes.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Counter bumped by every effective change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn emit(&mut self, event: StoreEvent) {
        self.revision += 1;
        trace!("revision {} after {:?}", self.revision, event);
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    // ===========================================
    // Notes
    // ===========================================

    /// Canonical notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a note with a fresh id and the current time and appends it.
    ///
    /// Empty titles and contents are accepted.
    pub fn add_note(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        tag: Option<String>,
    ) -> Note {
        let note = Note::new(title, content, tag);
        debug!("adding note {}", note.id());
        self.notes.push(note.clone());
        self.emit(StoreEvent::NoteAdded(note.id().clone()));
        note
    }

    /// Appends a pre-built note, keeping ids unique.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if a note with the same id exists.
    pub fn insert_note(&mut self, note: Note) -> StoreResult<()> {
        if self.get_note_by_id(note.id()).is_some() {
            return Err(StoreError::DuplicateId {
                id: note.id().clone(),
            });
        }
        let id = note.id().clone();
        debug!("inserting note {}", id);
        self.notes.push(note);
        self.emit(StoreEvent::NoteAdded(id));
        Ok(())
    }

    /// Replaces title, content, and tag of the note with `id`.
    ///
    /// The id and timestamp are kept. Returns false, and changes nothing, when
    /// no note has that id. Rewriting a note with its current values returns
    /// true without emitting an event.
    pub fn update_note(
        &mut self,
        id: &NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        tag: Option<String>,
    ) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id() == id) else {
            debug!("update ignored, no note {}", id);
            return false;
        };
        let (title, content) = (title.into(), content.into());
        if note.title() == title && note.content() == content && note.tag() == tag.as_deref() {
            debug!("update of {} left it unchanged", id);
            return true;
        }
        note.revise(title, content, tag);
        debug!("updated note {}", id);
        self.emit(StoreEvent::NoteUpdated(id.clone()));
        true
    }

    /// Removes the first note equal to `note`.
    ///
    /// Equality covers every field, so a copy taken before an update no longer
    /// matches. Returns false when nothing was removed.
    pub fn delete_note(&mut self, note: &Note) -> bool {
        let Some(index) = self.notes.iter().position(|n| n == note) else {
            debug!("delete ignored, no match for {}", note.id());
            return false;
        };
        let removed = self.notes.remove(index);
        debug!("deleted note {}", removed.id());
        self.emit(StoreEvent::NoteDeleted(removed.id().clone()));
        true
    }

    /// Adds a note when `id` is `None`, otherwise updates that note.
    ///
    /// Returns the stored note, or `None` when `id` names no note.
    pub fn save_note(
        &mut self,
        id: Option<&NoteId>,
        title: impl Into<String>,
        content: impl Into<String>,
        tag: Option<String>,
    ) -> Option<Note> {
        match id {
            None => Some(self.add_note(title, content, tag)),
            Some(id) => {
                if self.update_note(id, title, content, tag) {
                    self.get_note_by_id(id).cloned()
                } else {
                    None
                }
            }
        }
    }

    pub fn get_note_by_id(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Notes whose id contains `fragment` (case-insensitive).
    pub fn find_by_id_fragment(&self, fragment: &str) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.id().matches_fragment(fragment))
            .collect()
    }

    /// Notes whose title equals `title`, ignoring case and surrounding whitespace.
    pub fn find_by_title(&self, title: &str) -> Vec<&Note> {
        let wanted = title.trim().to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.title().trim().to_lowercase() == wanted)
            .collect()
    }

    /// The display view: current notes filtered by the search query and
    /// sorted by the sort order. Recomputed on every call.
    pub fn list_notes(&self) -> Vec<&Note> {
        project(
            &self.notes,
            &self.preferences.search_query,
            self.preferences.sort_order,
        )
    }

    // ===========================================
    // Tags
    // ===========================================

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    /// Registers a tag name; blank or existing names are ignored.
    pub fn add_tag(&mut self, name: &str) -> bool {
        if !self.tags.add(name) {
            debug!("tag '{}' ignored", name);
            return false;
        }
        self.emit(StoreEvent::TagAdded(name.to_string()));
        true
    }

    /// Unregisters a tag name. Notes referencing it keep their tag.
    pub fn remove_tag(&mut self, name: &str) -> bool {
        if !self.tags.remove(name) {
            return false;
        }
        self.emit(StoreEvent::TagRemoved(name.to_string()));
        true
    }

    // ===========================================
    // Preferences
    // ===========================================

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Applies `change` and emits an event if the preferences differ afterwards.
    fn change_preferences(&mut self, change: impl FnOnce(&mut Preferences)) {
        let before = self.preferences.clone();
        change(&mut self.preferences);
        if self.preferences != before {
            debug!("preferences now {:?}", self.preferences);
            self.emit(StoreEvent::PreferencesChanged);
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.change_preferences(|p| p.search_query = query);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.change_preferences(|p| p.sort_order = order);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.change_preferences(|p| p.view_mode = mode);
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.change_preferences(|p| p.font_size = size);
    }

    pub fn set_accent_color(&mut self, color: AccentColor) {
        self.change_preferences(|p| p.accent_color = color);
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.change_preferences(|p| p.dark_mode = enabled);
    }

    pub fn toggle_dark_mode(&mut self) {
        self.change_preferences(Preferences::toggle_dark_mode);
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes)
            .field("tags", &self.tags)
            .field("preferences", &self.preferences)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish()
    }
}
