//! Ordered registry of known tag names.

use serde::Serialize;

/// Tags offered by a fresh session.
pub const DEFAULT_TAGS: [&str; 4] = ["Work", "Personal", "Ideas", "Important"];

/// Returns true if a tag name is empty or whitespace-only.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// An insertion-ordered set of distinct tag names.
///
/// Names are case-sensitive: `Work` and `work` are different tags. The
/// registry is independent of notes; a note may reference a name that is not
/// registered, and removing a name leaves referencing notes untouched.
///
/// # Examples
///
/// ```
/// use jot::domain::TagRegistry;
///
/// let mut tags = TagRegistry::new();
/// assert!(tags.add("Work"));
/// assert!(!tags.add("Work"));
/// assert!(!tags.add("   "));
/// assert!(tags.add("work"));
/// assert_eq!(tags.as_slice(), ["Work", "work"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagRegistry(Vec<String>);

impl TagRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a registry holding [`DEFAULT_TAGS`].
    pub fn with_defaults() -> Self {
        DEFAULT_TAGS.iter().copied().collect()
    }

    /// Appends `name` unless it is blank or already present.
    ///
    /// Returns true if the registry changed.
    pub fn add(&mut self, name: &str) -> bool {
        if is_blank(name) || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }

    /// Removes `name` if present. Returns true if the registry changed.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.0.iter().position(|t| t == name) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns true if `name` is registered (exact, case-sensitive match).
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t == name)
    }

    /// Iterates over names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagRegistry {
    /// Collects names through [`TagRegistry::add`], so blanks and duplicates are dropped.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for name in iter {
            registry.add(name.as_ref());
        }
        registry
    }
}
