//! Command handlers for the session shell.
//!
//! Every handler writes its output to the given writer and reports
//! failures through `anyhow`, so the shell can keep going after an error.

mod list;
mod metadata;
mod new;
mod prefs;
mod resolve;
mod search;
mod show_edit;

use log::warn;

use crate::store::NoteStore;

// Re-export public items
pub use list::{handle_list, render_view};
pub use metadata::{handle_tag, handle_tags};
pub use new::handle_new;
pub use prefs::{handle_accent, handle_dark, handle_font, handle_prefs, handle_view};
pub use resolve::{ResolveResult, require_note, resolve_note};
pub use search::{handle_search, handle_sort};
pub use show_edit::{handle_edit, handle_remove, handle_show};

// ===========================================
// Shared Utilities
// ===========================================

/// Notes may carry tags the registry does not know; say so without failing.
pub(crate) fn warn_unregistered_tag(store: &NoteStore, tag: &str) {
    if !store.tags().contains(tag) {
        warn!("tag '{}' is not registered", tag);
    }
}
