//! New note command handler.

use anyhow::Result;
use log::info;
use std::io::Write;

use super::warn_unregistered_tag;
use crate::cli::NewArgs;
use crate::cli::output::display_title;
use crate::domain::Note;
use crate::store::NoteStore;

/// Adds a note and reports its short id.
///
/// Empty titles and contents are accepted, matching the store.
pub fn handle_new<W: Write>(args: &NewArgs, store: &mut NoteStore, out: &mut W) -> Result<Note> {
    if let Some(tag) = &args.tag {
        warn_unregistered_tag(store, tag);
    }

    let note = store.add_note(args.title.as_str(), args.content.as_str(), args.tag.clone());

    info!("created note {}", note.id());
    writeln!(
        out,
        "Created: {} [{}]",
        display_title(note.title()),
        note.id().short()
    )?;
    Ok(note)
}
