//! Show, Edit, and Remove command handlers.

use anyhow::{Result, anyhow};
use log::info;
use std::io::Write;

use super::resolve::require_note;
use super::warn_unregistered_tag;
use crate::cli::output::{Output, OutputFormat, display_title, format_timestamp};
use crate::cli::{EditArgs, RemoveArgs, ShowArgs};
use crate::store::NoteStore;

pub fn handle_show<W: Write>(args: &ShowArgs, store: &NoteStore, out: &mut W) -> Result<()> {
    let note = require_note(store, &args.note)?;

    match args.format {
        OutputFormat::Human => {
            writeln!(out, "# {}", display_title(note.title()))?;
            writeln!(out)?;
            write!(
                out,
                "ID: {}  Date: {}",
                note.id(),
                format_timestamp(note.timestamp())
            )?;
            if let Some(tag) = note.tag() {
                write!(out, "  Tag: {}", tag)?;
            }
            writeln!(out)?;

            if !note.content().is_empty() {
                writeln!(out)?;
                writeln!(out, "{}", note.content())?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", Output::new(note).to_json()?)?,
    }
    Ok(())
}

/// Applies the given fields to a note; fields left out keep their values.
pub fn handle_edit<W: Write>(args: &EditArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    let current = require_note(store, &args.note)?;
    let id = current.id().clone();

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| current.title().to_string());
    let content = args
        .content
        .clone()
        .unwrap_or_else(|| current.content().to_string());
    let tag = if args.no_tag {
        None
    } else {
        args.tag
            .clone()
            .or_else(|| current.tag().map(str::to_string))
    };

    if let Some(tag) = &args.tag {
        warn_unregistered_tag(store, tag);
    }

    let saved = store
        .save_note(Some(&id), title, content, tag)
        .ok_or_else(|| anyhow!("note not found: '{}'", args.note))?;

    info!("edited note {}", saved.id());
    writeln!(
        out,
        "Updated: {} [{}]",
        display_title(saved.title()),
        saved.id().short()
    )?;
    Ok(())
}

pub fn handle_remove<W: Write>(
    args: &RemoveArgs,
    store: &mut NoteStore,
    out: &mut W,
) -> Result<()> {
    let note = require_note(store, &args.note)?.clone();

    if !store.delete_note(&note) {
        return Err(anyhow!("note not found: '{}'", args.note));
    }

    info!("removed note {}", note.id());
    writeln!(
        out,
        "Deleted: {} [{}]",
        display_title(note.title()),
        note.id().short()
    )?;
    Ok(())
}
