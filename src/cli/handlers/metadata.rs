//! Tag command handlers (tags, tag add, tag rm).

use anyhow::Result;
use std::io::Write;

use crate::cli::output::{Output, OutputFormat, TagListing};
use crate::cli::{TagAction, TagArgs, TagsArgs};
use crate::domain::is_blank;
use crate::store::NoteStore;

/// Number of notes whose tag is exactly `name`.
fn tag_count(store: &NoteStore, name: &str) -> usize {
    store
        .notes()
        .iter()
        .filter(|n| n.tag() == Some(name))
        .count()
}

pub fn handle_tags<W: Write>(args: &TagsArgs, store: &NoteStore, out: &mut W) -> Result<()> {
    let tags = store.tags();

    match args.format {
        OutputFormat::Human => {
            if tags.is_empty() {
                writeln!(out, "No tags found.")?;
            } else {
                for name in tags.iter() {
                    if args.counts {
                        writeln!(out, "{} ({})", name, tag_count(store, name))?;
                    } else {
                        writeln!(out, "{}", name)?;
                    }
                }
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = tags
                .iter()
                .map(|name| TagListing {
                    name: name.to_string(),
                    count: args.counts.then(|| tag_count(store, name)),
                })
                .collect();
            writeln!(out, "{}", Output::new(listings).to_json()?)?;
        }
    }
    Ok(())
}

pub fn handle_tag<W: Write>(args: &TagArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    match &args.action {
        TagAction::Add { name } => {
            if is_blank(name) {
                writeln!(out, "Blank tag name ignored")?;
            } else if store.add_tag(name) {
                writeln!(out, "Added tag: {}", name)?;
            } else {
                writeln!(out, "Tag already exists: {}", name)?;
            }
        }
        TagAction::Rm { name } => {
            if !store.remove_tag(name) {
                writeln!(out, "No such tag: {}", name)?;
                return Ok(());
            }
            writeln!(out, "Removed tag: {}", name)?;
            let still_used = tag_count(store, name);
            if still_used > 0 {
                writeln!(out, "{} note(s) still carry this tag", still_used)?;
            }
        }
    }
    Ok(())
}
