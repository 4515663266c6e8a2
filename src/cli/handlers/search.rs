//! Search and Sort command handlers.

use anyhow::Result;
use std::io::Write;

use crate::cli::{SearchArgs, SortArgs};
use crate::store::NoteStore;

/// Sets the search text. The view itself is printed by `ls`.
pub fn handle_search<W: Write>(args: &SearchArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    let query = args.query();
    store.set_search_query(query.as_str());

    if query.is_empty() {
        writeln!(out, "Search cleared ({} note(s))", store.len())?;
    } else {
        writeln!(
            out,
            "Search: '{}' ({} matching)",
            query,
            store.list_notes().len()
        )?;
    }
    Ok(())
}

pub fn handle_sort<W: Write>(args: &SortArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    store.set_sort_order(args.order);
    writeln!(out, "Sort: {}", args.order.label())?;
    Ok(())
}
