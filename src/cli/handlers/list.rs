//! List command handler and the shared note view renderer.

use anyhow::Result;
use std::io::Write;

use crate::cli::ListArgs;
use crate::cli::output::{Output, OutputFormat, display_title, format_timestamp, truncate_str};
use crate::domain::{FontSize, Note, Preferences, ViewMode};
use crate::store::NoteStore;

const TITLE_WIDTH: usize = 40;
const CARD_WIDTH: usize = 34;
const GRID_COLUMNS: usize = 2;

pub fn handle_list<W: Write>(args: &ListArgs, store: &NoteStore, out: &mut W) -> Result<()> {
    let view = store.list_notes();

    match args.format {
        OutputFormat::Human => render_view(&view, store.preferences(), out)?,
        OutputFormat::Json => writeln!(out, "{}", Output::new(&view).to_json()?)?,
    }
    Ok(())
}

/// Renders a projected view the way the current view mode asks for.
pub fn render_view<W: Write>(view: &[&Note], prefs: &Preferences, out: &mut W) -> Result<()> {
    if view.is_empty() {
        writeln!(out, "No notes found.")?;
        return Ok(());
    }

    match prefs.view_mode {
        ViewMode::List => render_list(view, prefs.font_size, out)?,
        ViewMode::Grid => render_grid(view, prefs.font_size, out)?,
    }

    writeln!(out)?;
    writeln!(out, "{} note(s)", view.len())?;
    Ok(())
}

/// Lines of content shown under each title.
fn preview_lines(font: FontSize) -> usize {
    match font {
        FontSize::Small => 3,
        FontSize::Medium => 2,
        FontSize::Large => 1,
    }
}

fn preview(note: &Note, font: FontSize) -> impl Iterator<Item = &str> {
    note.content()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(preview_lines(font))
}

fn render_list<W: Write>(view: &[&Note], font: FontSize, out: &mut W) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<8}  {:<TITLE_WIDTH$}  {:<10}  {:>16}",
        "ID", "Title", "Tag", "Date"
    )?;
    writeln!(
        out,
        "{:<8}  {:<TITLE_WIDTH$}  {:<10}  {:>16}",
        "-".repeat(8),
        "-".repeat(TITLE_WIDTH),
        "-".repeat(10),
        "-".repeat(16)
    )?;

    for note in view {
        writeln!(
            out,
            "{:<8}  {:<TITLE_WIDTH$}  {:<10}  {:>16}",
            note.id().short(),
            truncate_str(display_title(note.title()), TITLE_WIDTH),
            truncate_str(note.tag().unwrap_or("-"), 10),
            format_timestamp(note.timestamp())
        )?;
        for line in preview(note, font) {
            writeln!(out, "{:<8}  {}", "", truncate_str(line, TITLE_WIDTH + 30))?;
        }
    }
    Ok(())
}

fn render_grid<W: Write>(view: &[&Note], font: FontSize, out: &mut W) -> std::io::Result<()> {
    let inner = CARD_WIDTH - 4;

    for row in view.chunks(GRID_COLUMNS) {
        let cards: Vec<Vec<String>> = row
            .iter()
            .map(|note| {
                let mut lines = vec![
                    truncate_str(display_title(note.title()), inner),
                    format!(
                        "{} {}",
                        format_timestamp(note.timestamp()),
                        note.tag().unwrap_or("")
                    ),
                ];
                lines.extend(preview(note, font).map(|l| truncate_str(l, inner)));
                lines.push(note.id().short());
                lines
            })
            .collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);

        let border = format!("+{}+", "-".repeat(CARD_WIDTH - 2));
        let borders = vec![border.as_str(); cards.len()].join(" ");
        writeln!(out, "{}", borders)?;
        for i in 0..height {
            let cells: Vec<String> = cards
                .iter()
                .map(|card| {
                    let text = card.get(i).map(String::as_str).unwrap_or("");
                    format!("| {:<inner$} |", text)
                })
                .collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
        writeln!(out, "{}", borders)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortOrder;
    use pretty_assertions::assert_eq;

    fn render(store: &NoteStore, format: OutputFormat) -> String {
        let mut out = Vec::new();
        handle_list(&ListArgs { format }, store, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn title_order(text: &str, titles: &[&str]) -> Vec<usize> {
        titles.iter().map(|t| text.find(t).unwrap()).collect()
    }

    #[test]
    fn empty_view_says_so() {
        let store = NoteStore::new();
        assert_eq!(render(&store, OutputFormat::Human), "No notes found.\n");
    }

    #[test]
    fn list_shows_samples_newest_first() {
        let store = NoteStore::with_samples();
        let text = render(&store, OutputFormat::Human);
        let pos = title_order(&text, &["Project Idea", "Shopping List", "Welcome"]);
        assert!(pos[0] < pos[1] && pos[1] < pos[2]);
        assert!(text.contains("03/01/2024 00:00"));
        assert!(text.contains("Apples, Milk, Bread"));
        assert!(text.ends_with("3 note(s)\n"));
    }

    #[test]
    fn list_follows_sort_order() {
        let mut store = NoteStore::with_samples();
        store.set_sort_order(SortOrder::DateAsc);
        let text = render(&store, OutputFormat::Human);
        let pos = title_order(&text, &["Welcome", "Shopping List", "Project Idea"]);
        assert!(pos[0] < pos[1] && pos[1] < pos[2]);
    }

    #[test]
    fn untitled_notes_are_labelled() {
        let mut store = NoteStore::new();
        store.add_note("", "body", None);
        let text = render(&store, OutputFormat::Human);
        assert!(text.contains("(untitled)"));
    }

    #[test]
    fn grid_draws_cards_two_per_row() {
        let mut store = NoteStore::with_samples();
        store.set_view_mode(ViewMode::Grid);
        let text = render(&store, OutputFormat::Human);
        let first_line = text.lines().next().unwrap();
        assert_eq!(first_line.matches('+').count(), 4);
        assert!(text.contains("| Project Idea"));
        assert!(text.ends_with("3 note(s)\n"));
    }

    #[test]
    fn large_font_shows_less_preview() {
        let mut store = NoteStore::new();
        store.add_note("Multi", "one\ntwo\nthree", None);
        let medium = render(&store, OutputFormat::Human);
        assert!(medium.contains("two") && !medium.contains("three"));

        store.set_font_size(FontSize::Large);
        let large = render(&store, OutputFormat::Human);
        assert!(large.contains("one") && !large.contains("two"));
    }

    #[test]
    fn json_lists_projection() {
        let mut store = NoteStore::with_samples();
        store.set_search_query("milk");
        let text = render(&store, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["title"], "Shopping List");
        assert_eq!(data[0]["tag"], "Personal");
    }
}
