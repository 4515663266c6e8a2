//! The view projection: filter by search text, then stable sort.
//!
//! Recomputed from scratch on every call. Nothing here mutates or caches the
//! canonical note list.

use crate::domain::{Note, SortOrder};
use std::cmp::Ordering;

/// Returns the notes to display for `query` and `order`.
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, SortOrder};
/// use jot::store::project;
///
/// let notes = vec![
///     Note::new("beta", "", None),
///     Note::new("Alpha", "", None),
///     Note::new("Gamma", "", None),
/// ];
/// let view = project(&notes, "", SortOrder::TitleAsc);
/// let titles: Vec<_> = view.iter().map(|n| n.title()).collect();
/// assert_eq!(titles, ["Alpha", "Gamma", "beta"]);
/// ```
pub fn project<'a>(notes: &'a [Note], query: &str, order: SortOrder) -> Vec<&'a Note> {
    let mut view = filter_notes(notes, query);
    sort_notes(&mut view, order);
    view
}

/// Keeps notes whose title or content contains `query`, ignoring case.
///
/// An empty query keeps every note in its original order. Tags and
/// timestamps are not searched.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    if query.is_empty() {
        return notes.iter().collect();
    }
    notes.iter().filter(|n| n.matches_query(query)).collect()
}

/// Stable in-place sort of a projected view.
///
/// Descending orders use the reversed comparator, so notes with equal keys
/// keep their relative order in both directions.
pub fn sort_notes(view: &mut [&Note], order: SortOrder) {
    match order {
        SortOrder::TitleAsc => view.sort_by(|a, b| compare_titles(a, b)),
        SortOrder::TitleDesc => view.sort_by(|a, b| compare_titles(b, a)),
        SortOrder::DateAsc => view.sort_by(|a, b| a.timestamp().cmp(&b.timestamp())),
        SortOrder::DateDesc => view.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
    }
}

/// Code-point order; uppercase sorts before lowercase.
fn compare_titles(a: &Note, b: &Note) -> Ordering {
    a.title().cmp(b.title())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteId;
    use chrono::{DateTime, Duration, Utc};
    use pretty_assertions::assert_eq;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::milliseconds(ms)
    }

    fn note(title: &str, content: &str, ms: i64) -> Note {
        Note::builder(NoteId::from_datetime(at(ms)), title, at(ms))
            .content(content)
            .build()
    }

    fn titles(view: &[&Note]) -> Vec<String> {
        view.iter().map(|n| n.title().to_string()).collect()
    }

    fn greek() -> Vec<Note> {
        vec![
            note("Alpha", "", 3),
            note("beta", "", 1),
            note("Gamma", "", 2),
        ]
    }

    #[test]
    fn empty_query_passes_everything_through() {
        let notes = greek();
        let view = filter_notes(&notes, "");
        assert_eq!(titles(&view), ["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let notes = greek();
        let view = filter_notes(&notes, "a");
        assert_eq!(titles(&view), ["Alpha", "beta", "Gamma"]);

        let view = filter_notes(&notes, "GAM");
        assert_eq!(titles(&view), ["Gamma"]);
    }

    #[test]
    fn query_without_match_is_empty() {
        let notes = greek();
        assert!(filter_notes(&notes, "xyz").is_empty());
    }

    #[test]
    fn query_matches_content() {
        let notes = vec![
            note("Shopping List", "Apples, Milk, Bread", 1),
            note("Welcome", "sample note", 2),
        ];
        let view = filter_notes(&notes, "MILK");
        assert_eq!(titles(&view), ["Shopping List"]);
    }

    #[test]
    fn whitespace_query_is_not_treated_as_empty() {
        let notes = vec![note("OneWord", "", 1), note("Two Words", "", 2)];
        let view = filter_notes(&notes, " ");
        assert_eq!(titles(&view), ["Two Words"]);
    }

    #[test]
    fn title_ascending_uses_code_point_order() {
        let notes = greek();
        let view = project(&notes, "", SortOrder::TitleAsc);
        assert_eq!(titles(&view), ["Alpha", "Gamma", "beta"]);
    }

    #[test]
    fn title_descending_reverses_ascending_for_distinct_titles() {
        let notes = greek();
        let asc = titles(&project(&notes, "", SortOrder::TitleAsc));
        let mut desc = titles(&project(&notes, "", SortOrder::TitleDesc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn equal_titles_keep_insertion_order_in_both_directions() {
        let notes = vec![
            note("Same", "first", 200),
            note("Other", "", 300),
            note("Same", "second", 100),
        ];

        let asc = project(&notes, "", SortOrder::TitleAsc);
        let contents: Vec<_> = asc.iter().map(|n| n.content()).collect();
        assert_eq!(contents, ["", "first", "second"]);

        let desc = project(&notes, "", SortOrder::TitleDesc);
        let contents: Vec<_> = desc.iter().map(|n| n.content()).collect();
        assert_eq!(contents, ["first", "second", ""]);
    }

    #[test]
    fn date_orders() {
        let notes = greek();
        assert_eq!(
            titles(&project(&notes, "", SortOrder::DateAsc)),
            ["beta", "Gamma", "Alpha"]
        );
        assert_eq!(
            titles(&project(&notes, "", SortOrder::DateDesc)),
            ["Alpha", "Gamma", "beta"]
        );
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let notes = vec![note("b", "", 5), note("a", "", 5)];
        assert_eq!(titles(&project(&notes, "", SortOrder::DateAsc)), ["b", "a"]);
        assert_eq!(titles(&project(&notes, "", SortOrder::DateDesc)), ["b", "a"]);
    }

    #[test]
    fn filter_runs_before_sort() {
        let notes = greek();
        let view = project(&notes, "ma", SortOrder::TitleDesc);
        assert_eq!(titles(&view), ["Gamma"]);
    }

    #[test]
    fn projection_leaves_input_untouched() {
        let notes = greek();
        let before = notes.clone();
        let _ = project(&notes, "a", SortOrder::TitleDesc);
        assert_eq!(notes, before);
    }

    #[test]
    fn repeated_projection_is_identical() {
        let notes = greek();
        let first = titles(&project(&notes, "a", SortOrder::DateAsc));
        let second = titles(&project(&notes, "a", SortOrder::DateAsc));
        assert_eq!(first, second);
    }
}
