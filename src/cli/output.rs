//! Output format types for session commands.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Preferences, TIMESTAMP_FORMAT};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Pretty JSON rendering of the wrapped data.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A registered tag with the number of notes referencing it.
#[derive(Debug, Serialize)]
pub struct TagListing {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Preferences plus the derived display values.
#[derive(Debug, Serialize)]
pub struct PreferencesListing<'a> {
    #[serde(flatten)]
    pub preferences: &'a Preferences,
    pub sort_label: &'static str,
    pub font_points: u16,
    pub title_points: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_name: Option<&'static str>,
}

impl<'a> From<&'a Preferences> for PreferencesListing<'a> {
    fn from(preferences: &'a Preferences) -> Self {
        Self {
            preferences,
            sort_label: preferences.sort_order.label(),
            font_points: preferences.font_size.points(),
            title_points: preferences.font_size.title_points(),
            accent_name: preferences.accent_color.name(),
        }
    }
}

/// Formats a note timestamp for human output.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Title shown for notes whose title is empty.
pub fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        "(untitled)"
    } else {
        title
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
