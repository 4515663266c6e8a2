//! Session preferences: sort order, search text, and display settings.
//!
//! Every field is independent; any value may replace any other at any time.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a preference value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePreferenceError {
    #[error("unknown sort order '{0}' (expected title-asc, title-desc, date-asc, or date-desc)")]
    SortOrder(String),

    #[error("unknown view mode '{0}' (expected list or grid)")]
    ViewMode(String),

    #[error("unknown font size '{0}' (expected small, medium, or large)")]
    FontSize(String),

    #[error("invalid color '{0}' (expected purple, red, blue, green, #RRGGBB, or #AARRGGBB)")]
    Color(String),
}

/// Lowercases and maps `_` to `-` so `TITLE_ASC` and `title-asc` parse alike.
fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}

/// Ordering applied to the projected note list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    TitleAsc,
    TitleDesc,
    DateAsc,
    #[default]
    DateDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::TitleAsc,
        SortOrder::TitleDesc,
        SortOrder::DateAsc,
        SortOrder::DateDesc,
    ];

    /// Menu label for this order.
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::TitleAsc => "Title (A-Z)",
            SortOrder::TitleDesc => "Title (Z-A)",
            SortOrder::DateAsc => "Date (Oldest)",
            SortOrder::DateDesc => "Date (Newest)",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            SortOrder::TitleAsc => "title-asc",
            SortOrder::TitleDesc => "title-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::DateDesc => "date-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == wanted)
            .ok_or_else(|| ParsePreferenceError::SortOrder(s.to_string()))
    }
}

/// Layout of the note list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
        })
    }
}

impl FromStr for ViewMode {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "list" => Ok(ViewMode::List),
            "grid" => Ok(ViewMode::Grid),
            _ => Err(ParsePreferenceError::ViewMode(s.to_string())),
        }
    }
}

/// Text size tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Body text size in points.
    pub fn points(self) -> u16 {
        match self {
            FontSize::Small => 12,
            FontSize::Medium => 16,
            FontSize::Large => 20,
        }
    }

    /// Title text size in points.
    pub fn title_points(self) -> u16 {
        self.points() + 4
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        })
    }
}

impl FromStr for FontSize {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            _ => Err(ParsePreferenceError::FontSize(s.to_string())),
        }
    }
}

/// Named accent colors: (slug, display name, ARGB).
const PALETTE: [(&str, &str, u32); 4] = [
    ("purple", "Default Purple", 0xFF67_50A4),
    ("red", "Sunset Red", 0xFFD3_2F2F),
    ("blue", "Ocean Blue", 0xFF19_76D2),
    ("green", "Forest Green", 0xFF38_8E3C),
];

/// Accent color as 0xAARRGGBB.
///
/// # Examples
///
/// ```
/// use jot::domain::AccentColor;
///
/// let blue: AccentColor = "blue".parse().unwrap();
/// assert_eq!(blue.name(), Some("Ocean Blue"));
/// assert_eq!(blue.to_string(), "#FF1976D2");
///
/// let custom: AccentColor = "#123456".parse().unwrap();
/// assert_eq!(custom.argb(), 0xFF123456);
/// assert_eq!(custom.name(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor(u32);

impl AccentColor {
    pub const DEFAULT_PURPLE: AccentColor = AccentColor(PALETTE[0].2);

    pub fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn argb(self) -> u32 {
        self.0
    }

    /// Palette name for this color, or `None` for a custom value.
    pub fn name(self) -> Option<&'static str> {
        PALETTE
            .iter()
            .find(|(_, _, argb)| *argb == self.0)
            .map(|(_, name, _)| *name)
    }

    /// All palette colors with their display names.
    pub fn palette() -> impl Iterator<Item = (&'static str, AccentColor)> {
        PALETTE
            .iter()
            .map(|(_, name, argb)| (*name, AccentColor(*argb)))
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self::DEFAULT_PURPLE
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for AccentColor {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePreferenceError::Color(s.to_string());
        let wanted = normalize(s);

        if let Some((_, _, argb)) = PALETTE.iter().find(|(slug, _, _)| *slug == wanted) {
            return Ok(Self(*argb));
        }

        let hex = wanted.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for AccentColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Display and query settings for the current session. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub sort_order: SortOrder,
    pub search_query: String,
    pub view_mode: ViewMode,
    pub font_size: FontSize,
    pub accent_color: AccentColor,
    pub dark_mode: bool,
}

impl Preferences {
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
