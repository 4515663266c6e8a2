//! Configuration file support.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::{Preferences, TagRegistry};
use crate::store::{NoteStore, sample_notes, sample_tags};

/// Session defaults loaded from the config file.
///
/// Every field is optional; absent fields fall back to the built-in
/// defaults. Nothing is ever written back.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Start the session with the sample notes and tags
    pub samples: Option<bool>,

    /// Initial sort order (title-asc, title-desc, date-asc, date-desc)
    pub sort: Option<String>,

    /// Initial view mode (list or grid)
    pub view: Option<String>,

    /// Initial font size (small, medium, large)
    pub font: Option<String>,

    /// Initial accent color (palette name or hex)
    pub accent: Option<String>,

    /// Start in dark mode
    pub dark_mode: Option<bool>,

    /// Initial tag registry, replacing the defaults
    pub tags: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing default file yields the default config. A missing file
    /// named explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (config_path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        if !config_path.exists() {
            if explicit {
                bail!("config file not found: {}", config_path.display());
            }
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses config from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Whether the session starts with sample data.
    ///
    /// Precedence order:
    /// 1. CLI `--no-samples`
    /// 2. Config file `samples` setting
    /// 3. Samples enabled
    pub fn use_samples(&self, cli_no_samples: bool) -> bool {
        !cli_no_samples && self.samples.unwrap_or(true)
    }

    /// Builds the initial preferences, validating every configured value.
    pub fn preferences(&self) -> Result<Preferences> {
        let mut prefs = Preferences::default();
        if let Some(sort) = &self.sort {
            prefs.sort_order = sort.parse().context("invalid `sort` in config")?;
        }
        if let Some(view) = &self.view {
            prefs.view_mode = view.parse().context("invalid `view` in config")?;
        }
        if let Some(font) = &self.font {
            prefs.font_size = font.parse().context("invalid `font` in config")?;
        }
        if let Some(accent) = &self.accent {
            prefs.accent_color = accent.parse().context("invalid `accent` in config")?;
        }
        if let Some(dark) = self.dark_mode {
            prefs.dark_mode = dark;
        }
        Ok(prefs)
    }

    /// Builds the session's note store.
    pub fn build_store(&self, cli_no_samples: bool) -> Result<NoteStore> {
        let samples = self.use_samples(cli_no_samples);
        let notes = if samples { sample_notes() } else { Vec::new() };
        let tags = match &self.tags {
            Some(names) => names.iter().collect(),
            None if samples => sample_tags(),
            None => TagRegistry::new(),
        };
        NoteStore::from_parts(notes, tags, self.preferences()?)
            .context("failed to build note store")
    }
}
