//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;
pub mod shell;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::{AccentColor, FontSize, SortOrder, ViewMode};
use output::OutputFormat;

/// jot - in-memory notes with a live, sorted, searchable view
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/jot/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start with an empty store instead of the sample notes
    #[arg(long, global = true)]
    pub no_samples: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive session reading commands from stdin (default)
    Shell(ShellArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `shell` command
#[derive(Args, Debug, Default)]
pub struct ShellArgs {
    /// Re-render the note list after every change
    #[arg(long)]
    pub live: bool,
}

/// Arguments for the `completions` command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

// ===========================================
// Session commands
// ===========================================

/// One line typed into the session shell.
#[derive(Parser, Debug)]
#[command(
    name = "jot",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List notes matching the search, in the current sort order
    #[command(name = "ls", alias = "list")]
    List(ListArgs),

    /// Show a note's contents
    Show(ShowArgs),

    /// Create a new note
    New(NewArgs),

    /// Change a note's title, content, or tag
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm", alias = "delete")]
    Remove(RemoveArgs),

    /// Set the search text (no query clears it)
    Search(SearchArgs),

    /// Set the sort order
    Sort(SortArgs),

    /// List registered tags
    Tags(TagsArgs),

    /// Register or unregister a tag
    Tag(TagArgs),

    /// Set the view mode
    View(ViewArgs),

    /// Set the font size
    Font(FontArgs),

    /// Set the accent color (no color lists the palette)
    Accent(AccentArgs),

    /// Switch dark mode
    Dark(DarkArgs),

    /// Show the current preferences
    Prefs(PrefsArgs),

    /// Print this help
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Arguments for the `ls` command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Note ID or title
    pub note: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `new` command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note content
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Tag for the note
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Note ID or title
    pub note: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(short, long)]
    pub content: Option<String>,

    /// New tag
    #[arg(short, long, conflicts_with = "no_tag")]
    pub tag: Option<String>,

    /// Remove the note's tag
    #[arg(long)]
    pub no_tag: bool,
}

/// Arguments for the `rm` command
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Note ID or title
    pub note: String,
}

/// Arguments for the `search` command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text; words are joined with single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

impl SearchArgs {
    pub fn query(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for the `sort` command
#[derive(Args, Debug)]
pub struct SortArgs {
    /// title-asc, title-desc, date-asc, or date-desc
    pub order: SortOrder,
}

/// Arguments for the `tags` command
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Show how many notes use each tag
    #[arg(long)]
    pub counts: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `tag` command
#[derive(Args, Debug)]
pub struct TagArgs {
    #[command(subcommand)]
    pub action: TagAction,
}

#[derive(Subcommand, Debug)]
pub enum TagAction {
    /// Register a tag
    Add {
        /// Tag name
        name: String,
    },
    /// Unregister a tag (notes keep it)
    #[command(alias = "remove")]
    Rm {
        /// Tag name
        name: String,
    },
}

/// Arguments for the `view` command
#[derive(Args, Debug)]
pub struct ViewArgs {
    /// list or grid
    pub mode: ViewMode,
}

/// Arguments for the `font` command
#[derive(Args, Debug)]
pub struct FontArgs {
    /// small, medium, or large
    pub size: FontSize,
}

/// Arguments for the `accent` command
#[derive(Args, Debug)]
pub struct AccentArgs {
    /// Palette name (purple, red, blue, green) or quoted '#RRGGBB'
    pub color: Option<AccentColor>,
}

/// Arguments for the `dark` command
#[derive(Args, Debug)]
pub struct DarkArgs {
    #[arg(value_enum, default_value_t = DarkSwitch::Toggle)]
    pub switch: DarkSwitch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DarkSwitch {
    On,
    Off,
    Toggle,
}

/// Arguments for the `prefs` command
#[derive(Args, Debug)]
pub struct PrefsArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}
