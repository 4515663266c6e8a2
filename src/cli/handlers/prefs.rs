//! Preference command handlers (view, font, accent, dark, prefs).

use anyhow::Result;
use std::io::Write;

use crate::cli::output::{Output, OutputFormat, PreferencesListing};
use crate::cli::{AccentArgs, DarkArgs, DarkSwitch, FontArgs, PrefsArgs, ViewArgs};
use crate::domain::AccentColor;
use crate::store::NoteStore;

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn describe_accent(color: AccentColor) -> String {
    match color.name() {
        Some(name) => format!("{} ({})", name, color),
        None => color.to_string(),
    }
}

pub fn handle_view<W: Write>(args: &ViewArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    store.set_view_mode(args.mode);
    writeln!(out, "View: {}", args.mode)?;
    Ok(())
}

pub fn handle_font<W: Write>(args: &FontArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    store.set_font_size(args.size);
    writeln!(out, "Font: {} ({}pt)", args.size, args.size.points())?;
    Ok(())
}

/// Sets the accent color, or lists the palette when no color is given.
pub fn handle_accent<W: Write>(
    args: &AccentArgs,
    store: &mut NoteStore,
    out: &mut W,
) -> Result<()> {
    let Some(color) = args.color else {
        let current = store.preferences().accent_color;
        for (name, color) in AccentColor::palette() {
            let marker = if color == current { '*' } else { ' ' };
            writeln!(out, "{} {:<16} {}", marker, name, color)?;
        }
        return Ok(());
    };

    store.set_accent_color(color);
    writeln!(out, "Accent: {}", describe_accent(color))?;
    Ok(())
}

pub fn handle_dark<W: Write>(args: &DarkArgs, store: &mut NoteStore, out: &mut W) -> Result<()> {
    match args.switch {
        DarkSwitch::On => store.set_dark_mode(true),
        DarkSwitch::Off => store.set_dark_mode(false),
        DarkSwitch::Toggle => store.toggle_dark_mode(),
    }
    writeln!(out, "Dark mode: {}", on_off(store.preferences().dark_mode))?;
    Ok(())
}

pub fn handle_prefs<W: Write>(args: &PrefsArgs, store: &NoteStore, out: &mut W) -> Result<()> {
    let prefs = store.preferences();

    match args.format {
        OutputFormat::Human => {
            let search = if prefs.search_query.is_empty() {
                "(none)".to_string()
            } else {
                format!("'{}'", prefs.search_query)
            };
            writeln!(out, "Sort:    {}", prefs.sort_order.label())?;
            writeln!(out, "Search:  {}", search)?;
            writeln!(out, "View:    {}", prefs.view_mode)?;
            writeln!(
                out,
                "Font:    {} ({}pt)",
                prefs.font_size,
                prefs.font_size.points()
            )?;
            writeln!(out, "Accent:  {}", describe_accent(prefs.accent_color))?;
            writeln!(out, "Dark:    {}", on_off(prefs.dark_mode))?;
        }
        OutputFormat::Json => {
            let listing = PreferencesListing::from(prefs);
            writeln!(out, "{}", Output::new(listing).to_json()?)?;
        }
    }
    Ok(())
}
