//! The session shell: reads one command per line and applies it to the store.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use std::cell::Cell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use super::handlers::{
    handle_accent, handle_dark, handle_edit, handle_font, handle_list, handle_new, handle_prefs,
    handle_remove, handle_search, handle_show, handle_sort, handle_tag, handle_tags, handle_view,
    render_view,
};
use super::{SessionCommand, SessionLine};
use crate::store::{LogObserver, NoteStore, StoreEvent};

pub const PROMPT: &str = "jot> ";

/// What the shell does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented session over a note store.
///
/// Command output goes to `out`; command errors go to `err` and the
/// session carries on. Only I/O failures end [`run`](Self::run) early.
pub struct Shell<R, W, E> {
    store: NoteStore,
    input: R,
    out: W,
    err: E,
    prompt: bool,
    live: bool,
    changed: Rc<Cell<bool>>,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(mut store: NoteStore, input: R, out: W, err: E) -> Self {
        let changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&changed);
        store.subscribe(Box::new(move |_: &StoreEvent| flag.set(true)));
        store.subscribe(Box::new(LogObserver));

        Self {
            store,
            input,
            out,
            err,
            prompt: false,
            live: false,
            changed,
        }
    }

    /// Print a prompt before reading each line.
    pub fn with_prompt(mut self, enabled: bool) -> Self {
        self.prompt = enabled;
        self
    }

    /// Re-render the note view after every command that changed the store.
    pub fn with_live_view(mut self, enabled: bool) -> Self {
        self.live = enabled;
        self
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn into_store(self) -> NoteStore {
        self.store
    }

    /// Reads and executes lines until end of input or `quit`.
    pub fn run(&mut self) -> Result<()> {
        info!("session started with {} note(s)", self.store.len());
        if self.live {
            self.render()?;
        }

        let mut line = String::new();
        let mut count = 0usize;
        loop {
            if self.prompt {
                write!(self.out, "{}", PROMPT)?;
                self.out.flush()?;
            }

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                break;
            }
            count += 1;

            match self.execute_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => {
                    debug!("line {} failed: {:#}", count, err);
                    writeln!(self.err, "error: {err:#}")?;
                }
            }

            if self.live && self.changed.replace(false) {
                self.render()?;
            }
            self.out.flush()?;
        }

        info!(
            "session ended after {} line(s), revision {}",
            count,
            self.store.revision()
        );
        Ok(())
    }

    /// Parses and executes one line. Blank lines and `#` comments do nothing.
    ///
    /// Usage errors are printed the way clap formats them and do not count
    /// as failures of the line.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shell_words::split(line).context("unbalanced quotes")?;
        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                write!(self.err, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        self.execute(&parsed.command)
    }

    pub fn execute(&mut self, command: &SessionCommand) -> Result<Flow> {
        let store = &mut self.store;
        let out = &mut self.out;

        match command {
            SessionCommand::List(args) => handle_list(args, store, out)?,
            SessionCommand::Show(args) => handle_show(args, store, out)?,
            SessionCommand::New(args) => {
                handle_new(args, store, out)?;
            }
            SessionCommand::Edit(args) => handle_edit(args, store, out)?,
            SessionCommand::Remove(args) => handle_remove(args, store, out)?,
            SessionCommand::Search(args) => handle_search(args, store, out)?,
            SessionCommand::Sort(args) => handle_sort(args, store, out)?,
            SessionCommand::Tags(args) => handle_tags(args, store, out)?,
            SessionCommand::Tag(args) => handle_tag(args, store, out)?,
            SessionCommand::View(args) => handle_view(args, store, out)?,
            SessionCommand::Font(args) => handle_font(args, store, out)?,
            SessionCommand::Accent(args) => handle_accent(args, store, out)?,
            SessionCommand::Dark(args) => handle_dark(args, store, out)?,
            SessionCommand::Prefs(args) => handle_prefs(args, store, out)?,
            SessionCommand::Help => write!(out, "{}", SessionLine::command().render_help())?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render(&mut self) -> Result<()> {
        let view = self.store.list_notes();
        render_view(&view, self.store.preferences(), &mut self.out)
    }
}
