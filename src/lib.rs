//! jot - in-memory notes with a live, sorted, searchable view

pub mod cli;
pub mod domain;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{LevelFilter, info};
use std::io::{self, IsTerminal};

use cli::{Cli, Command, config::Config, shell::Shell};

/// Maps `-v` occurrences to a log level; `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let live = match &cli.command {
        Some(Command::Completions(args)) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "jot", &mut io::stdout());
            return Ok(());
        }
        Some(Command::Shell(args)) => args.live,
        None => false,
    };

    let config = Config::load(cli.config.as_deref())?;
    let store = config.build_store(cli.no_samples)?;
    info!("loaded store with {} note(s)", store.len());

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout().lock(), io::stderr())
        .with_prompt(interactive)
        .with_live_view(live);
    shell.run()
}
