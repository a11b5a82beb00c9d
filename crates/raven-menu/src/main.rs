//! raven-menu - stand-alone launcher menu
//!
//! Reads menu items from stdin, shows them in the terminal and runs (or
//! prints) the command of the chosen item.

mod keys;
mod terminal;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use tracing::{debug, info};

use raven_menu_core::debug::dump_menu;
use raven_menu_core::{
    Activation, ConfigPaths, GridGeometry, ItemList, Menu, MenuConfig, MenuSession, Outcome, PathLookup,
    ShellSpawner,
};

use terminal::Terminal;

#[derive(Parser)]
#[command(name = "raven-menu")]
#[command(about = "Launcher menu that reads its items from stdin")]
#[command(version)]
struct Cli {
    /// Open the submenu with this tag first
    #[arg(long, value_name = "TAG")]
    checkout: Option<String>,

    /// Print the selected command to stdout instead of running it
    #[arg(long)]
    no_spawn: bool,

    /// Read settings from this file
    #[arg(long, value_name = "PATH")]
    config_file: Option<String>,

    /// Always show exactly this many rows
    #[arg(long, value_name = "N")]
    fixed_height: Option<usize>,

    /// Dump the parsed items and enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.debug) {
        eprintln!("raven-menu: failed to set up logging: {:#}", e);
    }

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("fatal: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("raven_menu={level}").parse()?)
                .add_directive(format!("raven_menu_core={level}").parse()?),
        )
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<MenuConfig> {
    let paths = match &cli.config_file {
        Some(path) => ConfigPaths::with_config_file(path),
        None => ConfigPaths::new(),
    };

    let mut config = MenuConfig::load(&paths.config_file)?;
    if cli.no_spawn {
        config.set_spawn(false);
    }
    if let Some(rows) = cli.fixed_height {
        config.set_fixed_height(rows);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<u8> {
    let config = load_config(cli)?;

    let items = ItemList::from_reader(io::stdin().lock())?;
    debug!("Read {} items", items.len());

    let menu = Menu::open(items, cli.checkout.as_deref(), config.limits())?;
    if cli.debug {
        dump_menu(&menu, &mut io::stdout().lock()).context("failed to write debug dump")?;
    }

    let geometry = GridGeometry::from_config(&config);
    let mut session = MenuSession::new(menu, config, geometry);

    // the terminal is restored before the outcome is acted upon
    let outcome = {
        let mut terminal = Terminal::open().context("failed to initialize terminal")?;
        event_loop(&mut session, &mut terminal)?
    };

    if let Outcome::Activated(Activation::Print(command)) = &outcome {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", command)?;
        stdout.flush()?;
    }

    let code = outcome.exit_code().unwrap_or(0);
    Ok(u8::try_from(code).unwrap_or(1))
}

/// Block on terminal events until one of them ends the menu
fn event_loop(session: &mut MenuSession<GridGeometry>, terminal: &mut Terminal) -> Result<Outcome> {
    let programs = PathLookup::from_env();
    let mut spawner = ShellSpawner;

    session.draw(terminal, &programs)?;

    loop {
        let event = event::read().context("failed to read terminal event")?;
        let Some(input) = keys::translate(event) else {
            continue;
        };

        let outcome = session.handle(input, &mut spawner)?;
        if outcome.exit_code().is_some() {
            info!("Menu finished: {:?}", outcome);
            return Ok(outcome);
        }
        if outcome.needs_redraw() {
            session.draw(terminal, &programs)?;
        }
    }
}
