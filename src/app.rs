// 🖥️ Menu Loop
// Startup import + single-letter command dispatch

use crate::commands::{overwrite_notice, Command};
use crate::config::Config;
use crate::console::Console;
use crate::db::Store;
use crate::importer::{import_csv, ImportSummary};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Typed at the menu to exit the program
pub const QUIT_TOKEN: &str = "q";

/// What one line of menu input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Quit,
    Run(Command),
    Unknown(String),
}

impl MenuChoice {
    /// Trimmed, lower-cased match against the quit token and command codes
    pub fn parse(input: &str) -> Self {
        let choice = input.trim().to_lowercase();

        if choice == QUIT_TOKEN {
            return MenuChoice::Quit;
        }

        match Command::from_code(&choice) {
            Some(command) => MenuChoice::Run(command),
            None => MenuChoice::Unknown(choice),
        }
    }
}

/// Import the startup CSV, announcing every overwritten product
pub fn startup<R: BufRead, W: Write>(
    store: &mut Store,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<ImportSummary> {
    let summary = import_csv(store, &config.inventory_csv)?;
    tracing::info!(products = store.count()?, "inventory loaded");

    for name in &summary.updated {
        console.say(&overwrite_notice(name))?;
    }

    Ok(summary)
}

/// Show the menu and dispatch until `q` (or end of input)
pub fn menu_loop<R: BufRead, W: Write>(
    store: &mut Store,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        console.say(&format!("Enter '{}' to quit.", QUIT_TOKEN))?;
        for command in Command::ALL {
            console.say(&format!("{}) {}", command.code(), command.description()))?;
        }

        let Some(input) = console.prompt("Choose an option: ")? else {
            return Ok(());
        };
        console.say("\n")?;

        match MenuChoice::parse(&input) {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::Run(command) => {
                tracing::debug!(?command, "menu dispatch");
                command.run(store, config, console)?;
            }
            MenuChoice::Unknown(_) => console.say("You must choose an option.")?,
        }
    }
}

/// Whole session: import, then the menu
pub fn session<R: BufRead, W: Write>(
    store: &mut Store,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<()> {
    startup(store, config, console)?;
    menu_loop(store, config, console)
}

/// Open the store, run a session on stdin/stdout, close the store
pub fn run(config: &Config) -> Result<()> {
    let mut store = Store::open(&config.db_path)?;
    let mut console = Console::stdio();

    let result = session(&mut store, config, &mut console);
    let closed = store.close();

    result.and(closed)
}
