// 🧭 Menu Commands
// Interactive add, backup, view-by-id

use crate::config::Config;
use crate::console::Console;
use crate::db::{Store, UpsertOutcome};
use crate::error::InventoryError;
use crate::exporter::export_csv;
use crate::product::{format_price, is_valid_price_input, parse_price, parse_quantity, NewProduct, Product};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};

/// Token that leaves the view-by-id loop
pub const RETURN_TOKEN: &str = "r";

// ============================================================================
// COMMAND TABLE
// ============================================================================

/// Dispatchable menu commands, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Backup,
    View,
}

impl Command {
    /// Display order of the menu
    pub const ALL: [Command; 3] = [Command::Add, Command::Backup, Command::View];

    /// Single-letter code typed at the menu
    pub fn code(&self) -> &'static str {
        match self {
            Command::Add => "a",
            Command::Backup => "b",
            Command::View => "v",
        }
    }

    /// One-line menu description
    pub fn description(&self) -> &'static str {
        match self {
            Command::Add => "Add new product to the database.",
            Command::Backup => "Backup the database to csv file.",
            Command::View => "View product by id.",
        }
    }

    pub fn from_code(code: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        store: &mut Store,
        config: &Config,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        match self {
            Command::Add => add_product(store, console),
            Command::Backup => backup(store, config, console),
            Command::View => view_product(store, console),
        }
    }
}

/// Notice printed whenever an existing product gets overwritten
pub fn overwrite_notice(name: &str) -> String {
    format!("Product repeated last update saved.\nName: {}", name)
}

// ============================================================================
// ADD
// ============================================================================

/// Prompt for a product and upsert it dated today
pub fn add_product<R: BufRead, W: Write>(
    store: &mut Store,
    console: &mut Console<R, W>,
) -> Result<()> {
    add_product_on(store, console, Local::now().date_naive())
}

fn add_product_on<R: BufRead, W: Write>(
    store: &mut Store,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<()> {
    let Some(name) = console.prompt("Please enter the name of your product: ")? else {
        return Ok(());
    };
    let Some(price) = prompt_price(console)? else {
        return Ok(());
    };
    let Some(quantity) = prompt_quantity(console)? else {
        return Ok(());
    };

    let product = NewProduct::new(&name, price, quantity, today);

    match store.upsert(&product)? {
        UpsertOutcome::Inserted(id) => {
            console.say(&format!("Product {} added with id {}.", product.name, id))?
        }
        UpsertOutcome::Updated(_) => console.say(&overwrite_notice(&product.name))?,
        UpsertOutcome::Unchanged(_) => {}
    }

    Ok(())
}

fn prompt_price<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<i64>> {
    loop {
        let Some(input) = console.prompt("Please enter a price (in format $9.99): ")? else {
            return Ok(None);
        };

        let input = input.trim();
        if is_valid_price_input(input) {
            return Ok(Some(parse_price(input)?));
        }

        console.say("Please enter the price in the correct format.")?;
    }
}

fn prompt_quantity<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Option<i64>> {
    loop {
        let Some(input) = console.prompt("Please enter the quantity: ")? else {
            return Ok(None);
        };

        match parse_quantity(&input) {
            Ok(quantity) => return Ok(Some(quantity)),
            Err(InventoryError::NegativeQuantity(_)) => {
                console.say("Quantity must be greater or the same as 0.")?
            }
            Err(_) => console.say("The quantity must be a number.")?,
        }
    }
}

// ============================================================================
// BACKUP
// ============================================================================

/// Export the whole table to the configured backup file
pub fn backup<R: BufRead, W: Write>(
    store: &mut Store,
    config: &Config,
    console: &mut Console<R, W>,
) -> Result<()> {
    export_csv(store, &config.backup_csv)?;
    console.say(&format!(
        "A backup was created in {}.\n",
        config.backup_csv.display()
    ))?;
    Ok(())
}

// ============================================================================
// VIEW BY ID
// ============================================================================

/// Look products up by id until the user types `r`
pub fn view_product<R: BufRead, W: Write>(
    store: &mut Store,
    console: &mut Console<R, W>,
) -> Result<()> {
    loop {
        // Recomputed every round; the range reflects the current table
        let Some((min_id, max_id)) = store.id_range()? else {
            console.say("There are no products to view yet.")?;
            return Ok(());
        };

        let message = format!(
            "Please enter an id ({} - {}, {} to return): ",
            min_id, max_id, RETURN_TOKEN
        );
        let Some(input) = console.prompt(&message)? else {
            return Ok(());
        };

        let input = input.trim();
        if input.eq_ignore_ascii_case(RETURN_TOKEN) {
            return Ok(());
        }

        let is_number = !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit());
        let Ok(id) = input.parse::<i64>() else {
            if is_number {
                // Too large for an id; still a number
                console.say(&format!("The id must be between {} and {}", min_id, max_id))?;
            } else {
                console.say(&format!("Value must be a number or the letter {}", RETURN_TOKEN))?;
            }
            continue;
        };

        match store.get(id)? {
            Some(product) => console.say(&render_product(&product))?,
            None => console.say(&format!(
                "The id must be between {} and {}",
                min_id, max_id
            ))?,
        }
    }
}

/// Multi-line detail block for one product
pub fn render_product(product: &Product) -> String {
    format!(
        "\nid: {}\nName: {}\n{}\nPrice: {} ({} cents)\nQuantity: {}\nDate Updated: {}\n",
        product.id,
        product.name,
        "=".repeat(5 + product.name.chars().count()),
        format_price(product.price),
        product.price,
        product.quantity,
        product.updated,
    )
}
