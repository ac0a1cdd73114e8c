// Inventory Tracker - Core Library
// Exposes all modules for use in the CLI and tests

pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod logging;
pub mod product;

// Re-export commonly used types
pub use app::{menu_loop, run, session, startup, MenuChoice, QUIT_TOKEN};
pub use commands::{add_product, backup, view_product, Command};
pub use config::Config;
pub use console::Console;
pub use db::{setup_database, Store, UpsertOutcome};
pub use error::InventoryError;
pub use exporter::{export_csv, write_products};
pub use importer::{import_csv, import_products, load_csv, read_products, ImportSummary};
pub use product::{
    format_date_mdy, format_price, is_valid_price_input, parse_date, parse_price,
    parse_quantity, NewProduct, Product,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
