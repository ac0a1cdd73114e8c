// 📤 CSV Export (Backup)
// products table → backup.csv

use crate::db::Store;
use crate::product::{format_date_mdy, Product};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub const BACKUP_HEADER: [&str; 4] = [
    "product_name",
    "product_price",
    "product_quantity",
    "date_updated",
];

/// One backup row; header names match the import file
#[derive(Debug, Serialize)]
struct BackupRow<'a> {
    product_name: &'a str,
    /// Raw cents, not reformatted as dollars
    product_price: i64,
    product_quantity: i64,
    date_updated: String,
}

impl<'a> From<&'a Product> for BackupRow<'a> {
    fn from(product: &'a Product) -> Self {
        BackupRow {
            product_name: &product.name,
            product_price: product.price,
            product_quantity: product.quantity,
            date_updated: format_date_mdy(product.updated),
        }
    }
}

/// Write every product as CSV to any writer, returns rows written
pub fn write_products<W: Write>(products: &[Product], writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Header written by hand so an empty store still gets one
    wtr.write_record(BACKUP_HEADER)?;

    for product in products {
        wtr.serialize(BackupRow::from(product))?;
    }

    wtr.flush()?;
    Ok(products.len())
}

/// Dump the whole store to `path`, replacing any existing file
pub fn export_csv(store: &Store, path: &Path) -> Result<usize> {
    let products = store.all()?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create backup file: {}", path.display()))?;

    let written = write_products(&products, file)
        .with_context(|| format!("Failed to write backup: {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = written, "backup written");
    Ok(written)
}
