// 📥 CSV Import
// inventory.csv → NewProduct values → Store::upsert

use crate::db::{Store, UpsertOutcome};
use crate::error::InventoryError;
use crate::product::{parse_date, parse_price, NewProduct};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw row of the inventory CSV, as text
#[derive(Debug, Deserialize)]
struct CsvRow {
    product_name: String,
    product_price: String,
    product_quantity: String,
    date_updated: String,
}

impl CsvRow {
    fn into_product(self) -> Result<NewProduct> {
        let price = parse_price(&self.product_price)?;
        // Sign is not checked on import
        let quantity: i64 = self
            .product_quantity
            .trim()
            .parse()
            .map_err(|_| InventoryError::InvalidQuantity(self.product_quantity.clone()))?;
        let updated = parse_date(&self.date_updated)?;

        Ok(NewProduct::new(&self.product_name, price, quantity, updated))
    }
}

/// Result of importing one CSV file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    /// Names whose existing row was overwritten, in file order
    pub updated: Vec<String>,
    pub unchanged: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.inserted + self.updated.len() + self.unchanged
    }
}

/// Parse CSV rows from any reader.
///
/// Every row is parsed before anything is returned, so one bad row fails the
/// whole batch.
pub fn read_products<R: Read>(reader: R) -> Result<Vec<NewProduct>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut products = Vec::new();

    for (line_num, result) in rdr.deserialize::<CsvRow>().enumerate() {
        // +2: 1-indexed + header row
        let line = line_num + 2;
        let row = result.with_context(|| format!("Failed to read CSV line {}", line))?;
        let product = row
            .into_product()
            .with_context(|| format!("Failed to parse CSV line {}", line))?;
        products.push(product);
    }

    Ok(products)
}

/// Load every product from a CSV file
pub fn load_csv(csv_path: &Path) -> Result<Vec<NewProduct>> {
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    read_products(file).with_context(|| format!("Failed to load {}", csv_path.display()))
}

/// Import a CSV file into the store, one upsert per row
pub fn import_csv(store: &mut Store, csv_path: &Path) -> Result<ImportSummary> {
    let products = load_csv(csv_path)?;
    let summary = import_products(store, &products)?;

    tracing::info!(
        path = %csv_path.display(),
        inserted = summary.inserted,
        updated = summary.updated.len(),
        unchanged = summary.unchanged,
        total = summary.total(),
        "csv import finished"
    );

    Ok(summary)
}

/// Upsert already-parsed products, in order
pub fn import_products(store: &mut Store, products: &[NewProduct]) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for product in products {
        match store.upsert(product)? {
            UpsertOutcome::Inserted(_) => summary.inserted += 1,
            UpsertOutcome::Updated(_) => summary.updated.push(product.name.clone()),
            UpsertOutcome::Unchanged(_) => summary.unchanged += 1,
        }
    }

    Ok(summary)
}
