// 🗄️ Record Store - SQLite products table
// One table, explicit connection handle, native upsert keyed by product name

use crate::product::{NewProduct, Product};
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

/// What a single upsert did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// Name was new; row created with this id
    Inserted(i64),
    /// Name existed and the incoming date was not older; row overwritten
    Updated(i64),
    /// Name existed with a newer date; row left as it was
    Unchanged(i64),
}

impl UpsertOutcome {
    pub fn id(&self) -> i64 {
        match self {
            UpsertOutcome::Inserted(id)
            | UpsertOutcome::Updated(id)
            | UpsertOutcome::Unchanged(id) => *id,
        }
    }
}

/// Handle to the product database.
///
/// Opened once at startup and passed to every operation; `close` releases
/// the connection and reports any error doing so.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a file-backed store and make sure the table exists
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        // WAL for crash recovery (file-backed only)
        conn.pragma_update(None, "journal_mode", "WAL")?;

        setup_database(&conn)?;
        tracing::debug!(path = %path.display(), "store opened");
        Ok(Store { conn })
    }

    /// In-memory store (tests)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        setup_database(&conn)?;
        Ok(Store { conn })
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")?;
        tracing::debug!("store closed");
        Ok(())
    }

    /// Insert a product, or refresh the existing row with the same name.
    ///
    /// The write itself is a single `INSERT ... ON CONFLICT DO UPDATE`
    /// statement; the existing row is only overwritten when its stored date
    /// is on or before the incoming one.
    pub fn upsert(&mut self, product: &NewProduct) -> Result<UpsertOutcome> {
        let tx = self.conn.transaction()?;

        let existing: Option<i64> = tx
            .query_row(
                "SELECT product_id FROM products WHERE product_name = ?1",
                params![product.name],
                |row| row.get(0),
            )
            .optional()?;

        let written: Option<i64> = tx
            .query_row(
                "INSERT INTO products (product_name, product_price, product_quantity, date_updated)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(product_name) DO UPDATE SET
                     product_price = excluded.product_price,
                     product_quantity = excluded.product_quantity,
                     date_updated = excluded.date_updated
                 WHERE products.date_updated <= excluded.date_updated
                 RETURNING product_id",
                params![product.name, product.price, product.quantity, product.updated],
                |row| row.get(0),
            )
            .optional()?;

        tx.commit()?;

        let outcome = match (existing, written) {
            (None, Some(id)) => UpsertOutcome::Inserted(id),
            (Some(id), Some(_)) => UpsertOutcome::Updated(id),
            (Some(id), None) => UpsertOutcome::Unchanged(id),
            (None, None) => bail!("Upsert of '{}' wrote no row", product.name),
        };

        tracing::debug!(name = %product.name, ?outcome, "upsert");
        Ok(outcome)
    }

    /// Get a product by id
    pub fn get(&self, id: i64) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                "SELECT product_id, product_name, product_price, product_quantity, date_updated
                 FROM products
                 WHERE product_id = ?1",
                params![id],
                product_from_row,
            )
            .optional()?;

        Ok(product)
    }

    /// Get a product by its (unique) name
    #[cfg(test)]
    pub fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                "SELECT product_id, product_name, product_price, product_quantity, date_updated
                 FROM products
                 WHERE product_name = ?1",
                params![name],
                product_from_row,
            )
            .optional()?;

        Ok(product)
    }

    /// Smallest and largest id present, `None` when the table is empty
    pub fn id_range(&self) -> Result<Option<(i64, i64)>> {
        let (min, max): (Option<i64>, Option<i64>) = self.conn.query_row(
            "SELECT MIN(product_id), MAX(product_id) FROM products",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(min.zip(max))
    }

    /// Every product, in id order
    pub fn all(&self) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(
            "SELECT product_id, product_name, product_price, product_quantity, date_updated
             FROM products
             ORDER BY product_id",
        )?;

        let products = stmt
            .query_map([], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;

        Ok(count)
    }
}

/// Create the products table if it isn't there yet
pub fn setup_database(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_name TEXT UNIQUE NOT NULL,
            product_price INTEGER NOT NULL,
            product_quantity INTEGER NOT NULL DEFAULT 0,
            date_updated TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        quantity: row.get(3)?,
        updated: row.get(4)?,
    })
}
