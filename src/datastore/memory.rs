//! In-Memory Table Store
//!
//! Table-oriented collaborator offering select-by-equality and
//! insert-row over JSON rows, guarded by an async RwLock.

use std::collections::HashMap;

use serde_json::{json, Map, Value};
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};

/// One stored row: a JSON object keyed by column name.
pub type Row = Map<String, Value>;

// == Table Store ==
/// In-memory stand-in for the hosted database service.
///
/// Reads from a table that was never written fail with an
/// `ExternalStore` error; inserts create tables lazily.
#[derive(Debug, Default)]
pub struct TableStore {
    tables: RwLock<HashMap<String, Vec<Row>>>,
}

impl TableStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Select All ==
    /// Returns every row of `table`.
    pub async fn select_all(&self, table: &str) -> Result<Vec<Row>> {
        let tables = self.tables.read().await;
        tables
            .get(table)
            .cloned()
            .ok_or_else(|| ApiError::ExternalStore(format!("unknown table '{}'", table)))
    }

    // == Select Where ==
    /// Returns the rows of `table` whose columns equal every filter
    /// field. An empty filter map selects everything.
    pub async fn select_where(&self, table: &str, filters: &Map<String, Value>) -> Result<Vec<Row>> {
        let rows = self.select_all(table).await?;

        Ok(rows
            .into_iter()
            .filter(|row| {
                filters
                    .iter()
                    .all(|(field, expected)| row.get(field) == Some(expected))
            })
            .collect())
    }

    // == Insert ==
    /// Appends a row to `table`, creating the table on first write.
    pub async fn insert(&self, table: &str, row: Row) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default().push(row);
        Ok(())
    }

    // == Ensure Table ==
    /// Creates an empty table if it does not exist yet, so reads of a
    /// provisioned-but-empty table succeed.
    pub async fn ensure_table(&self, table: &str) {
        let mut tables = self.tables.write().await;
        tables.entry(table.to_string()).or_default();
    }
}

// == Demo Seed ==
/// Populates the catalog and prize tables with a small demo data set.
pub async fn seed_demo(store: &TableStore) -> Result<()> {
    let rows: Vec<(&str, Value)> = vec![
        ("categories", json!({"id": 1, "name": "Tools", "slug": "tools"})),
        ("categories", json!({"id": 2, "name": "Garden", "slug": "garden"})),
        ("products", json!({"id": 1, "name": "Hammer", "category": "tools", "price": 1290, "in_stock": true})),
        ("products", json!({"id": 2, "name": "Screwdriver", "category": "tools", "price": 590, "in_stock": true})),
        ("products", json!({"id": 3, "name": "Watering Can", "category": "garden", "price": 990, "in_stock": false})),
        ("banners", json!({"id": 1, "title": "Summer Sale", "active": true})),
        ("banners", json!({"id": 2, "title": "Clearance", "active": false})),
        ("prizes", json!({"id": 1, "name": "10% off"})),
        ("prizes", json!({"id": 2, "name": "Free shipping"})),
        ("prizes", json!({"id": 3, "name": "Sticker pack"})),
    ];

    for (table, row) in rows {
        if let Value::Object(map) = row {
            store.insert(table, map).await?;
        }
    }

    // Provision the play log so admin listings work before any play.
    store.ensure_table("plays").await;

    Ok(())
}
