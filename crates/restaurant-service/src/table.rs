//! Table operations.

use serde::{Deserialize, Serialize};
use tracing::info;

use restaurant_core::result::AppResult;
use restaurant_core::types::DocumentPatch;
use restaurant_database::repositories::TableRepository;
use restaurant_entity::Table;

/// Data for a new table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTable {
    /// Seating capacity.
    pub number_of_guests: u32,
    /// Table number.
    pub table_number: u32,
}

/// Partial table update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTable {
    /// New seating capacity.
    pub number_of_guests: Option<u32>,
    /// New table number.
    pub table_number: Option<u32>,
}

/// Table CRUD.
#[derive(Debug, Clone)]
pub struct TableService {
    tables: TableRepository,
}

impl TableService {
    /// Creates a new table service.
    pub fn new(tables: TableRepository) -> Self {
        Self { tables }
    }

    /// All tables.
    pub async fn list(&self) -> AppResult<Vec<Table>> {
        self.tables.find_all().await
    }

    /// A table by `table_id`.
    pub async fn get(&self, table_id: &str) -> AppResult<Table> {
        self.tables.get(table_id).await
    }

    /// Create a table.
    pub async fn create(&self, req: CreateTable) -> AppResult<Table> {
        let table = Table::new(req.number_of_guests, req.table_number);
        self.tables.insert(&table).await?;
        info!(table_id = %table.table_id, table_number = table.table_number, "Table created");
        Ok(table)
    }

    /// Update a table.
    pub async fn update(&self, table_id: &str, req: UpdateTable) -> AppResult<Table> {
        let patch = DocumentPatch::new()
            .set_opt("number_of_guests", req.number_of_guests)?
            .set_opt("table_number", req.table_number)?;
        self.tables.update(table_id, patch).await
    }
}
