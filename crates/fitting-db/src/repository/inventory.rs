//! # Inventory Repository
//!
//! Database operations for per-variant stock records.
//!
//! Inventory is one-to-one with variants and only ever written when a
//! variant is newly created, so `id` order is creation order. The seeding
//! tests lean on that for the stock-bucket distribution checks.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use fitting_core::Inventory;

const INVENTORY_COLUMNS: &str =
    "id, product_variant_id, quantity, low_stock_threshold, created_at";

/// Repository for inventory database operations.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: SqlitePool,
}

impl InventoryRepository {
    /// Creates a new InventoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InventoryRepository { pool }
    }

    /// Inserts the stock record for a variant.
    ///
    /// ## Returns
    /// * `Ok(Inventory)` - Inserted row
    /// * `Err(DbError::UniqueViolation)` - Variant already has inventory
    pub async fn insert(
        &self,
        product_variant_id: i64,
        quantity: i64,
        low_stock_threshold: i64,
    ) -> DbResult<Inventory> {
        debug!(product_variant_id, quantity, "Inserting inventory");

        let now = Utc::now();

        let inventory = sqlx::query_as::<_, Inventory>(&format!(
            "INSERT INTO inventory (product_variant_id, quantity, low_stock_threshold, created_at) \
             VALUES (?1, ?2, ?3, ?4) \
             RETURNING {INVENTORY_COLUMNS}"
        ))
        .bind(product_variant_id)
        .bind(quantity)
        .bind(low_stock_threshold)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(inventory)
    }

    /// Counts all inventory rows.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM inventory")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Returns every stored quantity in creation (id) order.
    ///
    /// Used to verify the out-of-stock / low-stock / in-stock bucketing
    /// the seeder applies across products.
    pub async fn quantities_in_creation_order(&self) -> DbResult<Vec<i64>> {
        let quantities: Vec<i64> =
            sqlx::query_scalar("SELECT quantity FROM inventory ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(quantities)
    }

    /// Deletes every inventory row. Reset phase only.
    pub async fn delete_all(&self) -> DbResult<u64> {
        debug!("Deleting all inventory");

        let result = sqlx::query("DELETE FROM inventory")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
