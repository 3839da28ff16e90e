//! # Product Repository
//!
//! Database operations for catalog products.
//!
//! ## Key Operations
//! - Get-or-create keyed by unique product name
//! - Gender-filtered listing for the seed summary
//! - Wholesale delete for the reset phase
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Row Lifecycle                              │
//! │                                                                         │
//! │  seed run N                          seed run N+1                       │
//! │  ──────────                          ────────────                       │
//! │  delete_all()                        delete_all()                       │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  get_or_create(def) ──► id 1..6      get_or_create(def) ──► id 7..12   │
//! │                                                                         │
//! │  Autoincrement ids are never reused, so SKUs derived from product       │
//! │  ids differ between runs.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use fitting_core::catalog::ProductDef;
use fitting_core::{Gender, Product};

const PRODUCT_COLUMNS: &str =
    "id, name, category, fit_type, gender, price_cents, description, created_at, updated_at";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let (product, created) = repo.get_or_create(&def).await?;
/// let men = repo.list_by_gender(Gender::Men).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its unique name.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product from its definition.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted row with its assigned id
    /// * `Err(DbError::UniqueViolation)` - Name already exists
    pub async fn insert(&self, def: &ProductDef) -> DbResult<Product> {
        debug!(name = %def.name, "Inserting product");

        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, category, fit_type, gender, price_cents, \
                                   description, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(def.name)
        .bind(def.category)
        .bind(def.fit_type)
        .bind(def.gender)
        .bind(def.price_cents)
        .bind(def.description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Looks up a product by name, inserting it if absent.
    ///
    /// Existing rows keep their stored attributes even when the definition
    /// in code has changed. Returns the row plus a created flag.
    pub async fn get_or_create(&self, def: &ProductDef) -> DbResult<(Product, bool)> {
        if let Some(existing) = self.get_by_name(def.name).await? {
            return Ok((existing, false));
        }

        let created = self.insert(def).await?;
        Ok((created, true))
    }

    /// Lists products for one gender in id (creation) order.
    pub async fn list_by_gender(&self, gender: Gender) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE gender = ?1 ORDER BY id"
        ))
        .bind(gender)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts products for one gender.
    pub async fn count_by_gender(&self, gender: Gender) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE gender = ?1")
            .bind(gender)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every product row.
    ///
    /// Reset phase only. Variants cascade via their foreign key, but the
    /// seeder still clears tables child-first so the dependency order is
    /// explicit.
    pub async fn delete_all(&self) -> DbResult<u64> {
        debug!("Deleting all products");

        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};
    use fitting_core::catalog;

    #[tokio::test]
    async fn test_duplicate_name_is_unique_violation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let def = &catalog::PRODUCTS[0];
        repo.insert(def).await.unwrap();

        let err = repo.insert(def).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_get_or_create_keeps_existing_row() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        let def = &catalog::PRODUCTS[0];
        let (original, _) = repo.get_or_create(def).await.unwrap();

        // A differing definition with the same name must not touch the row
        let mut changed = *def;
        changed.price_cents = 1;
        let (existing, created) = repo.get_or_create(&changed).await.unwrap();

        assert!(!created);
        assert_eq!(existing.id, original.id);
        assert_eq!(existing.price_cents, def.price_cents);
    }
}
