//! # Size Repository
//!
//! Database operations for garment size reference data.
//!
//! Sizes are upserted by unique name: a row that already exists is left
//! unchanged even if its measurement ranges differ from the definition.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use fitting_core::catalog::SizeDef;
use fitting_core::Size;

/// All columns of the `sizes` table, shared by every SELECT / RETURNING list.
const SIZE_COLUMNS: &str = "id, name, chest_min, chest_max, waist_min, waist_max, \
                            shoulder_min, shoulder_max, height_min, height_max";

/// Repository for size database operations.
#[derive(Debug, Clone)]
pub struct SizeRepository {
    pool: SqlitePool,
}

impl SizeRepository {
    /// Creates a new SizeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SizeRepository { pool }
    }

    /// Gets a size by its unique name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Size>> {
        let size = sqlx::query_as::<_, Size>(&format!(
            "SELECT {SIZE_COLUMNS} FROM sizes WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(size)
    }

    /// Inserts a new size from its definition.
    pub async fn insert(&self, def: &SizeDef) -> DbResult<Size> {
        debug!(name = %def.name, "Inserting size");

        let size = sqlx::query_as::<_, Size>(&format!(
            "INSERT INTO sizes (name, chest_min, chest_max, waist_min, waist_max, \
                                shoulder_min, shoulder_max, height_min, height_max) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) \
             RETURNING {SIZE_COLUMNS}"
        ))
        .bind(def.name)
        .bind(def.chest_min)
        .bind(def.chest_max)
        .bind(def.waist_min)
        .bind(def.waist_max)
        .bind(def.shoulder_min)
        .bind(def.shoulder_max)
        .bind(def.height_min)
        .bind(def.height_max)
        .fetch_one(&self.pool)
        .await?;

        Ok(size)
    }

    /// Looks up a size by name, inserting it if absent.
    ///
    /// ## Returns
    /// The row plus a flag indicating whether it was created by this call.
    /// Existing rows are never updated.
    pub async fn get_or_create(&self, def: &SizeDef) -> DbResult<(Size, bool)> {
        if let Some(existing) = self.get_by_name(def.name).await? {
            return Ok((existing, false));
        }

        let created = self.insert(def).await?;
        Ok((created, true))
    }

    /// Lists all sizes in id (creation) order.
    ///
    /// Creation order matters: variant generation takes the *first* sizes,
    /// which for a seeded database means S, M, L.
    pub async fn list(&self) -> DbResult<Vec<Size>> {
        let sizes =
            sqlx::query_as::<_, Size>(&format!("SELECT {SIZE_COLUMNS} FROM sizes ORDER BY id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(sizes)
    }

    /// Counts all sizes.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sizes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use fitting_core::catalog;

    #[tokio::test]
    async fn test_get_or_create_is_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sizes();

        let def = &catalog::SIZES[0];

        let (first, created) = repo.get_or_create(def).await.unwrap();
        assert!(created);

        let (second, created) = repo.get_or_create(def).await.unwrap();
        assert!(!created);
        assert_eq!(first.id, second.id);

        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_preserves_creation_order() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sizes();

        for def in catalog::SIZES {
            repo.get_or_create(def).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["S", "M", "L", "XL"]);
    }
}
