//! # Color Repository
//!
//! Database operations for the color palette reference data.
//!
//! Same upsert discipline as sizes: keyed by unique name, existing rows
//! are never rewritten.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use fitting_core::catalog::ColorDef;
use fitting_core::Color;

const COLOR_COLUMNS: &str = "id, name, hex_code, category";

/// Repository for color database operations.
#[derive(Debug, Clone)]
pub struct ColorRepository {
    pool: SqlitePool,
}

impl ColorRepository {
    /// Creates a new ColorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ColorRepository { pool }
    }

    /// Gets a color by its unique name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Color>> {
        let color = sqlx::query_as::<_, Color>(&format!(
            "SELECT {COLOR_COLUMNS} FROM colors WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(color)
    }

    /// Inserts a new color from its definition.
    pub async fn insert(&self, def: &ColorDef) -> DbResult<Color> {
        debug!(name = %def.name, "Inserting color");

        let color = sqlx::query_as::<_, Color>(&format!(
            "INSERT INTO colors (name, hex_code, category) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLOR_COLUMNS}"
        ))
        .bind(def.name)
        .bind(def.hex_code)
        .bind(def.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(color)
    }

    /// Looks up a color by name, inserting it if absent.
    ///
    /// Existing rows are never updated. Returns the row plus a created flag.
    pub async fn get_or_create(&self, def: &ColorDef) -> DbResult<(Color, bool)> {
        if let Some(existing) = self.get_by_name(def.name).await? {
            return Ok((existing, false));
        }

        let created = self.insert(def).await?;
        Ok((created, true))
    }

    /// Lists the first `limit` colors in id (creation) order.
    ///
    /// The seeded palette puts the five neutrals first, so this is how
    /// variant generation picks its color pool.
    pub async fn list_first(&self, limit: i64) -> DbResult<Vec<Color>> {
        let colors = sqlx::query_as::<_, Color>(&format!(
            "SELECT {COLOR_COLUMNS} FROM colors ORDER BY id LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(colors)
    }

    /// Counts all colors.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM colors")
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
    async fn test_list_first_returns_neutrals() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.colors();

        for def in catalog::COLORS {
            repo.get_or_create(def).await.unwrap();
        }

        let first_five: Vec<String> = repo
            .list_first(5)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            first_five,
            ["Black", "White", "Navy Blue", "Gray", "Beige"]
        );
    }
}
