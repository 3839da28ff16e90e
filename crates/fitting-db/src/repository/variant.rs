//! # Product Variant Repository
//!
//! Database operations for (product, size, color) variants.
//!
//! A variant is keyed by its combination, not by SKU: the SKU is attached
//! when the combination is first created and never rewritten afterwards.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use fitting_core::ProductVariant;

const VARIANT_COLUMNS: &str = "id, product_id, size_id, color_id, sku, created_at";

/// Repository for product variant database operations.
#[derive(Debug, Clone)]
pub struct VariantRepository {
    pool: SqlitePool,
}

impl VariantRepository {
    /// Creates a new VariantRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VariantRepository { pool }
    }

    /// Gets a variant by its (product, size, color) combination.
    pub async fn get_by_combination(
        &self,
        product_id: i64,
        size_id: i64,
        color_id: i64,
    ) -> DbResult<Option<ProductVariant>> {
        let variant = sqlx::query_as::<_, ProductVariant>(&format!(
            "SELECT {VARIANT_COLUMNS} FROM product_variants \
             WHERE product_id = ?1 AND size_id = ?2 AND color_id = ?3"
        ))
        .bind(product_id)
        .bind(size_id)
        .bind(color_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(variant)
    }

    /// Inserts a new variant with its SKU.
    pub async fn insert(
        &self,
        product_id: i64,
        size_id: i64,
        color_id: i64,
        sku: &str,
    ) -> DbResult<ProductVariant> {
        debug!(product_id, size_id, color_id, sku, "Inserting variant");

        let now = Utc::now();

        let variant = sqlx::query_as::<_, ProductVariant>(&format!(
            "INSERT INTO product_variants (product_id, size_id, color_id, sku, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING {VARIANT_COLUMNS}"
        ))
        .bind(product_id)
        .bind(size_id)
        .bind(color_id)
        .bind(sku)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(variant)
    }

    /// Looks up a variant by combination, inserting it with `sku` if absent.
    ///
    /// The SKU is only written on creation: an existing variant keeps the
    /// SKU it was created with. Returns the row plus a created flag.
    pub async fn get_or_create(
        &self,
        product_id: i64,
        size_id: i64,
        color_id: i64,
        sku: &str,
    ) -> DbResult<(ProductVariant, bool)> {
        if let Some(existing) = self
            .get_by_combination(product_id, size_id, color_id)
            .await?
        {
            return Ok((existing, false));
        }

        let created = self.insert(product_id, size_id, color_id, sku).await?;
        Ok((created, true))
    }

    /// Counts all variants.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_variants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Counts the variants of one product.
    pub async fn count_for_product(&self, product_id: i64) -> DbResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM product_variants WHERE product_id = ?1")
                .bind(product_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    /// Deletes every variant row. Reset phase only.
    pub async fn delete_all(&self) -> DbResult<u64> {
        debug!("Deleting all product variants");

        let result = sqlx::query("DELETE FROM product_variants")
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
    use crate::pool::{Database, DbConfig};
    use fitting_core::catalog;

    #[tokio::test]
    async fn test_sku_only_set_on_creation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let (product, _) = db
            .products()
            .get_or_create(&catalog::PRODUCTS[0])
            .await
            .unwrap();
        let (size, _) = db.sizes().get_or_create(&catalog::SIZES[0]).await.unwrap();
        let (color, _) = db
            .colors()
            .get_or_create(&catalog::COLORS[0])
            .await
            .unwrap();

        let repo = db.variants();

        let (variant, created) = repo
            .get_or_create(product.id, size.id, color.id, "first-sku")
            .await
            .unwrap();
        assert!(created);
        assert_eq!(variant.sku, "first-sku");

        // Second call with a different SKU must keep the original
        let (variant, created) = repo
            .get_or_create(product.id, size.id, color.id, "other-sku")
            .await
            .unwrap();
        assert!(!created);
        assert_eq!(variant.sku, "first-sku");

        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
