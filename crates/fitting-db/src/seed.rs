//! # Catalog Seeding Routine
//!
//! Populates the database with the MVP catalog: minimal clothing sets for
//! men and women.
//!
//! ## Four Phases, In Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Seeding Pipeline                                 │
//! │                                                                         │
//! │  1. Reset              delete inventory → variants → products          │
//! │        │               (child tables first; sizes/colors survive)      │
//! │        ▼                                                                │
//! │  2. Reference upsert   get-or-create 4 sizes, 8 colors by name         │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  3. Product upsert     get-or-create 6 products by name                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  4. Variants + stock   per product: first 3 sizes × first 3 colors     │
//! │                        SKU = {product_id}-{size}-{color_id}-{n}        │
//! │                        inventory bucketed by a GLOBAL creation counter │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Bucketing
//! Quantity depends on how many inventory rows have been created so far in
//! this run, across ALL products (not per product):
//!
//! | rows created so far | quantity       | bucket       |
//! |---------------------|----------------|--------------|
//! | 0–9                 | 0              | out of stock |
//! | 10–19               | random 1–4     | low stock    |
//! | 20+                 | random 10–25   | in stock     |
//!
//! The counter lives in memory for the whole run rather than being re-read
//! from the table per row. Phase 1 empties the inventory table, so the two
//! are equal at every decision point.
//!
//! ## Failure Behavior
//! No transaction wraps the phases. A storage error aborts the run
//! immediately and leaves whatever was already written; the utility is
//! meant to be re-run, and phase 1 clears the mutable tables anyway.

use rand::Rng;
use tracing::{debug, info};

use crate::error::DbResult;
use crate::pool::Database;
use fitting_core::catalog;
use fitting_core::Product;

// =============================================================================
// Summary
// =============================================================================

/// Row counts after a completed seed run, for the binary's report.
#[derive(Debug, Clone, Default)]
pub struct SeedSummary {
    pub products: i64,
    pub sizes: i64,
    pub colors: i64,
    pub variants: i64,
    pub inventory_rows: i64,
}

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the full four-phase seeding routine.
///
/// Safe to run repeatedly: sizes and colors are upserted in place, while
/// products, variants, and inventory are wiped and recreated each run
/// (prior stock quantities are lost, and new ids mean new SKUs).
pub async fn run(db: &Database) -> DbResult<SeedSummary> {
    reset(db).await?;

    ensure_sizes(db).await?;
    ensure_colors(db).await?;

    let products = ensure_products(db).await?;

    generate_variants(db, &products).await?;

    Ok(SeedSummary {
        products: db.products().count().await?,
        sizes: db.sizes().count().await?,
        colors: db.colors().count().await?,
        variants: db.variants().count().await?,
        inventory_rows: db.inventory().count().await?,
    })
}

// =============================================================================
// Phase 1: Reset
// =============================================================================

/// Deletes all inventory, variant, and product rows, child tables first.
///
/// Sizes and colors are reference data and are left alone.
async fn reset(db: &Database) -> DbResult<()> {
    info!("Clearing existing products");

    let inventory = db.inventory().delete_all().await?;
    let variants = db.variants().delete_all().await?;
    let products = db.products().delete_all().await?;

    debug!(inventory, variants, products, "Reset complete");
    Ok(())
}

// =============================================================================
// Phase 2: Reference Data
// =============================================================================

/// Ensures the four standard garment sizes exist.
async fn ensure_sizes(db: &Database) -> DbResult<()> {
    info!("Ensuring sizes exist");

    for def in catalog::SIZES {
        let (size, created) = db.sizes().get_or_create(def).await?;
        if created {
            debug!(name = %size.name, id = size.id, "Created size");
        }
    }

    Ok(())
}

/// Ensures the eight palette colors exist.
async fn ensure_colors(db: &Database) -> DbResult<()> {
    info!("Ensuring colors exist");

    for def in catalog::COLORS {
        let (color, created) = db.colors().get_or_create(def).await?;
        if created {
            debug!(name = %color.name, id = color.id, "Created color");
        }
    }

    Ok(())
}

// =============================================================================
// Phase 3: Products
// =============================================================================

/// Ensures the six MVP products exist.
///
/// Returns the rows in definition order (men's set, then women's set) for
/// variant generation, whether pre-existing or newly created.
async fn ensure_products(db: &Database) -> DbResult<Vec<Product>> {
    info!("Creating MVP products");

    let mut products = Vec::with_capacity(catalog::PRODUCTS.len());

    for def in catalog::PRODUCTS {
        let (product, created) = db.products().get_or_create(def).await?;
        if created {
            info!(name = %product.name, "Created product");
        }
        products.push(product);
    }

    Ok(products)
}

// =============================================================================
// Phase 4: Variants + Inventory
// =============================================================================

/// Creates the size/color variants and their stock records.
///
/// Per product: first 3 sizes (S, M, L) × first 3 colors from a pool of
/// the first 5, sizes outer / colors inner. The per-product pair counter
/// feeds the SKU and increments on every pair whether or not the variant
/// was created. Inventory is only written for newly created variants.
async fn generate_variants(db: &Database, products: &[Product]) -> DbResult<()> {
    info!("Creating product variants and inventory");

    let sizes = db.sizes().list().await?;
    let colors = db.colors().list_first(catalog::COLOR_POOL as i64).await?;

    let product_sizes: Vec<_> = sizes.iter().take(catalog::SIZES_PER_PRODUCT).collect();
    let product_colors: Vec<_> = colors.iter().take(catalog::COLORS_PER_PRODUCT).collect();

    let mut rng = rand::rng();

    // Counts inventory rows created across ALL products this run; drives
    // the out-of-stock / low-stock / in-stock bucketing below.
    let mut inventory_created: i64 = 0;

    for product in products {
        let mut counter = 1;

        for size in &product_sizes {
            for color in &product_colors {
                let sku = format!("{}-{}-{}-{}", product.id, size.name, color.id, counter);

                let (variant, created) = db
                    .variants()
                    .get_or_create(product.id, size.id, color.id, &sku)
                    .await?;
                counter += 1;

                if created {
                    let quantity = stock_quantity(inventory_created, &mut rng);

                    db.inventory()
                        .insert(variant.id, quantity, catalog::LOW_STOCK_THRESHOLD)
                        .await?;
                    inventory_created += 1;
                }
            }
        }
    }

    debug!(inventory_created, "Variant generation complete");
    Ok(())
}

/// Picks a stock quantity for the n-th inventory row created this run.
///
/// First 10 rows are out of stock, the next 10 low stock (below the
/// threshold of 5), everything after that normally stocked.
fn stock_quantity(created_so_far: i64, rng: &mut impl Rng) -> i64 {
    match created_so_far {
        0..=9 => 0,
        10..=19 => rng.random_range(1..=4),
        _ => rng.random_range(10..=25),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use fitting_core::Gender;

    async fn seeded_db() -> (Database, SeedSummary) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let summary = run(&db).await.unwrap();
        (db, summary)
    }

    #[tokio::test]
    async fn test_full_run_counts() {
        let (db, summary) = seeded_db().await;

        assert_eq!(summary.products, 6);
        assert_eq!(summary.sizes, 4);
        assert_eq!(summary.colors, 8);
        assert_eq!(summary.variants, 54); // 6 products × 3 sizes × 3 colors
        assert_eq!(summary.inventory_rows, summary.variants);

        assert_eq!(db.products().count_by_gender(Gender::Men).await.unwrap(), 3);
        assert_eq!(
            db.products().count_by_gender(Gender::Women).await.unwrap(),
            3
        );
    }

    #[tokio::test]
    async fn test_each_product_has_nine_variants() {
        let (db, _) = seeded_db().await;

        for gender in [Gender::Men, Gender::Women] {
            for product in db.products().list_by_gender(gender).await.unwrap() {
                let count = db.variants().count_for_product(product.id).await.unwrap();
                assert_eq!(count, 9, "{}", product.name);
            }
        }
    }

    #[tokio::test]
    async fn test_stock_bucket_distribution() {
        let (db, _) = seeded_db().await;

        let quantities = db.inventory().quantities_in_creation_order().await.unwrap();
        assert_eq!(quantities.len(), 54);

        // First 10 rows: out of stock
        for (i, &qty) in quantities[..10].iter().enumerate() {
            assert_eq!(qty, 0, "row {i}");
        }
        // Rows 11-20: low stock, below the threshold of 5
        for (i, &qty) in quantities[10..20].iter().enumerate() {
            assert!((1..=4).contains(&qty), "row {}: {qty}", i + 10);
        }
        // Rows 21+: normally stocked
        for (i, &qty) in quantities[20..].iter().enumerate() {
            assert!((10..=25).contains(&qty), "row {}: {qty}", i + 20);
        }
    }

    #[tokio::test]
    async fn test_men_product_names() {
        let (db, _) = seeded_db().await;

        let names: Vec<String> = db
            .products()
            .list_by_gender(Gender::Men)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(
            names,
            ["Classic Cotton Shirt", "Casual Denim Jeans", "Leather Jacket"]
        );
    }

    #[tokio::test]
    async fn test_sku_embeds_ids_and_counter() {
        let (db, _) = seeded_db().await;

        let men = db.products().list_by_gender(Gender::Men).await.unwrap();
        let first = &men[0];

        let sizes = db.sizes().list().await.unwrap();
        let colors = db.colors().list_first(5).await.unwrap();

        // First pair of the nested loop: first size, first color, counter 1
        let variant = db
            .variants()
            .get_by_combination(first.id, sizes[0].id, colors[0].id)
            .await
            .unwrap()
            .expect("variant exists");

        let expected = format!("{}-{}-{}-1", first.id, sizes[0].name, colors[0].id);
        assert_eq!(variant.sku, expected);
    }

    #[tokio::test]
    async fn test_rerun_recreates_products_but_not_reference_data() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let first = run(&db).await.unwrap();
        let first_ids: Vec<i64> = db
            .products()
            .list_by_gender(Gender::Men)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        let second = run(&db).await.unwrap();

        // Reference data is upserted, not duplicated
        assert_eq!(second.sizes, first.sizes);
        assert_eq!(second.colors, first.colors);
        assert_eq!(second.products, 6);
        assert_eq!(second.variants, 54);
        assert_eq!(second.inventory_rows, 54);

        // Products were wiped and recreated: autoincrement never reuses ids
        let second_ids: Vec<i64> = db
            .products()
            .list_by_gender(Gender::Men)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        for id in &second_ids {
            assert!(!first_ids.contains(id));
        }

        // The fresh run restarts the global stock counter
        let quantities = db.inventory().quantities_in_creation_order().await.unwrap();
        assert!(quantities[..10].iter().all(|&q| q == 0));
    }

    #[test]
    fn test_stock_quantity_buckets() {
        let mut rng = rand::rng();

        assert_eq!(stock_quantity(0, &mut rng), 0);
        assert_eq!(stock_quantity(9, &mut rng), 0);

        for n in [10, 19] {
            let qty = stock_quantity(n, &mut rng);
            assert!((1..=4).contains(&qty));
        }
        for n in [20, 53, 1000] {
            let qty = stock_quantity(n, &mut rng);
            assert!((10..=25).contains(&qty));
        }
    }
}
