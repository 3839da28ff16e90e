//! # Domain Types
//!
//! Core domain types for the fitting system catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────┐      ┌───────────────────┐      ┌───────────────┐   │
//! │  │    Product    │ 1..n │  ProductVariant   │ 1..1 │   Inventory   │   │
//! │  │  ───────────  │─────►│  ───────────────  │─────►│  ───────────  │   │
//! │  │  id           │      │  product_id (FK)  │      │  variant (FK) │   │
//! │  │  name (uniq)  │      │  size_id   (FK)   │      │  quantity     │   │
//! │  │  gender       │      │  color_id  (FK)   │      │  threshold    │   │
//! │  │  price_cents  │      │  sku              │      └───────────────┘   │
//! │  └───────────────┘      └───────────────────┘                          │
//! │                                                                         │
//! │  ┌───────────────┐      ┌───────────────┐                              │
//! │  │     Size      │      │     Color     │   Reference data: keyed by   │
//! │  │  S / M / L /  │      │  name + hex + │   unique name, persists      │
//! │  │  XL + ranges  │      │  category     │   across seed runs           │
//! │  └───────────────┘      └───────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Rows are keyed by SQLite autoincrement ids. Ids are never reused after
//! deletion, so anything derived from them (variant SKUs) changes across
//! reset/recreate cycles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Gender
// =============================================================================

/// Target gender for a product line.
///
/// Stored as lowercase text (`men` / `women`) in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    /// Human-readable label for summaries ("Men's" / "Women's").
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Men => "Men's",
            Gender::Women => "Women's",
        }
    }
}

// =============================================================================
// Color Category
// =============================================================================

/// Broad tone grouping for the color palette.
///
/// Stored as lowercase text (`neutral` / `medium` / `light`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Neutral,
    Medium,
    Light,
}

// =============================================================================
// Size
// =============================================================================

/// A garment size with its body-measurement ranges (centimeters).
///
/// Reference data: rarely mutated, never deleted by the seeder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Size {
    /// Unique identifier (autoincrement).
    pub id: i64,

    /// Size label - business identifier (S, M, L, XL).
    pub name: String,

    pub chest_min: i64,
    pub chest_max: i64,
    pub waist_min: i64,
    pub waist_max: i64,
    pub shoulder_min: i64,
    pub shoulder_max: i64,
    pub height_min: i64,
    pub height_max: i64,
}

impl Size {
    /// Checks whether a chest measurement falls inside this size's range.
    pub fn fits_chest(&self, chest_cm: i64) -> bool {
        (self.chest_min..=self.chest_max).contains(&chest_cm)
    }
}

// =============================================================================
// Color
// =============================================================================

/// A palette color.
///
/// Reference data: keyed by unique name, persists across seed runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Color {
    pub id: i64,
    pub name: String,

    /// CSS-style hex code (e.g. `#000080`).
    pub hex_code: String,

    pub category: ColorCategory,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (autoincrement).
    pub id: i64,

    /// Display name - business identifier, unique in the catalog.
    pub name: String,

    /// Garment category (shirt, pants, jacket, dress).
    pub category: String,

    /// Cut of the garment (regular, slim, ...).
    pub fit_type: String,

    pub gender: Gender,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    pub description: String,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Product Variant
// =============================================================================

/// A specific (size, color) combination of a product.
///
/// Owned by its product: deleting the product deletes its variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ProductVariant {
    pub id: i64,
    pub product_id: i64,
    pub size_id: i64,
    pub color_id: i64,

    /// Synthetic SKU: `{product_id}-{size_name}-{color_id}-{counter}`.
    /// Set on creation only, never rewritten for an existing variant.
    pub sku: String,

    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Inventory
// =============================================================================

/// Stock record for a variant. One-to-one with [`ProductVariant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Inventory {
    pub id: i64,
    pub product_variant_id: i64,

    /// Units on hand, never negative.
    pub quantity: i64,

    /// Quantity at or below which the variant counts as low stock.
    pub low_stock_threshold: i64,

    pub created_at: DateTime<Utc>,
}

impl Inventory {
    /// Variant has no units on hand.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// Variant has stock, but at or below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity <= self.low_stock_threshold
    }

    /// Variant has stock above the low-stock threshold.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > self.low_stock_threshold
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory(quantity: i64) -> Inventory {
        Inventory {
            id: 1,
            product_variant_id: 1,
            quantity,
            low_stock_threshold: 5,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_out_of_stock() {
        let inv = inventory(0);
        assert!(inv.is_out_of_stock());
        assert!(!inv.is_low_stock());
        assert!(!inv.is_in_stock());
    }

    #[test]
    fn test_low_stock_at_threshold() {
        // Quantity equal to the threshold still counts as low
        let inv = inventory(5);
        assert!(inv.is_low_stock());
        assert!(!inv.is_in_stock());
    }

    #[test]
    fn test_in_stock_above_threshold() {
        let inv = inventory(6);
        assert!(inv.is_in_stock());
        assert!(!inv.is_low_stock());
    }

    #[test]
    fn test_size_fits_chest() {
        let size = Size {
            id: 1,
            name: "M".to_string(),
            chest_min: 93,
            chest_max: 100,
            waist_min: 78,
            waist_max: 85,
            shoulder_min: 44,
            shoulder_max: 47,
            height_min: 168,
            height_max: 178,
        };

        assert!(size.fits_chest(93));
        assert!(size.fits_chest(100));
        assert!(!size.fits_chest(101));
    }

    #[test]
    fn test_gender_label() {
        assert_eq!(Gender::Men.label(), "Men's");
        assert_eq!(Gender::Women.label(), "Women's");
    }
}
