//! # Fixed Catalog Definitions
//!
//! The MVP seed data: 4 garment sizes, 8 palette colors, and 6 products
//! (3 men's, 3 women's). The seeder in `fitting-db` writes these to the
//! database with get-or-create semantics.
//!
//! Definitions are plain `&'static` data so they can be unit-tested and
//! reused without any allocation or I/O.

use crate::types::{ColorCategory, Gender};

// =============================================================================
// Constants
// =============================================================================

/// Low-stock threshold applied to every seeded inventory row.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// How many sizes each product gets variants for (S, M, L).
pub const SIZES_PER_PRODUCT: usize = 3;

/// How many colors each product gets variants for.
pub const COLORS_PER_PRODUCT: usize = 3;

/// How many colors phase 4 draws from before slicing per product.
pub const COLOR_POOL: usize = 5;

// =============================================================================
// Definition Types
// =============================================================================

/// A garment size definition with body-measurement ranges (centimeters).
#[derive(Debug, Clone, Copy)]
pub struct SizeDef {
    pub name: &'static str,
    pub chest_min: i64,
    pub chest_max: i64,
    pub waist_min: i64,
    pub waist_max: i64,
    pub shoulder_min: i64,
    pub shoulder_max: i64,
    pub height_min: i64,
    pub height_max: i64,
}

/// A palette color definition.
#[derive(Debug, Clone, Copy)]
pub struct ColorDef {
    pub name: &'static str,
    pub hex_code: &'static str,
    pub category: ColorCategory,
}

/// A catalog product definition.
#[derive(Debug, Clone, Copy)]
pub struct ProductDef {
    pub name: &'static str,
    pub category: &'static str,
    pub fit_type: &'static str,
    pub gender: Gender,
    /// Price in cents.
    pub price_cents: i64,
    pub description: &'static str,
}

// =============================================================================
// Seed Data
// =============================================================================

/// Standard garment sizes.
pub const SIZES: &[SizeDef] = &[
    SizeDef {
        name: "S",
        chest_min: 85,
        chest_max: 92,
        waist_min: 70,
        waist_max: 77,
        shoulder_min: 40,
        shoulder_max: 43,
        height_min: 160,
        height_max: 170,
    },
    SizeDef {
        name: "M",
        chest_min: 93,
        chest_max: 100,
        waist_min: 78,
        waist_max: 85,
        shoulder_min: 44,
        shoulder_max: 47,
        height_min: 168,
        height_max: 178,
    },
    SizeDef {
        name: "L",
        chest_min: 101,
        chest_max: 108,
        waist_min: 86,
        waist_max: 93,
        shoulder_min: 48,
        shoulder_max: 51,
        height_min: 175,
        height_max: 185,
    },
    SizeDef {
        name: "XL",
        chest_min: 109,
        chest_max: 116,
        waist_min: 94,
        waist_max: 101,
        shoulder_min: 52,
        shoulder_max: 55,
        height_min: 180,
        height_max: 190,
    },
];

/// Color palette. The first five (the neutrals) feed variant generation.
pub const COLORS: &[ColorDef] = &[
    // Neutral colors for MVP
    ColorDef {
        name: "Black",
        hex_code: "#000000",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "White",
        hex_code: "#FFFFFF",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Navy Blue",
        hex_code: "#000080",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Gray",
        hex_code: "#808080",
        category: ColorCategory::Neutral,
    },
    ColorDef {
        name: "Beige",
        hex_code: "#F5F5DC",
        category: ColorCategory::Neutral,
    },
    // Additional colors
    ColorDef {
        name: "Burgundy",
        hex_code: "#800020",
        category: ColorCategory::Medium,
    },
    ColorDef {
        name: "Light Blue",
        hex_code: "#ADD8E6",
        category: ColorCategory::Light,
    },
    ColorDef {
        name: "Pastel Pink",
        hex_code: "#FFD1DC",
        category: ColorCategory::Light,
    },
];

/// MVP products: three men's items, three women's items.
pub const PRODUCTS: &[ProductDef] = &[
    // Men's set
    ProductDef {
        name: "Classic Cotton Shirt",
        category: "shirt",
        fit_type: "regular",
        gender: Gender::Men,
        price_cents: 4999,
        description: "A timeless classic cotton shirt perfect for any occasion. \
                      Made from 100% premium cotton for maximum comfort and breathability.",
    },
    ProductDef {
        name: "Casual Denim Jeans",
        category: "pants",
        fit_type: "regular",
        gender: Gender::Men,
        price_cents: 7999,
        description: "Comfortable denim jeans with a classic fit. Durable and stylish \
                      for everyday wear with premium denim fabric.",
    },
    ProductDef {
        name: "Leather Jacket",
        category: "jacket",
        fit_type: "regular",
        gender: Gender::Men,
        price_cents: 19999,
        description: "Premium leather jacket with a classic design. Timeless piece that \
                      never goes out of style, crafted from genuine leather.",
    },
    // Women's set
    ProductDef {
        name: "Elegant Blouse",
        category: "shirt",
        fit_type: "regular",
        gender: Gender::Women,
        price_cents: 5499,
        description: "Sophisticated blouse with delicate details. Perfect for both office \
                      and evening wear with premium silk-like fabric.",
    },
    ProductDef {
        name: "Summer Dress",
        category: "dress",
        fit_type: "regular",
        gender: Gender::Women,
        price_cents: 8999,
        description: "Light and breezy summer dress perfect for warm weather. Comfortable \
                      and stylish with a flattering silhouette.",
    },
    ProductDef {
        name: "High-Waist Trousers",
        category: "pants",
        fit_type: "regular",
        gender: Gender::Women,
        price_cents: 7499,
        description: "Flattering high-waist trousers with a comfortable fit. Versatile for \
                      any occasion from office to casual outings.",
    },
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(SIZES.len(), 4);
        assert_eq!(COLORS.len(), 8);
        assert_eq!(PRODUCTS.len(), 6);
    }

    #[test]
    fn test_gender_split() {
        let men = PRODUCTS.iter().filter(|p| p.gender == Gender::Men).count();
        let women = PRODUCTS
            .iter()
            .filter(|p| p.gender == Gender::Women)
            .count();

        assert_eq!(men, 3);
        assert_eq!(women, 3);
    }

    #[test]
    fn test_size_ranges_are_ordered() {
        for size in SIZES {
            assert!(size.chest_min < size.chest_max, "{}", size.name);
            assert!(size.waist_min < size.waist_max, "{}", size.name);
            assert!(size.shoulder_min < size.shoulder_max, "{}", size.name);
            assert!(size.height_min < size.height_max, "{}", size.name);
        }
    }

    #[test]
    fn test_hex_codes_well_formed() {
        for color in COLORS {
            assert!(color.hex_code.starts_with('#'), "{}", color.name);
            assert_eq!(color.hex_code.len(), 7, "{}", color.name);
            assert!(
                color.hex_code[1..].chars().all(|c| c.is_ascii_hexdigit()),
                "{}",
                color.name
            );
        }
    }

    #[test]
    fn test_prices_positive() {
        for product in PRODUCTS {
            assert!(product.price_cents > 0, "{}", product.name);
        }
    }

    #[test]
    fn test_names_unique() {
        for defs in [
            SIZES.iter().map(|s| s.name).collect::<Vec<_>>(),
            COLORS.iter().map(|c| c.name).collect::<Vec<_>>(),
            PRODUCTS.iter().map(|p| p.name).collect::<Vec<_>>(),
        ] {
            let mut sorted = defs.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), defs.len());
        }
    }

    #[test]
    fn test_variant_slicing_fits_pool() {
        // Phase 4 slices 3 colors out of a pool of the first 5
        assert!(COLORS_PER_PRODUCT <= COLOR_POOL);
        assert!(COLOR_POOL <= COLORS.len());
        assert!(SIZES_PER_PRODUCT <= SIZES.len());
    }
}
