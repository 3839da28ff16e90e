//! # Repository Module
//!
//! Database repository implementations for the fitting system.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Seeding routine                                                       │
//! │       │                                                                 │
//! │       │  db.products().get_or_create(&def)                             │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── get_by_name(&self, name)                                          │
//! │  ├── get_or_create(&self, def)                                         │
//! │  ├── list_by_gender(&self, gender)                                     │
//! │  └── delete_all(&self)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • get-or-create semantics live next to the queries they wrap          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`size::SizeRepository`] - Garment size reference data
//! - [`color::ColorRepository`] - Color palette reference data
//! - [`product::ProductRepository`] - Catalog products
//! - [`variant::VariantRepository`] - (product, size, color) variants
//! - [`inventory::InventoryRepository`] - Per-variant stock records

pub mod color;
pub mod inventory;
pub mod product;
pub mod size;
pub mod variant;
