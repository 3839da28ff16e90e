//! # fitting-core: Pure Domain Model for the Fitting System
//!
//! This crate holds the domain types and the fixed catalog definitions the
//! seeder writes to the database. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Fitting System Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ fitting-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐        ┌────────────────┐                 │   │
//! │  │   │     types      │        │    catalog     │                 │   │
//! │  │   │  Size, Color   │        │  4 sizes       │                 │   │
//! │  │   │  Product       │        │  8 colors      │                 │   │
//! │  │   │  Variant       │        │  6 products    │                 │   │
//! │  │   │  Inventory     │        │  (fixed data)  │                 │   │
//! │  │   └────────────────┘        └────────────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE DATA                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  fitting-db (Database Layer)                    │   │
//! │  │          SQLite queries, migrations, repositories, seed         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Size, Color, Product, ProductVariant, Inventory)
//! - [`catalog`] - The fixed MVP catalog definitions used for seeding

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fitting_core::Product` instead of
// `use fitting_core::types::Product`

pub use types::*;
