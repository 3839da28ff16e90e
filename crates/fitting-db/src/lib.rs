//! # fitting-db: Database Layer for the Fitting System
//!
//! This crate provides database access for the fitting system catalog.
//! It uses SQLite for local storage with sqlx for async operations, and
//! ships the `seed` binary that populates the MVP catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fitting System Data Flow                           │
//! │                                                                         │
//! │  seed binary (bin/seed.rs)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    fitting-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │   │  Repositories  │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │◄──│  size, color,  │   │  (embedded)  │   │   │
//! │  │   │               │   │  product,      │   │              │   │   │
//! │  │   │ SqlitePool    │   │  variant,      │   │ 001_init.sql │   │   │
//! │  │   │ Connection    │   │  inventory     │   │              │   │   │
//! │  │   │ Management    │   └────────────────┘   └──────────────┘   │   │
//! │  │   └───────────────┘          ▲                                 │   │
//! │  │                              │                                 │   │
//! │  │                     ┌────────┴───────┐                         │   │
//! │  │                     │  seed routine  │  4 phases: reset,       │   │
//! │  │                     │   (seed.rs)    │  reference, products,   │   │
//! │  │                     └────────────────┘  variants + stock       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     ./fitting_dev.db                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (one per table)
//! - [`seed`] - The four-phase catalog seeding routine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fitting_db::{seed, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/fitting.db")).await?;
//! let summary = seed::run(&db).await?;
//! println!("created {} products", summary.products);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use seed::SeedSummary;

// Repository re-exports for convenience
pub use repository::color::ColorRepository;
pub use repository::inventory::InventoryRepository;
pub use repository::product::ProductRepository;
pub use repository::size::SizeRepository;
pub use repository::variant::VariantRepository;
