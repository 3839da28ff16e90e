//! # Catalog Seeder
//!
//! Populates the database with the MVP catalog: sizes, colors, six
//! products, their size/color variants, and per-variant stock records.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p fitting-db --bin seed
//!
//! # Specify database path
//! cargo run -p fitting-db --bin seed -- --db ./data/fitting.db
//! ```
//!
//! ## What Gets Created
//! - 4 garment sizes (S, M, L, XL) and 8 colors - upserted, never deleted
//! - 6 products (3 men's, 3 women's) - wiped and recreated each run
//! - 9 variants per product (3 sizes × 3 colors), each with one inventory
//!   row: the first 10 created are out of stock, the next 10 low stock,
//!   the rest stocked at 10-25 units
//!
//! Exit code is 0 on success; any storage error propagates out of main
//! and terminates the run non-zero.

use std::env;

use fitting_core::Gender;
use fitting_db::{seed, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./fitting_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Fitting System Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./fitting_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Progress from the seeding routine is emitted via tracing;
    // RUST_LOG overrides the default info level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("🌱 Fitting System Catalog Seeder");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (applies migrations)
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    let summary = seed::run(&db).await?;

    println!();
    println!("✅ Successfully populated MVP database!");
    println!("📦 Created {} products (3 men's + 3 women's)", summary.products);
    println!("📏 Using {} sizes", summary.sizes);
    println!("🎨 Using {} colors", summary.colors);
    println!("🏷️  Created {} product variants", summary.variants);
    println!("📊 Created {} inventory records", summary.inventory_rows);

    // Display product summary
    println!();
    println!("📋 MVP Product Summary:");
    for gender in [Gender::Men, Gender::Women] {
        println!("  {} Set:", gender.label());
        for product in db.products().list_by_gender(gender).await? {
            println!("    • {} ({})", product.name, product.category);
        }
    }

    db.close().await;

    Ok(())
}
