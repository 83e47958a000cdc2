//! # Seed Data Generator
//!
//! Populates the database with demo data for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p shop-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p shop-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p shop-db --bin seed -- --db ./data/shopfront.db
//! ```
//!
//! ## Generated Data
//! - Products named `{name} {size}` with prices between $1.99 and $13.48
//! - One order for user `demo` with an item for each of the first three products

use shop_core::Money;
use shop_db::{Database, DbConfig};
use std::env;

/// Base product names
const NAMES: &[&str] = &[
    "Widget", "Gadget", "Sprocket", "Gizmo", "Doohickey", "Flange", "Bracket", "Lever",
    "Spindle", "Coupling",
];

/// Size variants with their price addon in cents
const SIZES: &[(&str, i64)] = &[("Small", 0), ("Medium", 150), ("Large", 350), ("XL", 550)];

/// Username the demo order is created for
const DEMO_USER: &str = "demo";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./shopfront_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shopfront Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./shopfront_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Shopfront Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut product_ids = Vec::with_capacity(count);

    for seed in 0..count {
        let (name, price) = generate_product(seed);

        match db.products().create(&name, price).await {
            Ok(product) => product_ids.push(product.id),
            Err(e) => eprintln!("Failed to insert {}: {}", name, e),
        }
    }

    println!(
        "✓ Generated {} products in {:?}",
        product_ids.len(),
        start.elapsed()
    );

    let order = db.orders().create(DEMO_USER).await?;
    for (quantity, product_id) in product_ids.iter().take(3).enumerate() {
        db.order_items()
            .create(order.id, *product_id, quantity as i32 + 1)
            .await?;
    }

    let items = db.order_items().list_by_order_id(order.id).await?;
    println!(
        "✓ Created order {} for '{}' with {} items",
        order.id,
        order.username,
        items.len()
    );

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Generates a product name and price from a running index.
fn generate_product(seed: usize) -> (String, Money) {
    let name = NAMES[seed % NAMES.len()];
    let (size, price_addon) = SIZES[(seed / NAMES.len()) % SIZES.len()];

    // Base $1.99 - $7.98 plus the size addon
    let base_price = 199 + ((seed * 17) % 600) as i64;

    (
        format!("{} {}", name, size),
        Money::from_cents(base_price + price_addon),
    )
}
