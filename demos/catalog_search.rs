//! Catalog search example
//!
//! Loads the bundled catalog, prints it, then runs a few searches.
//! Pass a CSV path and a query to search your own catalog:
//!
//! ```text
//! cargo run --example catalog_search -- path/to/epis.csv luva
//! ```

use epicatalog::Catalog;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "demos/epis.csv".to_string());
    let queries: Vec<String> = match args.next() {
        Some(query) => vec![query],
        None => vec!["luva".into(), "CA-1".into(), "".into(), "botina".into()],
    };

    println!("=== Catalog Search ===\n");

    let catalog = Catalog::open(&path)?;
    println!("Loaded {} items from {}", catalog.len(), path);
    println!("Columns: {:?}\n", catalog.header().names());

    for item in catalog.items() {
        println!("  {}", item);
    }

    for query in &queries {
        let found = catalog.search(query);
        println!("\nSearch {:?}: {} item(s)", query, found.len());
        if found.is_empty() {
            println!("  Nenhum item encontrado.");
        }
        for item in found {
            println!("  {:<10} {}", item.code, item.display_name());
        }
    }

    Ok(())
}
