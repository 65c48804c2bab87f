//! Selection example
//!
//! Selects items in a file-backed selection, lists them in catalog order,
//! exports them to CSV and clears the selection.

use epicatalog::{Catalog, CsvWriter, JsonFileSelection, SelectionStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Selection Export ===\n");

    let catalog = Catalog::open("demos/epis.csv")?;
    let dir = std::env::temp_dir();
    let selection_path = dir.join("epicatalog-selected.json");
    let export_path = dir.join("epicatalog-selected.csv");

    // 1. Select a few items; the file survives between runs
    let mut selection = JsonFileSelection::open(&selection_path);
    println!("1. Previously selected: {:?}", selection.get_all());
    selection.add("CA-42049")?;
    selection.add("CA-10566")?;
    println!("   Selected now: {} item(s)", selection.len());

    // 2. Show selected items in catalog order
    println!("\n2. Selected items:");
    let selected = catalog.selected(&selection);
    for item in &selected {
        println!("   {}", item);
    }

    // 3. Export and confirm
    let mut writer = CsvWriter::new(&export_path)?.crlf(true);
    Catalog::export_csv(selected, &mut writer)?;
    writer.save()?;
    println!("\n3. Exported to {}", export_path.display());

    selection.clear()?;
    println!("   Selection cleared ({} item(s) left)", selection.len());

    Ok(())
}
