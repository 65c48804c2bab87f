//! # epicatalog
//!
//! Loads a safety-equipment (EPI) catalog from CSV and exposes it to front
//! ends: search, lookup and a persistent selection of item codes.
//!
//! The CSV parser is deliberately permissive. It accepts `\n`, `\r` and
//! `\r\n` line endings, quoted fields with `""` escapes, rows of any length,
//! and never fails on malformed quoting.
//!
//! ## Parsing
//!
//! ```
//! use epicatalog::csv::parse_csv;
//!
//! let rows = parse_csv("\"a\"\"b\",c\r\nd,e");
//! assert_eq!(rows, vec![vec!["a\"b", "c"], vec!["d", "e"]]);
//! ```
//!
//! ## Catalog and selection
//!
//! ```
//! use epicatalog::{Catalog, MemorySelection, SelectionStore};
//!
//! let catalog = Catalog::from_csv_str("codigo,descricao\nX1,Capacete\nX2,Luva\n").unwrap();
//!
//! let mut selection = MemorySelection::new();
//! selection.add("X2").unwrap();
//!
//! let picked = catalog.selected(&selection);
//! assert_eq!(picked[0].description, "Luva");
//! ```

pub mod catalog;
pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;
pub mod mapper;
pub mod selection;
pub mod types;

pub use catalog::Catalog;
pub use csv::{parse_csv, CsvParser};
pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use error::{CatalogError, Result};
pub use mapper::{Header, MappedRecord, RecordMapper};
pub use selection::{JsonFileSelection, MemorySelection, SelectionStore};
pub use types::{CatalogItem, Document, Field, Record};
