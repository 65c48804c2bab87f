//! Type definitions for catalog data

use crate::mapper::MappedRecord;
use indexmap::IndexMap;
use std::fmt;

/// One column value within a record
pub type Field = String;

/// One row: an ordered sequence of fields, of any length
pub type Record = Vec<Field>;

/// Every record produced by one parse, in input order
pub type Document = Vec<Record>;

/// Header name of the item code column
pub const CODE_COLUMN: &str = "codigo";
/// Header name of the item description column
pub const DESCRIPTION_COLUMN: &str = "descricao";
/// Header name of the item image column
pub const IMAGE_COLUMN: &str = "imagem";

/// Columns written by [`CatalogItem::to_record`], in order
pub const CATALOG_COLUMNS: [&str; 3] = [CODE_COLUMN, DESCRIPTION_COLUMN, IMAGE_COLUMN];

fn is_known_column(name: &str) -> bool {
    CATALOG_COLUMNS.iter().any(|known| *known == name)
}

/// A single safety-equipment item of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogItem {
    /// Item code (`codigo`), used as the selection identifier
    pub code: String,
    /// Human readable description (`descricao`)
    pub description: String,
    /// Image URL or path (`imagem`)
    pub image: String,
    /// Columns outside the known set, keyed by normalized header name
    pub extra: IndexMap<String, String>,
}

impl CatalogItem {
    /// Create an item from its known columns
    pub fn new(code: &str, description: &str, image: &str) -> Self {
        CatalogItem {
            code: code.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            extra: IndexMap::new(),
        }
    }

    /// Build an item from a mapped record
    ///
    /// Known columns missing from the record become empty strings; any other
    /// column lands in `extra`.
    pub fn from_mapped(record: &MappedRecord) -> Self {
        let extra = record
            .iter()
            .filter(|(name, _)| !is_known_column(name))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        CatalogItem {
            code: record.get(CODE_COLUMN).to_string(),
            description: record.get(DESCRIPTION_COLUMN).to_string(),
            image: record.get(IMAGE_COLUMN).to_string(),
            extra,
        }
    }

    /// Label for the item: description, else code, else `"EPI"`
    pub fn display_name(&self) -> &str {
        if !self.description.is_empty() {
            &self.description
        } else if !self.code.is_empty() {
            &self.code
        } else {
            "EPI"
        }
    }

    /// Check whether code or description contains an already lower-cased needle
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.code.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Known columns as a record, in [`CATALOG_COLUMNS`] order
    pub fn to_record(&self) -> Record {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.image.clone(),
        ]
    }
}

impl fmt::Display for CatalogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.display_name())
        } else {
            write!(f, "{} - {}", self.code, self.display_name())
        }
    }
}
