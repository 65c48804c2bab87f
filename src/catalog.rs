//! Catalog of safety-equipment items loaded from CSV

use crate::csv_reader::CsvReader;
use crate::csv_writer::CsvWriter;
use crate::error::Result;
use crate::mapper::{Header, RecordMapper};
use crate::selection::SelectionStore;
use crate::types::{CatalogItem, Document, CATALOG_COLUMNS, CODE_COLUMN};
use indexmap::IndexSet;
use std::io::Write;
use std::path::Path;

/// Items of a catalog, in source order
///
/// # Examples
///
/// ```
/// use epicatalog::Catalog;
///
/// let catalog = Catalog::from_csv_str(
///     "Codigo,Descricao,Imagem\nCA-1,Capacete de segurança,img/ca1.png\nCA-2,Luva nitrílica,\n",
/// )
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.search("LUVA")[0].code, "CA-2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    header: Header,
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load a catalog from a CSV file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let catalog = Self::from_document(CsvReader::open(path_ref)?.read_all()?)?;
        log::info!("Loaded {} catalog items from {:?}", catalog.len(), path_ref);
        Ok(catalog)
    }

    /// Load a catalog from CSV text
    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_document(CsvReader::from_text(text).read_all()?)
    }

    /// Build a catalog from a parsed document whose first record is the header
    ///
    /// A header without a `codigo` column is accepted; every item then has
    /// an empty code.
    pub fn from_document(document: Document) -> Result<Self> {
        let (header, records) = RecordMapper::map(document)?;
        if !header.contains(CODE_COLUMN) {
            log::warn!(
                "Catalog header {:?} has no {:?} column, item codes will be empty",
                header.names(),
                CODE_COLUMN
            );
        }

        let items: Vec<CatalogItem> = records.iter().map(CatalogItem::from_mapped).collect();
        log::debug!(
            "Catalog columns {:?}, {} items",
            header.names(),
            items.len()
        );

        Ok(Catalog { header, items })
    }

    /// Normalized header of the source
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// All items in source order
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with exactly this code
    pub fn find(&self, code: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.code == code)
    }

    /// Items whose code or description contains `query`, ignoring case
    ///
    /// The query is trimmed first; a blank query matches every item.
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.matches(&needle)).collect()
    }

    /// Items whose code is in the selection, in catalog order
    ///
    /// Selected codes the catalog does not know are skipped.
    pub fn selected(&self, selection: &dyn SelectionStore) -> Vec<&CatalogItem> {
        let ids = selection.get_all();
        self.items
            .iter()
            .filter(|item| ids.contains(&item.code))
            .collect()
    }

    /// Write items as CSV, one row each
    ///
    /// The header is `codigo,descricao,imagem` followed by every `extra`
    /// column found on the items, in first-seen order. Items lacking one of
    /// those columns get an empty value.
    pub fn export_csv<'a, I, W>(items: I, writer: &mut CsvWriter<W>) -> Result<()>
    where
        I: IntoIterator<Item = &'a CatalogItem>,
        W: Write,
    {
        let items: Vec<&CatalogItem> = items.into_iter().collect();
        let extra_columns: IndexSet<&str> = items
            .iter()
            .flat_map(|item| item.extra.keys().map(String::as_str))
            .collect();

        let mut header: Vec<&str> = CATALOG_COLUMNS.to_vec();
        header.extend(extra_columns.iter().copied());
        writer.write_row(header)?;
        for item in items {
            let mut record = item.to_record();
            record.extend(
                extra_columns
                    .iter()
                    .map(|column| item.extra.get(*column).cloned().unwrap_or_default()),
            );
            writer.write_row(record)?;
        }
        Ok(())
    }
}
