//! Header-driven mapping of parsed records

use crate::error::{CatalogError, Result};
use crate::types::{Document, Record};
use indexmap::IndexMap;

/// Normalized header row: names trimmed and lower-cased, in column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Normalize a raw header record
    ///
    /// A byte order mark left on a name by the source encoding is dropped.
    pub fn from_record(record: &[String]) -> Self {
        Header {
            names: record
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
                .collect(),
        }
    }

    /// Header names in column order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of header columns
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the header has no columns
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if a column is present
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Fail with [`CatalogError::MissingColumn`] on the first absent column
    pub fn require(&self, columns: &[&str]) -> Result<()> {
        match columns.iter().find(|column| !self.contains(column)) {
            Some(missing) => Err(CatalogError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }
}

/// One data record keyed by header name
///
/// Holds exactly one entry per distinct header name. Values are trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecord {
    values: IndexMap<String, String>,
}

impl MappedRecord {
    /// Value of a column, or `""` when the column does not exist
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Iterate over `(column, value)` pairs in header order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record has no columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the record, returning the underlying map
    pub fn into_inner(self) -> IndexMap<String, String> {
        self.values
    }
}

/// Maps a parsed document onto its header row
pub struct RecordMapper;

impl RecordMapper {
    /// Split off the header row and key every remaining record by it
    ///
    /// Records shorter than the header get empty strings for the missing
    /// positions; fields past the header width are dropped. When a header
    /// name repeats, the rightmost column wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use epicatalog::csv::parse_csv;
    /// use epicatalog::mapper::RecordMapper;
    ///
    /// let (header, records) = RecordMapper::map(parse_csv(" Code ,DESC\nX1")).unwrap();
    /// assert_eq!(header.names(), ["code", "desc"]);
    /// assert_eq!(records[0].get("code"), "X1");
    /// assert_eq!(records[0].get("desc"), "");
    /// ```
    pub fn map(document: Document) -> Result<(Header, Vec<MappedRecord>)> {
        let mut rows = document.into_iter();
        let header = rows
            .next()
            .map(|record| Header::from_record(&record))
            .ok_or(CatalogError::MissingHeader)?;

        let mut wide_rows = 0usize;
        let records: Vec<MappedRecord> = rows
            .map(|record| {
                if record.len() > header.len() {
                    wide_rows += 1;
                }
                Self::map_record(&header, &record)
            })
            .collect();

        if wide_rows > 0 {
            log::debug!(
                "{} of {} records have more fields than the {} header columns",
                wide_rows,
                records.len(),
                header.len()
            );
        }

        Ok((header, records))
    }

    /// Key a single record by an already normalized header
    pub fn map_record(header: &Header, record: &Record) -> MappedRecord {
        let mut values = IndexMap::with_capacity(header.len());
        for (i, name) in header.names().iter().enumerate() {
            let value = record.get(i).map(|v| v.trim()).unwrap_or("");
            values.insert(name.clone(), value.to_string());
        }
        MappedRecord { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_csv;

    #[test]
    fn test_header_normalized() {
        let header = Header::from_record(&["  Codigo ".to_string(), "DESCRICAO".to_string()]);
        assert_eq!(header.names(), ["codigo", "descricao"]);
        assert!(header.contains("codigo"));
        assert!(!header.contains("Codigo"));
    }

    #[test]
    fn test_header_byte_order_mark_dropped() {
        let (header, records) = RecordMapper::map(parse_csv("\u{feff} Codigo,desc\nX1,Luva")).unwrap();
        assert_eq!(header.names(), ["codigo", "desc"]);
        assert!(header.contains("codigo"));
        assert_eq!(records[0].get("codigo"), "X1");
    }

    #[test]
    fn test_short_record_gets_empty_values() {
        let document = vec![
            vec!["code".to_string(), "desc".to_string()],
            vec!["X1".to_string()],
        ];
        let (_, records) = RecordMapper::map(document).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("code"), "X1");
        assert_eq!(records[0].get("desc"), "");
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn test_values_trimmed() {
        let (_, records) = RecordMapper::map(parse_csv("a,b\n  x  ,\" y \"")).unwrap();
        assert_eq!(records[0].get("a"), "x");
        assert_eq!(records[0].get("b"), "y");
    }

    #[test]
    fn test_wide_record_truncated() {
        let (_, records) = RecordMapper::map(parse_csv("a\n1,2,3")).unwrap();
        assert_eq!(records[0].iter().collect::<Vec<_>>(), vec![("a", "1")]);
    }

    #[test]
    fn test_duplicate_header_last_wins() {
        let (header, records) = RecordMapper::map(parse_csv("a,A,b\n1,2,3")).unwrap();
        assert_eq!(header.len(), 3);
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].get("a"), "2");
    }

    #[test]
    fn test_header_only() {
        let (header, records) = RecordMapper::map(parse_csv("codigo,descricao\n")).unwrap();
        assert_eq!(header.len(), 2);
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(matches!(
            RecordMapper::map(Vec::new()),
            Err(CatalogError::MissingHeader)
        ));
    }

    #[test]
    fn test_unknown_column_is_empty() {
        let (_, records) = RecordMapper::map(parse_csv("a\n1")).unwrap();
        assert_eq!(records[0].get("missing"), "");
    }

    #[test]
    fn test_require() {
        let header = Header::from_record(&["codigo".to_string()]);
        assert!(header.require(&["codigo"]).is_ok());
        match header.require(&["codigo", "imagem"]) {
            Err(CatalogError::MissingColumn(name)) => assert_eq!(name, "imagem"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
