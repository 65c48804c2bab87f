//! CSV file reading

use crate::csv::CsvParser;
use crate::error::{CatalogError, Result};
use crate::types::Record;
use std::fs;
use std::path::Path;

/// CSV file reader
///
/// Loads the whole file and parses it on first access, so quoted fields may
/// contain line breaks. Invalid UTF-8 is replaced rather than rejected and a
/// leading byte order mark is dropped.
///
/// # Examples
///
/// ```no_run
/// use epicatalog::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("epis.csv").unwrap();
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row);
/// }
/// ```
///
/// # With Headers
///
/// ```no_run
/// use epicatalog::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("epis.csv")
///     .unwrap()
///     .has_header(true);
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     // Header already consumed
/// }
///
/// if let Some(headers) = reader.headers() {
///     println!("Headers: {:?}", headers);
/// }
/// ```
pub struct CsvReader {
    // Source text, taken on first read
    text: Option<String>,
    records: std::vec::IntoIter<Record>,
    row_count: u64,

    // Configuration
    delimiter: u8,
    quote_char: u8,
    has_header: bool,
    headers: Vec<String>,
}

impl CsvReader {
    /// Open a CSV file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let bytes = fs::read(path_ref).map_err(|e| {
            CatalogError::ReadError(format!("Failed to open CSV file {:?}: {}", path_ref, e))
        })?;
        log::debug!("Read {} bytes from {:?}", bytes.len(), path_ref);

        Ok(Self::from_text(String::from_utf8_lossy(&bytes).into_owned()))
    }

    /// Read CSV from text already in memory
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.starts_with('\u{feff}') {
            text.remove(0);
        }

        CsvReader {
            text: Some(text),
            records: Vec::new().into_iter(),
            row_count: 0,
            delimiter: b',',
            quote_char: b'"',
            has_header: false,
            headers: Vec::new(),
        }
    }

    /// Set custom delimiter (builder pattern)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use epicatalog::csv_reader::CsvReader;
    ///
    /// let reader = CsvReader::open("epis.csv")
    ///     .unwrap()
    ///     .delimiter(b';');
    /// ```
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: u8) -> Self {
        self.quote_char = quote;
        self
    }

    /// Treat the first record as a header row (builder pattern)
    ///
    /// The header is kept aside, available through `headers()`, and never
    /// returned by `read_row()`.
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Header row, once the source has been parsed
    pub fn headers(&self) -> Option<&[String]> {
        if self.headers.is_empty() {
            None
        } else {
            Some(&self.headers)
        }
    }

    /// Read a single record
    ///
    /// Returns `Ok(None)` when there are no more records.
    pub fn read_row(&mut self) -> Result<Option<Record>> {
        self.ensure_parsed();

        let row = self.records.next();
        if row.is_some() {
            self.row_count += 1;
        }
        Ok(row)
    }

    /// Get iterator over data records
    pub fn rows(&mut self) -> CsvRowIterator<'_> {
        CsvRowIterator { reader: self }
    }

    /// Read every remaining record
    pub fn read_all(&mut self) -> Result<Vec<Record>> {
        self.rows().collect()
    }

    /// Number of data records read so far (header excluded)
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    fn ensure_parsed(&mut self) {
        let Some(text) = self.text.take() else {
            return;
        };

        let parser = CsvParser::new(self.delimiter, self.quote_char);
        let mut records = parser.parse(&text).into_iter();
        if self.has_header {
            self.headers = records.next().unwrap_or_default();
        }
        log::debug!("Parsed {} CSV records", records.len());
        self.records = records;
    }
}

/// Iterator over CSV records
pub struct CsvRowIterator<'a> {
    reader: &'a mut CsvReader,
}

impl<'a> Iterator for CsvRowIterator<'a> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_row().transpose()
    }
}
