//! CSV writing

use crate::csv::CsvEncoder;
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// CSV writer producing text the parser reads back unchanged
///
/// Writes to a file by default, or to any `Write` sink via `from_writer`.
///
/// # Examples
///
/// ```no_run
/// use epicatalog::csv_writer::CsvWriter;
///
/// let mut writer = CsvWriter::new("selected.csv").unwrap();
/// writer.write_row(["codigo", "descricao"]).unwrap();
/// writer.write_row(["X1", "Luva, nitrílica"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter<W: Write = BufWriter<File>> {
    output: W,

    // State
    row_count: u64,
    buffer: Vec<u8>,

    // Configuration
    delimiter: u8,
    quote_char: u8,
    line_ending: &'static [u8],
}

impl CsvWriter<BufWriter<File>> {
    /// Create (or truncate) a CSV file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref).map_err(|e| {
            CatalogError::WriteError(format!("Failed to create CSV file {:?}: {}", path_ref, e))
        })?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write CSV into an arbitrary sink
    pub fn from_writer(output: W) -> Self {
        CsvWriter {
            output,
            row_count: 0,
            buffer: Vec::with_capacity(4096),
            delimiter: b',',
            quote_char: b'"',
            line_ending: b"\n",
        }
    }

    /// Set custom delimiter (builder pattern)
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Set custom quote character (builder pattern)
    pub fn quote_char(mut self, quote: u8) -> Self {
        self.quote_char = quote;
        self
    }

    /// Terminate rows with `\r\n` instead of `\n` (builder pattern)
    pub fn crlf(mut self, crlf: bool) -> Self {
        self.line_ending = if crlf { b"\r\n" } else { b"\n" };
        self
    }

    /// Write one row
    pub fn write_row<I, S>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.buffer.clear();

        let encoder = CsvEncoder::new(self.delimiter, self.quote_char);
        let fields: Vec<S> = data.into_iter().collect();
        encoder.encode_record(&fields, &mut self.buffer);
        self.buffer.extend_from_slice(self.line_ending);

        self.output
            .write_all(&self.buffer)
            .map_err(|e| CatalogError::WriteError(format!("Failed to write row: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write multiple rows at once
    pub fn write_rows_batch<I, R, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row_data in rows {
            self.write_row(row_data)?;
        }
        Ok(())
    }

    /// Get the number of rows written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and hand back the underlying sink
    pub fn into_inner(mut self) -> Result<W> {
        self.output
            .flush()
            .map_err(|e| CatalogError::WriteError(format!("Failed to flush output: {}", e)))?;
        Ok(self.output)
    }

    /// Flush and close the output
    ///
    /// Must be called to be sure every row reached the file.
    pub fn save(self) -> Result<()> {
        self.into_inner().map(|_| ())
    }
}
