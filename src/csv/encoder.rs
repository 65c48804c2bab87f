//! CSV encoding that the parser reads back unchanged

/// CSV encoder for writing records the parser can read back
///
/// A field is quoted only when it contains the delimiter, the quote
/// character or a line terminator. Quotes inside a quoted field are doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvEncoder {
    delimiter: u8,
    quote_char: u8,
}

impl Default for CsvEncoder {
    fn default() -> Self {
        Self::new(b',', b'"')
    }
}

impl CsvEncoder {
    /// Create a new CSV encoder with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Encode one record into `buffer`, without a line terminator
    ///
    /// Delimiter and quote bytes are written as the characters the parser
    /// matches them against, so a value above `0x7F` stays valid UTF-8.
    pub fn encode_record<S: AsRef<str>>(&self, fields: &[S], buffer: &mut Vec<u8>) {
        let delimiter = self.delimiter as char;
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                push_char(buffer, delimiter);
            }
            self.encode_field(field.as_ref(), buffer);
        }
    }

    fn encode_field(&self, field: &str, buffer: &mut Vec<u8>) {
        if !self.needs_quoting(field) {
            buffer.extend_from_slice(field.as_bytes());
            return;
        }

        let quote = self.quote_char as char;
        push_char(buffer, quote);
        for ch in field.chars() {
            if ch == quote {
                push_char(buffer, quote);
            }
            push_char(buffer, ch);
        }
        push_char(buffer, quote);
    }

    fn needs_quoting(&self, field: &str) -> bool {
        let delimiter = self.delimiter as char;
        let quote = self.quote_char as char;
        field
            .chars()
            .any(|c| c == delimiter || c == quote || c == '\n' || c == '\r')
    }
}

fn push_char(buffer: &mut Vec<u8>, ch: char) {
    let mut utf8 = [0u8; 4];
    buffer.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
}
