//! Permissive CSV parsing over a whole document

use crate::types::{Document, Record};

/// CSV parser for reading CSV documents
///
/// Works on the full text at once so that quoted fields may span lines.
/// Line terminators `\n`, `\r` and `\r\n` are all accepted. The parser never
/// rejects input: malformed quoting is processed mechanically and rows may
/// have any number of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    delimiter: u8,
    quote_char: u8,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new(b',', b'"')
    }
}

impl CsvParser {
    /// Create a new CSV parser with custom delimiter and quote character
    pub fn new(delimiter: u8, quote_char: u8) -> Self {
        Self {
            delimiter,
            quote_char,
        }
    }

    /// Field delimiter in use
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Quote character in use
    pub fn quote_char(&self) -> u8 {
        self.quote_char
    }

    /// Parse a CSV document into records
    ///
    /// Blank lines produce no record, and a missing terminator after the
    /// last row is fine. Empty input gives an empty document.
    ///
    /// # Examples
    ///
    /// ```
    /// use epicatalog::csv::CsvParser;
    ///
    /// let parser = CsvParser::default();
    /// let rows = parser.parse("codigo,descricao\r\nX1,\"Luva, nitrílica\"\r\n");
    /// assert_eq!(rows, vec![vec!["codigo", "descricao"], vec!["X1", "Luva, nitrílica"]]);
    /// ```
    pub fn parse(&self, text: &str) -> Document {
        let quote = self.quote_char as char;
        let delimiter = self.delimiter as char;

        let mut records = Vec::new();
        let mut record: Record = Vec::new();
        let mut current_field = String::new();
        let mut in_quotes = false;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == quote {
                if in_quotes && chars.peek() == Some(&quote) {
                    // Escaped quote ("")
                    current_field.push(quote);
                    chars.next();
                } else {
                    // Toggle regardless of where the quote sits in the field
                    in_quotes = !in_quotes;
                }
            } else if in_quotes {
                current_field.push(ch);
            } else if ch == delimiter {
                record.push(std::mem::take(&mut current_field));
            } else if ch == '\n' || ch == '\r' {
                if !current_field.is_empty() || !record.is_empty() {
                    record.push(std::mem::take(&mut current_field));
                }
                if !record.is_empty() {
                    records.push(std::mem::take(&mut record));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            } else {
                current_field.push(ch);
            }
        }

        // Flush input lacking a trailing terminator
        if !current_field.is_empty() || !record.is_empty() {
            record.push(current_field);
        }
        if !record.is_empty() {
            records.push(record);
        }

        records
    }
}

/// Parse a comma-separated, double-quoted document with the default parser
pub fn parse_csv(text: &str) -> Document {
    CsvParser::default().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        assert_eq!(parse_csv("a,b,c"), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_quoted() {
        assert_eq!(parse_csv(r#""a,b",c"#), vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(parse_csv(r#""a""b",c"#), vec![vec!["a\"b", "c"]]);
        assert_eq!(
            parse_csv(r#""Say ""Hello""",world"#),
            vec![vec![r#"Say "Hello""#, "world"]]
        );
    }

    #[test]
    fn test_line_endings() {
        let expected = vec![vec!["a", "b"], vec!["c", "d"]];
        assert_eq!(parse_csv("a,b\r\nc,d\r\n"), expected);
        assert_eq!(parse_csv("a,b\rc,d"), expected);
        assert_eq!(parse_csv("a,b\nc,d"), expected);
        assert_eq!(parse_csv("a,b\nc,d\r"), expected);
    }

    #[test]
    fn test_trailing_newline() {
        assert_eq!(parse_csv("a,b\n"), vec![vec!["a", "b"]]);
        assert_eq!(parse_csv("a,b"), vec![vec!["a", "b"]]);
        assert_eq!(parse_csv("a,b\n\n\r\n"), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("\n").is_empty());
        assert!(parse_csv("\r\n\r\n").is_empty());
    }

    #[test]
    fn test_blank_lines_between_rows() {
        assert_eq!(parse_csv("a\n\nb\n"), vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_quoted_with_newline() {
        assert_eq!(parse_csv("\"a,b\nc\",d"), vec![vec!["a,b\nc", "d"]]);
        assert_eq!(
            parse_csv("\"Line 1\r\nLine 2\",normal\n"),
            vec![vec!["Line 1\r\nLine 2", "normal"]]
        );
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(parse_csv("a,,c"), vec![vec!["a", "", "c"]]);
        assert_eq!(parse_csv(",,"), vec![vec!["", "", ""]]);
        assert_eq!(parse_csv("a,\n"), vec![vec!["a", ""]]);
    }

    #[test]
    fn test_leading_delimiter_keeps_empty_field() {
        // The record already has a field when the terminator arrives
        assert_eq!(parse_csv(",\n"), vec![vec!["", ""]]);
    }

    #[test]
    fn test_quoted_empty() {
        assert_eq!(parse_csv(r#""","""#), vec![vec!["", ""]]);
        // A lone empty quoted field leaves nothing to emit
        assert!(parse_csv("\"\"\n").is_empty());
    }

    #[test]
    fn test_mid_field_quote_toggles() {
        assert_eq!(parse_csv(r#"ab"c,d"e,f"#), vec![vec!["abc,de", "f"]]);
        assert_eq!(parse_csv("x\"y\nz"), vec![vec!["xy\nz"]]);
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(parse_csv("\"abc,def\nghi"), vec![vec!["abc,def\nghi"]]);
    }

    #[test]
    fn test_uneven_rows() {
        assert_eq!(
            parse_csv("code,desc\nX1\nX2,b,extra"),
            vec![vec!["code", "desc"], vec!["X1"], vec!["X2", "b", "extra"]]
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = CsvParser::new(b';', b'"');
        assert_eq!((parser.delimiter(), parser.quote_char()), (b';', b'"'));
        assert_eq!(
            parser.parse("a;\"b;c\";d\n1;2;3"),
            vec![vec!["a", "b;c", "d"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn test_custom_quote() {
        let parser = CsvParser::new(b',', b'\'');
        assert_eq!(parser.parse("'a,b','it''s'"), vec![vec!["a,b", "it's"]]);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(
            parse_csv("código,descrição\nA1,Óculos de proteção"),
            vec![vec!["código", "descrição"], vec!["A1", "Óculos de proteção"]]
        );
    }

    #[test]
    fn test_deterministic() {
        let text = "a,\"b\"\"c\"\r\nd,e\rf\n";
        assert_eq!(parse_csv(text), parse_csv(text));
    }
}
