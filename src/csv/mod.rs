//! CSV utilities for parsing and encoding

mod encoder;
mod parser;

pub use encoder::CsvEncoder;
pub use parser::{parse_csv, CsvParser};
