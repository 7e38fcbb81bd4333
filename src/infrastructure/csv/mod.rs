mod parser;

pub use parser::{CsvParser, ParsedCsv};
