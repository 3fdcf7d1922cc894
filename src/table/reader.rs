//! CSV table reader
//!
//! Reads a whole table file into memory:
//! - the first record is the header; an empty file has no header
//! - keys and values are trimmed
//! - short records are padded with empty values
//! - values past the end of the header are dropped
//! - blank lines are skipped and never counted

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::errors::{TableError, TableResult};
use super::row::FieldRow;

/// Row number of the first data record. The header is row 1.
pub const FIRST_DATA_ROW: usize = 2;

/// A parsed table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// File name, e.g. `shoot.csv`
    pub file_id: String,
    /// Trimmed header, in file order
    pub header: Vec<String>,
    /// Data rows
    pub rows: Vec<FieldRow>,
}

impl Table {
    /// Iterates data rows with their 1-based row numbers.
    pub fn numbered_rows(&self) -> impl Iterator<Item = (usize, &FieldRow)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + FIRST_DATA_ROW, row))
    }
}

/// Returns the identifier (file name) of a table path.
pub fn file_id(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads a table file from disk.
pub fn read_table(path: &Path) -> TableResult<Table> {
    let id = file_id(path);
    let file = File::open(path).map_err(|source| TableError::Io {
        file: id.clone(),
        source,
    })?;
    parse_table(&id, file)
}

/// Parses a table from any reader.
pub fn parse_table<R: Read>(file_id: &str, input: R) -> TableResult<Table> {
    let csv_err = |source| TableError::Csv {
        file: file_id.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let header: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    if header.is_empty() {
        return Err(TableError::MissingHeader {
            file: file_id.to_string(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        let row: FieldRow = header
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_str(), record.get(i).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(Table {
        file_id: file_id.to_string(),
        header,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> TableResult<Table> {
        parse_table("test.csv", content.as_bytes())
    }

    #[test]
    fn test_trims_keys_and_values() {
        let table = parse(" name , ap \n  Bolter ,  1 \n").unwrap();
        assert_eq!(table.header, vec!["name", "ap"]);
        assert_eq!(table.rows[0].get("name"), Some("Bolter"));
        assert_eq!(table.rows[0].get("ap"), Some("1"));
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, TableError::MissingHeader { .. }));
    }

    #[test]
    fn test_header_only_has_no_rows() {
        let table = parse("name,step,effect_text\n").unwrap();
        assert_eq!(table.header.len(), 3);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_short_record_padded_with_empty() {
        let table = parse("name,ap,points\nBolter,1\n").unwrap();
        assert_eq!(table.rows[0].get("points"), Some(""));
        assert_eq!(table.rows[0].len(), 3);
    }

    #[test]
    fn test_long_record_truncated_to_header() {
        let table = parse("name,ap\nBolter,1,extra\n").unwrap();
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_quoted_delimiter_preserved() {
        let table = parse("name,effect_text\nBolter,\"Hits, then rolls\"\n").unwrap();
        assert_eq!(table.rows[0].get("effect_text"), Some("Hits, then rolls"));
    }

    #[test]
    fn test_row_numbers_skip_blank_lines() {
        let table = parse("name\nA\n\nB\n").unwrap();
        let numbers: Vec<usize> = table.numbered_rows().map(|(n, _)| n).collect();
        assert_eq!(numbers, vec![2, 3]);
    }

    #[test]
    fn test_file_id_is_file_name() {
        assert_eq!(file_id(Path::new("docs/shoot.csv")), "shoot.csv");
    }
}
