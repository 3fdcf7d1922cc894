//! Table input: discovery and CSV reading
//!
//! Shared by the validator and the transformer. Each file is read fully
//! into a `Table` before it is processed.

mod discover;
mod errors;
mod reader;
mod row;

pub use discover::{discover_inputs, TABLE_EXTENSION};
pub use errors::{TableError, TableResult};
pub use reader::{file_id, parse_table, read_table, Table, FIRST_DATA_ROW};
pub use row::FieldRow;
