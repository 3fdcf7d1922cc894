//! tablecheck - schema validation and JSON publishing for CSV rule tables
//!
//! Two independent passes over the same input directory:
//! - `validator`: header, name and column checks against the `schema` registry
//! - `transform`: one JSON document per table plus a manifest

pub mod cli;
pub mod observability;
pub mod schema;
pub mod table;
pub mod transform;
pub mod validator;
