//! Schema registry for table files
//!
//! Each table file may register:
//! - an expected header (order-sensitive)
//! - integer columns
//! - per-column allowed tokens (accepted verbatim, e.g. a `*` wildcard)
//!
//! Files with no registered entry are not header-enforced; the validator
//! reports a warning and still runs row-level checks.

mod errors;
mod loader;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use registry::SchemaRegistry;
pub use types::SchemaEntry;
