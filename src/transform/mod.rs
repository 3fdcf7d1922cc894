//! Transformer: tables to JSON documents plus a manifest
//!
//! Independent of the validator; it never consults validation results.

mod document;
mod errors;
mod manifest;
mod transformer;

pub use document::{to_document, write_document};
pub use errors::{TransformError, TransformResult};
pub use manifest::{Manifest, ManifestEntry};
pub use transformer::{
    output_name, SkippedFile, TransformReport, Transformer, WrittenDocument, DOCUMENT_EXTENSION,
    MANIFEST_FILE,
};
