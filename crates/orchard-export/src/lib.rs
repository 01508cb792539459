//! Reader for the retired platform's CSV exports.
//!
//! Converts export files into [`RawRecord`]s keyed by the export's own
//! column headers, verbatim — casing quirks and incidental whitespace
//! included. Pure synchronous; no database dependencies.
//!
//! The legacy format itself (file names, mention columns, relation-field
//! descriptors, sentinels, value conventions) lives in [`catalog`] and
//! [`values`]; nothing else in the workspace hard-codes a legacy detail.

pub mod catalog;
pub mod error;
mod reader;
mod record;
pub mod values;

pub use catalog::{
  ADMIN_PLACEHOLDER, Dataset, ExportCatalog, RELATION_FIELDS, RelationField,
};
pub use error::{Error, Result};
pub use reader::read_records;
pub use record::RawRecord;
