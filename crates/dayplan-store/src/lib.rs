// Day records are kept as a single JSON object keyed by date, mirroring the
// export document, so an export can be imported back byte for byte.

mod document;
mod error;
mod json_file;
mod store;

pub use document::{export_document, import_document, parse_document};
pub use error::{Error, Result};
pub use json_file::JsonFileStore;
pub use store::{DayMap, DayStore, MemoryStore};
