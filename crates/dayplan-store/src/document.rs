use tracing::info;

use crate::store::{DayMap, DayStore};
use crate::{Error, Result};

/// Full record set as a pretty-printed JSON document
pub fn export_document<S: DayStore + ?Sized>(store: &S) -> Result<String> {
    let records = store.all()?;
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn parse_document(text: &str) -> Result<DayMap> {
    serde_json::from_str(text).map_err(|err| Error::InvalidDocument(err.to_string()))
}

/// Replace every stored record with the contents of `text`.
///
/// Nothing is written unless the whole document parses.
pub fn import_document<S: DayStore + ?Sized>(store: &mut S, text: &str) -> Result<usize> {
    let records = parse_document(text)?;
    let count = records.len();
    store.replace_all(records)?;
    info!(days = count, "imported records");
    Ok(count)
}
