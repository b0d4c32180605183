use std::collections::BTreeMap;

use dayplan_types::{DateKey, DayRecord};

use crate::Result;

/// All stored records in chronological order
pub type DayMap = BTreeMap<DateKey, DayRecord>;

/// Get/set map of day records keyed by date.
pub trait DayStore {
    /// Stored record, or the blank default when nothing was saved for `date`
    fn get(&self, date: DateKey) -> Result<DayRecord>;

    /// Save `record` for `date`; tasks are trimmed before storing
    fn set(&mut self, date: DateKey, record: DayRecord) -> Result<()>;

    fn all(&self) -> Result<DayMap>;

    /// Replace every stored record at once
    fn replace_all(&mut self, records: DayMap) -> Result<()>;
}

/// Volatile store, used by tests and previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: DayMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<DayMap> for MemoryStore {
    fn from(records: DayMap) -> Self {
        Self { records }
    }
}

impl DayStore for MemoryStore {
    fn get(&self, date: DateKey) -> Result<DayRecord> {
        Ok(self.records.get(&date).cloned().unwrap_or_default())
    }

    fn set(&mut self, date: DateKey, record: DayRecord) -> Result<()> {
        self.records.insert(date, record.normalized());
        Ok(())
    }

    fn all(&self) -> Result<DayMap> {
        Ok(self.records.clone())
    }

    fn replace_all(&mut self, records: DayMap) -> Result<()> {
        self.records = records;
        Ok(())
    }
}
