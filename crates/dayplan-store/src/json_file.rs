use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use dayplan_types::{DateKey, DayRecord};
use tracing::{debug, warn};

use crate::store::{DayMap, DayStore};
use crate::Result;

/// Records persisted as one JSON object on disk.
///
/// The whole map is loaded on open and rewritten on every change.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    records: DayMap,
}

impl JsonFileStore {
    pub const FILE_NAME: &'static str = "calendar.json";

    /// Open the store at `path`. A missing file is an empty store. An
    /// unreadable document is moved aside to `<path>.corrupt` and the
    /// store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = load(&path)?;
        debug!(path = %path.display(), days = records.len(), "opened day store");
        Ok(Self { path, records })
    }

    /// Open `calendar.json` inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::open(data_dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole map to a temp file, then rename it over the store
    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = with_suffix(&self.path, ".tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer(&mut writer, &self.records)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), days = self.records.len(), "saved day store");
        Ok(())
    }
}

fn load(path: &Path) -> Result<DayMap> {
    if !path.exists() {
        return Ok(DayMap::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(DayMap::new());
    }

    match serde_json::from_str(&content) {
        Ok(records) => Ok(records),
        Err(err) => {
            let aside = with_suffix(path, ".corrupt");
            fs::rename(path, &aside)?;
            warn!(
                path = %path.display(),
                moved_to = %aside.display(),
                error = %err,
                "unreadable day store moved aside"
            );
            Ok(DayMap::new())
        }
    }
}

/// `calendar.json` + `.tmp` -> `calendar.json.tmp`
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

impl DayStore for JsonFileStore {
    fn get(&self, date: DateKey) -> Result<DayRecord> {
        Ok(self.records.get(&date).cloned().unwrap_or_default())
    }

    fn set(&mut self, date: DateKey, record: DayRecord) -> Result<()> {
        self.records.insert(date, record.normalized());
        self.flush()
    }

    fn all(&self) -> Result<DayMap> {
        Ok(self.records.clone())
    }

    fn replace_all(&mut self, records: DayMap) -> Result<()> {
        self.records = records;
        self.flush()
    }
}
