use crate::config::Config;
use anyhow::{Context, Result};
use dayplan_store::JsonFileStore;
use dayplan_types::DateKey;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Config::FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("dayplan.log")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    pub fn open_store(&self) -> Result<JsonFileStore> {
        JsonFileStore::in_dir(&self.data_dir).with_context(|| {
            format!(
                "Failed to open records in {}",
                self.data_dir.display()
            )
        })
    }

    /// Anchor date for this run: an explicit override, else the local date
    pub fn today(&self, override_date: Option<DateKey>) -> DateKey {
        override_date.unwrap_or_else(DateKey::today)
    }
}
