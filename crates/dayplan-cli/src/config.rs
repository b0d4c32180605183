use anyhow::{Context, Result, bail};
use dayplan_engine::{GrowthConfig, Retention};
use dayplan_types::{Bounds, DateKey};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DAYPLAN_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.dayplan (fallback for systems without standard data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("DAYPLAN_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("dayplan"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".dayplan"));
    }

    bail!("Could not determine data directory: no HOME directory or system data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_min_date() -> DateKey {
    DateKey::from_ymd(2025, 8, 1).unwrap_or_else(DateKey::today)
}

/// Date range the planner covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_min_date")]
    pub min_date: DateKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<DateKey>,
    #[serde(default = "default_initial_past_days")]
    pub initial_past_days: u32,
    #[serde(default = "default_initial_future_days")]
    pub initial_future_days: u32,
}

fn default_initial_past_days() -> u32 {
    30
}

fn default_initial_future_days() -> u32 {
    120
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min_date: default_min_date(),
            max_date: None,
            initial_past_days: default_initial_past_days(),
            initial_future_days: default_initial_future_days(),
        }
    }
}

/// Growth settings for the terminal browser, thresholds in terminal lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_append_threshold")]
    pub append_threshold: u32,
    #[serde(default = "default_prepend_threshold")]
    pub prepend_threshold: u32,
    #[serde(default = "default_append_batch")]
    pub append_batch: u32,
    #[serde(default = "default_prepend_batch")]
    pub prepend_batch: u32,
    /// Keep at most this many days materialized; unlimited when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retain_rows: Option<usize>,
}

fn default_append_threshold() -> u32 {
    40
}

fn default_prepend_threshold() -> u32 {
    20
}

fn default_append_batch() -> u32 {
    60
}

fn default_prepend_batch() -> u32 {
    30
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            append_threshold: default_append_threshold(),
            prepend_threshold: default_prepend_threshold(),
            append_batch: default_append_batch(),
            prepend_batch: default_prepend_batch(),
            retain_rows: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Config {
    pub const FILE_NAME: &'static str = "config.toml";

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.bounds().is_empty() {
            bail!(
                "Configuration error: min_date {} is after max_date {}",
                self.range.min_date,
                self.range
                    .max_date
                    .map(|d| d.to_string())
                    .unwrap_or_default()
            );
        }
        self.growth()
            .validate()
            .map_err(|err| anyhow::anyhow!("Configuration error: {}", err))
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.range.min_date, self.range.max_date)
    }

    pub fn growth(&self) -> GrowthConfig {
        GrowthConfig {
            append_threshold: self.scroll.append_threshold,
            prepend_threshold: self.scroll.prepend_threshold,
            append_batch: self.scroll.append_batch,
            prepend_batch: self.scroll.prepend_batch,
            initial_past_days: self.range.initial_past_days,
            initial_future_days: self.range.initial_future_days,
            retention: match self.scroll.retain_rows {
                Some(max_rows) => Retention::Cap { max_rows },
                None => Retention::Unbounded,
            },
        }
    }
}
