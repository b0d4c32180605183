use crate::{Error, Result};

/// What happens to rows once the window grows past a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Rows are never dropped once materialized
    #[default]
    Unbounded,
    /// Keep at most `max_rows`, evicting from the edge opposite to growth
    Cap { max_rows: usize },
}

/// Thresholds and batch sizes for window growth.
///
/// Thresholds are in the same unit as the scroll metrics handed to the
/// controller (pixels in a browser, lines in a terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Append when the viewport bottom is closer than this to the content end
    pub append_threshold: u32,
    /// Prepend when the scroll offset is below this
    pub prepend_threshold: u32,
    pub append_batch: u32,
    pub prepend_batch: u32,
    /// Days seeded before the anchor, capped by the lower bound
    pub initial_past_days: u32,
    /// Days seeded after the anchor, capped by the upper bound
    pub initial_future_days: u32,
    pub retention: Retention,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            append_threshold: 800,
            prepend_threshold: 400,
            append_batch: 60,
            prepend_batch: 30,
            initial_past_days: 30,
            initial_future_days: 120,
            retention: Retention::Unbounded,
        }
    }
}

impl GrowthConfig {
    pub fn validate(&self) -> Result<()> {
        if self.append_batch == 0 || self.prepend_batch == 0 {
            return Err(Error::InvalidConfig(
                "batch sizes must be at least one day".to_string(),
            ));
        }

        if let Retention::Cap { max_rows } = self.retention {
            // A cap below two batches would evict rows that were just materialized
            let floor = 2 * self.append_batch.max(self.prepend_batch) as usize;
            if max_rows < floor {
                return Err(Error::InvalidConfig(format!(
                    "retained rows ({}) must be at least {} for the configured batch sizes",
                    max_rows, floor
                )));
            }
        }

        Ok(())
    }
}
