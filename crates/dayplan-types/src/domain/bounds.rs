use super::date::DateKey;

/// Immutable date range the planner may materialize.
///
/// `max` absent means the future is unbounded. When `min > max` the bounds
/// admit no date at all and [`Bounds::is_empty`] reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min: DateKey,
    max: Option<DateKey>,
}

impl Bounds {
    pub fn new(min: DateKey, max: Option<DateKey>) -> Self {
        Self { min, max }
    }

    /// Bounds with no upper limit
    pub fn starting_at(min: DateKey) -> Self {
        Self { min, max: None }
    }

    pub fn min(&self) -> DateKey {
        self.min
    }

    pub fn max(&self) -> Option<DateKey> {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.max.is_some_and(|max| max < self.min)
    }

    pub fn contains(&self, date: DateKey) -> bool {
        date >= self.min && self.max.is_none_or(|max| date <= max)
    }

    /// Clamp `date` into the bounds. Meaningless for empty bounds.
    pub fn clamp(&self, date: DateKey) -> DateKey {
        if date < self.min {
            return self.min;
        }
        match self.max {
            Some(max) if date > max => max,
            _ => date,
        }
    }
}
