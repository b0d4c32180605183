use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Calendar date normalized to midnight.
///
/// The canonical string form is `YYYY-MM-DD`, so chronological order and
/// lexical order of the canonical form agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Current date in the local timezone
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    pub fn pred(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Shift by a signed number of days, `None` when leaving chrono's range
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Self)
    }

    /// Signed day count from `self` to `later` (negative when `later` is earlier)
    pub fn days_until(&self, later: DateKey) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }

    /// Long human label, e.g. "Sunday, August 10, 2025"
    pub fn long_label(&self) -> String {
        self.0.format("%A, %B %-d, %Y").to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the canonical form does not
        if trimmed.len() != 10 {
            return Err(Error::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map(Self)
            .map_err(|_| Error::InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Inclusive, non-empty run of consecutive dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    start: DateKey,
    end: DateKey,
}

#[allow(clippy::len_without_is_empty)]
impl DateSpan {
    /// Returns `None` when `start > end`
    pub fn new(start: DateKey, end: DateKey) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single(date: DateKey) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> DateKey {
        self.start
    }

    pub fn end(&self) -> DateKey {
        self.end
    }

    /// Number of days covered, always at least one
    pub fn len(&self) -> usize {
        self.start.days_until(self.end) as usize + 1
    }

    pub fn contains(&self, date: DateKey) -> bool {
        self.start <= date && date <= self.end
    }

    /// Zero-based position of `date` within the span
    pub fn position(&self, date: DateKey) -> Option<usize> {
        self.contains(date)
            .then(|| self.start.days_until(date) as usize)
    }

    pub fn iter(&self) -> DateIter {
        DateIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl fmt::Display for DateSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

impl IntoIterator for DateSpan {
    type Item = DateKey;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`DateSpan`]
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<DateKey>,
    end: DateKey,
}

impl Iterator for DateIter {
    type Item = DateKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = if current == self.end {
            None
        } else {
            current.succ()
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|next| (next.days_until(self.end) + 1).max(0) as usize)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_are_canonical() {
        let date = key("2025-08-01");
        assert_eq!(date.to_string(), "2025-08-01");
        assert_eq!(date, DateKey::from_ymd(2025, 8, 1).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_canonical_input() {
        assert!("2025-8-1".parse::<DateKey>().is_err());
        assert!("2025-02-30".parse::<DateKey>().is_err());
        assert!("01/08/2025".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_ordering_matches_lexical_order() {
        let dates = ["2024-12-31", "2025-01-01", "2025-01-10", "2025-10-01"];
        for pair in dates.windows(2) {
            assert!(key(pair[0]) < key(pair[1]));
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_day_arithmetic_crosses_month_and_year() {
        assert_eq!(key("2025-01-31").succ(), Some(key("2025-02-01")));
        assert_eq!(key("2025-01-01").pred(), Some(key("2024-12-31")));
        assert_eq!(key("2025-08-10").add_days(120), Some(key("2025-12-08")));
        assert_eq!(key("2025-08-10").add_days(-9), Some(key("2025-08-01")));
        assert_eq!(key("2025-08-01").days_until(key("2025-08-10")), 9);
        assert_eq!(key("2025-08-10").days_until(key("2025-08-01")), -9);
    }

    #[test]
    fn test_long_label() {
        assert_eq!(key("2025-08-10").long_label(), "Sunday, August 10, 2025");
    }

    #[test]
    fn test_span_iterates_inclusive_ascending() {
        let span = DateSpan::new(key("2025-02-27"), key("2025-03-02")).unwrap();
        let days: Vec<String> = span.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            days,
            vec!["2025-02-27", "2025-02-28", "2025-03-01", "2025-03-02"]
        );
        assert_eq!(span.len(), 4);
        assert_eq!(span.iter().len(), 4);
        assert_eq!(span.position(key("2025-03-01")), Some(2));
        assert_eq!(span.position(key("2025-03-03")), None);
    }

    #[test]
    fn test_span_rejects_inverted_range() {
        assert!(DateSpan::new(key("2025-08-02"), key("2025-08-01")).is_none());
        assert_eq!(DateSpan::single(key("2025-08-01")).len(), 1);
    }
}
