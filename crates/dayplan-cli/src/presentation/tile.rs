//! Day tile text
//!
//! A tile is the fixed three-line summary of one day used by the browser,
//! plus the longer detail text printed by `show` and the detail pane.

use dayplan_types::{DateKey, DayRecord, PLACEHOLDER, TASK_SLOTS};

/// Terminal lines per tile
pub const TILE_HEIGHT: u32 = 3;

const TASK_SEPARATOR: &str = " · ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTile {
    pub date: DateKey,
    pub title: String,
    pub tasks: String,
    pub notes: String,
    pub record: DayRecord,
}

impl DayTile {
    pub fn new(date: DateKey, record: DayRecord) -> Self {
        let tasks = (0..TASK_SLOTS)
            .map(|slot| record.task_label(slot))
            .collect::<Vec<_>>()
            .join(TASK_SEPARATOR);

        Self {
            date,
            title: date.long_label(),
            tasks,
            notes: notes_preview(&record),
            record,
        }
    }

    pub fn lines(&self) -> [&str; TILE_HEIGHT as usize] {
        [&self.title, &self.tasks, &self.notes]
    }

    pub fn detail_lines(&self) -> Vec<String> {
        detail_lines(self.date, &self.record)
    }
}

/// First line of the notes, or the placeholder when there are none
fn notes_preview(record: &DayRecord) -> String {
    let label = record.notes_label();
    match label.lines().find(|line| !line.trim().is_empty()) {
        Some(first) if label.lines().count() > 1 => format!("{} …", first.trim_end()),
        Some(first) => first.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Full record of one day, one item per line
pub fn detail_lines(date: DateKey, record: &DayRecord) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", date.long_label(), date)];
    for slot in 0..TASK_SLOTS {
        lines.push(format!("  {}. {}", slot + 1, record.task_label(slot)));
    }
    lines.push("Notes:".to_string());
    lines.extend(
        record
            .notes_label()
            .lines()
            .map(|line| format!("  {}", line)),
    );
    lines
}
