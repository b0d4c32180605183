use dayplan_types::{DateKey, DayRecord};
use owo_colors::OwoColorize;

use super::tile::{DayTile, detail_lines};

/// Plain line output for `show`, `set`, and `browse` without a terminal.
/// Colors are only used when stdout is a terminal.
pub struct ConsoleDayView {
    color: bool,
}

impl ConsoleDayView {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn print_detail(&self, date: DateKey, record: &DayRecord) {
        let mut lines = detail_lines(date, record).into_iter();
        if let Some(title) = lines.next() {
            self.print_title(&title);
        }
        for line in lines {
            println!("{}", line);
        }
    }

    pub fn print_tile(&self, tile: &DayTile) {
        let [title, tasks, notes] = tile.lines();
        self.print_title(title);
        println!("  {}", tasks);
        if self.color {
            println!("  {}", notes.dimmed());
        } else {
            println!("  {}", notes);
        }
    }

    fn print_title(&self, title: &str) {
        if self.color {
            println!("{}", title.bold().cyan());
        } else {
            println!("{}", title);
        }
    }
}
