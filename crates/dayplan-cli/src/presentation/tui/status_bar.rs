//! Status Bar View Component
//!
//! Bottom bar with the date range, window size and key help.

use dayplan_types::DateKey;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusBarView<'a> {
    min_date: DateKey,
    last_rendered: Option<DateKey>,
    rows: usize,
    error_message: Option<&'a str>,
}

impl<'a> StatusBarView<'a> {
    pub fn new(
        min_date: DateKey,
        last_rendered: Option<DateKey>,
        rows: usize,
        error_message: Option<&'a str>,
    ) -> Self {
        Self {
            min_date,
            last_rendered,
            rows,
            error_message,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(inner);

        let status_line = match self.error_message {
            Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Red))),
            None => Line::from(vec![
                Span::raw(format!("From {} ", self.min_date)),
                Span::raw("| "),
                Span::raw(format!(
                    "Through {} ",
                    self.last_rendered
                        .map(|date| date.to_string())
                        .unwrap_or_else(|| "-".to_string())
                )),
                Span::raw("| "),
                Span::raw(format!("{} days loaded", self.rows)),
            ]),
        };
        Paragraph::new(status_line).render(chunks[0], buf);

        let help_line = Line::from(vec![
            Span::styled("[q]", Style::default().fg(Color::Yellow)),
            Span::raw("uit "),
            Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
            Span::raw("scroll "),
            Span::styled("[t]", Style::default().fg(Color::Yellow)),
            Span::raw("oday "),
            Span::styled("[e]", Style::default().fg(Color::Yellow)),
            Span::raw("dit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
