//! Day List View Component
//!
//! Renders the visible slice of the row strip, one three-line tile per day.

use dayplan_engine::RowStrip;
use dayplan_types::DateKey;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::tile::DayTile;

pub struct DayListView<'a> {
    strip: &'a RowStrip<DayTile>,
    selected: Option<usize>,
    today: DateKey,
}

impl<'a> DayListView<'a> {
    pub fn new(strip: &'a RowStrip<DayTile>, selected: Option<usize>, today: DateKey) -> Self {
        Self {
            strip,
            selected,
            today,
        }
    }

    fn tile_lines(&self, index: usize, tile: &'a DayTile) -> [Line<'a>; 3] {
        let mut title_style = Style::default().add_modifier(Modifier::BOLD);
        if tile.date == self.today {
            title_style = title_style.fg(Color::Cyan);
        }
        if self.selected == Some(index) {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        let [title, tasks, notes] = tile.lines();
        [
            Line::styled(title, title_style),
            Line::raw(format!("  {}", tasks)),
            Line::styled(
                format!("  {}", notes),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]
    }
}

impl<'a> Widget for DayListView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Days").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        // The first visible tile may be cut off at the top
        let skip = (self.strip.scroll_top() % self.strip.row_height()) as usize;

        let lines: Vec<Line> = self
            .strip
            .visible()
            .flat_map(|(index, _, tile)| self.tile_lines(index, tile))
            .skip(skip)
            .take(inner.height as usize)
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
