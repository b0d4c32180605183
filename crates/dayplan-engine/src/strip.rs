use std::collections::VecDeque;

use dayplan_types::DateKey;

use crate::surface::{Mount, ScrollMetrics};

/// Fixed-height rows over a scrollable viewport.
///
/// Scroll offsets are clamped the way a browser clamps `scrollTop`: never
/// below zero and never past `scroll_height - viewport_height`.
#[derive(Debug, Clone)]
pub struct RowStrip<R> {
    rows: VecDeque<(DateKey, R)>,
    row_height: u32,
    scroll_top: u32,
    viewport_height: u32,
}

impl<R> RowStrip<R> {
    pub fn new(row_height: u32) -> Self {
        Self {
            rows: VecDeque::new(),
            row_height: row_height.max(1),
            scroll_top: 0,
            viewport_height: 0,
        }
    }

    pub fn row_height(&self) -> u32 {
        self.row_height
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        self.viewport_height = height;
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.scroll_top, self.scroll_height(), self.viewport_height)
    }

    pub fn max_scroll(&self) -> u32 {
        Mount::scroll_height(self).saturating_sub(self.viewport_height)
    }

    /// Move the viewport by a signed amount
    pub fn scroll_by(&mut self, delta: i64) {
        let target = (self.scroll_top as i64 + delta).max(0);
        self.scroll_to(u32::try_from(target).unwrap_or(u32::MAX));
    }

    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll_top = offset.min(self.max_scroll());
    }

    /// Scroll so that row `index` sits in the middle of the viewport
    pub fn center_on(&mut self, index: usize) {
        let row_top = self.offset_of(index);
        let lead = self.viewport_height.saturating_sub(self.row_height) / 2;
        self.scroll_to(row_top.saturating_sub(lead));
    }

    pub fn offset_of(&self, index: usize) -> u32 {
        u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    /// Index of the row under the viewport's top edge
    pub fn top_index(&self) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        let index = (self.scroll_top / self.row_height) as usize;
        Some(index.min(self.rows.len() - 1))
    }

    pub fn get(&self, index: usize) -> Option<(&DateKey, &R)> {
        self.rows.get(index).map(|(date, row)| (date, row))
    }

    pub fn position(&self, date: DateKey) -> Option<usize> {
        let first = self.rows.front()?.0;
        let index = usize::try_from(first.days_until(date)).ok()?;
        (self.rows.get(index)?.0 == date).then_some(index)
    }

    pub fn row_mut(&mut self, date: DateKey) -> Option<&mut R> {
        let index = self.position(date)?;
        self.rows.get_mut(index).map(|(_, row)| row)
    }

    pub fn rows(&self) -> impl Iterator<Item = (&DateKey, &R)> + '_ {
        self.rows.iter().map(|(date, row)| (date, row))
    }

    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.rows.iter().map(|(date, _)| *date)
    }

    /// Rows intersecting the viewport, with their index
    pub fn visible(&self) -> impl Iterator<Item = (usize, &DateKey, &R)> + '_ {
        let start = (self.scroll_top / self.row_height) as usize;
        let span = self.viewport_height.div_ceil(self.row_height) as usize + 1;
        self.rows
            .iter()
            .enumerate()
            .skip(start)
            .take(span)
            .map(|(index, (date, row))| (index, date, row))
    }
}

impl<R> Mount for RowStrip<R> {
    type Row = R;

    fn append(&mut self, rows: Vec<(DateKey, R)>) {
        self.rows.extend(rows);
    }

    fn prepend(&mut self, rows: Vec<(DateKey, R)>) {
        for row in rows.into_iter().rev() {
            self.rows.push_front(row);
        }
    }

    fn scroll_height(&self) -> u32 {
        self.offset_of(self.rows.len())
    }

    fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_to(offset);
    }

    fn evict_front(&mut self, count: usize) -> u32 {
        let count = count.min(self.rows.len());
        self.rows.drain(..count);
        self.offset_of(count)
    }

    fn evict_back(&mut self, count: usize) -> u32 {
        let count = count.min(self.rows.len());
        self.rows.truncate(self.rows.len() - count);
        self.scroll_top = self.scroll_top.min(self.max_scroll());
        self.offset_of(count)
    }
}
