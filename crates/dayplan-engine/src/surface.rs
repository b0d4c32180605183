use dayplan_types::DateKey;

/// Snapshot of the viewport taken when a scroll event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Offset of the viewport's top edge from the content start
    pub scroll_top: u32,
    /// Total height of the materialized content
    pub scroll_height: u32,
    /// Visible height of the viewport
    pub viewport_height: u32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: u32, scroll_height: u32, viewport_height: u32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    /// Distance from the viewport bottom to the content end, negative when overscrolled
    pub fn distance_to_end(&self) -> i64 {
        self.scroll_height as i64 - (self.scroll_top as i64 + self.viewport_height as i64)
    }
}

/// Produces the display unit for one date.
///
/// Implementations know nothing about the window; the controller only ever
/// asks for dates inside its bounds, each at most once.
pub trait RowSource {
    type Row;
    type Error;

    fn materialize(&mut self, date: DateKey) -> Result<Self::Row, Self::Error>;
}

/// Ordered container of rows plus the scroll state of the viewport over it.
pub trait Mount {
    type Row;

    /// Add rows, in ascending date order, after the last row
    fn append(&mut self, rows: Vec<(DateKey, Self::Row)>);

    /// Add rows, in ascending date order, before the first row
    fn prepend(&mut self, rows: Vec<(DateKey, Self::Row)>);

    fn scroll_height(&self) -> u32;

    fn set_scroll_top(&mut self, offset: u32);

    /// Drop `count` rows from the front, returning the height removed
    fn evict_front(&mut self, count: usize) -> u32;

    /// Drop `count` rows from the back, returning the height removed
    fn evict_back(&mut self, count: usize) -> u32;
}
