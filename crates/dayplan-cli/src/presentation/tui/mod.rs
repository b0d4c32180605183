//! Terminal day browser
//!
//! `BrowseApp` owns the range controller and the row strip; views only
//! borrow them to draw.

mod app;
mod day_list;
mod editor;
mod source;
mod status_bar;

pub use app::BrowseApp;
pub use day_list::DayListView;
pub use editor::{DayEditor, EditorAction};
pub use source::TileSource;
pub use status_bar::StatusBarView;
