pub mod console;
pub mod tile;
pub mod tui;

pub use console::ConsoleDayView;
pub use tile::{DayTile, TILE_HEIGHT};
