mod bounds;
mod date;
mod record;

pub use bounds::Bounds;
pub use date::{DateIter, DateKey, DateSpan};
pub use record::{DayRecord, PLACEHOLDER, TASK_SLOTS};
