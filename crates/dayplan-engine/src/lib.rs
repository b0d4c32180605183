//! Range controller for an infinitely scrolling, date-indexed list of day rows.
//!
//! The controller owns the bookkeeping of which dates are materialized and
//! decides, from a snapshot of scroll metrics, when to grow the window at
//! either edge. Rows themselves are produced by a [`RowSource`] and held by a
//! [`Mount`]; [`RowStrip`] is a ready-made mount with a fixed row height.

mod config;
mod controller;
mod error;
mod guard;
mod strip;
mod surface;

pub use config::{GrowthConfig, Retention};
pub use controller::{GrowthPlan, RangeController, ScrollOutcome, anchor_offset, seed_span};
pub use error::{Error, Result};
pub use strip::RowStrip;
pub use surface::{Mount, RowSource, ScrollMetrics};
