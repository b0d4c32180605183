use std::cell::Cell;

use dayplan_types::{Bounds, DateKey, DateSpan};
use tracing::{debug, trace, warn};

use crate::config::{GrowthConfig, Retention};
use crate::guard::InFlight;
use crate::surface::{Mount, RowSource, ScrollMetrics};

/// Spans the controller would materialize for a given scroll snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrowthPlan {
    pub append: Option<DateSpan>,
    pub prepend: Option<DateSpan>,
}

impl GrowthPlan {
    pub fn is_empty(&self) -> bool {
        self.append.is_none() && self.prepend.is_none()
    }
}

/// Mutations performed by one [`RangeController::on_scroll`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOutcome {
    pub appended: Option<DateSpan>,
    pub prepended: Option<DateSpan>,
    pub evicted_front: usize,
    pub evicted_back: usize,
    /// Scroll offset written to the mount, if any
    pub scroll_top: Option<u32>,
}

impl ScrollOutcome {
    pub fn grew(&self) -> bool {
        self.appended.is_some() || self.prepended.is_some()
    }
}

/// Scroll offset that keeps the previously visible content in place after
/// `new_height - prev_height` worth of rows was inserted above it.
pub fn anchor_offset(scroll_top: u32, prev_height: u32, new_height: u32) -> u32 {
    scroll_top.saturating_add(new_height.saturating_sub(prev_height))
}

/// Initial window around `today`, clamped into `bounds`.
///
/// Returns `None` only for empty bounds.
pub fn seed_span(bounds: &Bounds, config: &GrowthConfig, today: DateKey) -> Option<DateSpan> {
    if bounds.is_empty() {
        return None;
    }
    let anchor = bounds.clamp(today);
    let available_past = bounds.min().days_until(anchor).max(0);
    let past = available_past.min(config.initial_past_days as i64);
    let start = anchor.add_days(-past).unwrap_or(bounds.min());

    let mut end = anchor
        .add_days(config.initial_future_days as i64)
        .unwrap_or(anchor);
    if let Some(max) = bounds.max() {
        end = end.min(max);
    }
    DateSpan::new(start, end)
}

/// Owns the materialized window of day rows and grows it at either edge in
/// response to scroll snapshots.
///
/// The window stays inside the bounds, stays contiguous, and only ever grows
/// unless [`Retention::Cap`] is configured.
#[derive(Debug)]
pub struct RangeController {
    bounds: Bounds,
    config: GrowthConfig,
    anchor: DateKey,
    rendered: Option<DateSpan>,
    appending: Cell<bool>,
    prepending: Cell<bool>,
    // Snapshot that triggered the previous call's growth. Seeing it again
    // right away means a queued event describing the pre-growth layout.
    // Cleared by any other snapshot and by evictions, which can restore the
    // same metrics for a genuinely new layout.
    last_trigger: Option<ScrollMetrics>,
}

impl RangeController {
    pub fn new(bounds: Bounds, config: GrowthConfig, today: DateKey) -> Self {
        if bounds.is_empty() {
            warn!(
                min = %bounds.min(),
                max = ?bounds.max().map(|d| d.to_string()),
                "lower bound is after upper bound; window stays empty"
            );
        }
        Self {
            bounds,
            config,
            anchor: bounds.clamp(today),
            rendered: None,
            appending: Cell::new(false),
            prepending: Cell::new(false),
            last_trigger: None,
        }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// "Today" clamped into the bounds
    pub fn anchor(&self) -> DateKey {
        self.anchor
    }

    /// Currently materialized dates, `None` before seeding or for empty bounds
    pub fn rendered(&self) -> Option<DateSpan> {
        self.rendered
    }

    pub fn first_rendered(&self) -> Option<DateKey> {
        self.rendered.map(|span| span.start())
    }

    pub fn last_rendered(&self) -> Option<DateKey> {
        self.rendered.map(|span| span.end())
    }

    pub fn is_appending(&self) -> bool {
        self.appending.get()
    }

    pub fn is_prepending(&self) -> bool {
        self.prepending.get()
    }

    /// Index of `date` within the window
    pub fn locate(&self, date: DateKey) -> Option<usize> {
        self.rendered?.position(date)
    }

    /// Materialize the initial window. A second call is a no-op.
    pub fn seed<S, M>(
        &mut self,
        source: &mut S,
        mount: &mut M,
    ) -> Result<Option<DateSpan>, S::Error>
    where
        S: RowSource,
        M: Mount<Row = S::Row>,
    {
        if self.rendered.is_some() {
            trace!("window already seeded");
            return Ok(None);
        }
        let Some(span) = seed_span(&self.bounds, &self.config, self.anchor) else {
            return Ok(None);
        };

        let rows = materialize(source, span)?;
        mount.append(rows);
        self.rendered = Some(span);
        debug!(first = %span.start(), last = %span.end(), rows = span.len(), "seeded window");
        Ok(Some(span))
    }

    /// Spans that [`on_scroll`](Self::on_scroll) would materialize for
    /// `metrics`, computed without touching any state.
    pub fn plan(&self, metrics: ScrollMetrics) -> GrowthPlan {
        GrowthPlan {
            append: self.append_span(&metrics),
            prepend: self.prepend_span(&metrics),
        }
    }

    /// React to a scroll event.
    ///
    /// Appends when the viewport nears the content end, prepends when it
    /// nears the start, and keeps the visible content in place across a
    /// prepend by shifting the scroll offset by the inserted height.
    /// A row factory error aborts the current direction and is returned;
    /// the in-flight flags are released either way.
    pub fn on_scroll<S, M>(
        &mut self,
        metrics: ScrollMetrics,
        source: &mut S,
        mount: &mut M,
    ) -> Result<ScrollOutcome, S::Error>
    where
        S: RowSource,
        M: Mount<Row = S::Row>,
    {
        let mut outcome = ScrollOutcome::default();
        if self.rendered.is_none() {
            return Ok(outcome);
        }
        if self.last_trigger == Some(metrics) {
            trace!(?metrics, "ignoring repeated snapshot");
            return Ok(outcome);
        }
        self.last_trigger = None;

        if let Some(span) = self.append_span(&metrics)
            && let Some(_held) = InFlight::acquire(&self.appending)
        {
            let rows = materialize(source, span)?;
            mount.append(rows);
            self.rendered = self
                .rendered
                .and_then(|window| DateSpan::new(window.start(), span.end()));
            self.last_trigger = Some(metrics);
            outcome.appended = Some(span);
            debug!(first = %span.start(), last = %span.end(), rows = span.len(), "appended days");
        }

        if outcome.appended.is_some() {
            self.trim_front(mount, metrics.scroll_top, &mut outcome);
        }

        // Rows just evicted from the front are not brought back in the same call
        if outcome.evicted_front == 0
            && let Some(span) = self.prepend_span(&metrics)
            && let Some(_held) = InFlight::acquire(&self.prepending)
        {
            let prev_height = mount.scroll_height();
            let rows = materialize(source, span)?;
            mount.prepend(rows);
            let new_height = mount.scroll_height();
            let scroll_top = anchor_offset(metrics.scroll_top, prev_height, new_height);
            mount.set_scroll_top(scroll_top);

            self.rendered = self
                .rendered
                .and_then(|window| DateSpan::new(span.start(), window.end()));
            self.last_trigger = Some(metrics);
            outcome.prepended = Some(span);
            outcome.scroll_top = Some(scroll_top);
            debug!(
                first = %span.start(),
                last = %span.end(),
                rows = span.len(),
                scroll_top,
                "prepended days"
            );
        }

        if outcome.prepended.is_some() {
            self.trim_back(mount, &mut outcome);
        }

        if outcome.evicted_front > 0 || outcome.evicted_back > 0 {
            self.last_trigger = None;
        }

        Ok(outcome)
    }

    fn append_span(&self, metrics: &ScrollMetrics) -> Option<DateSpan> {
        if self.appending.get() || self.config.append_batch == 0 {
            return None;
        }
        if metrics.distance_to_end() >= self.config.append_threshold as i64 {
            return None;
        }
        let last = self.rendered?.end();
        let start = last.succ()?;
        if !self.bounds.contains(start) {
            trace!(%last, "append skipped: upper bound reached");
            return None;
        }
        let mut end = start
            .add_days(self.config.append_batch as i64 - 1)
            .unwrap_or(start);
        if let Some(max) = self.bounds.max() {
            end = end.min(max);
        }
        DateSpan::new(start, end)
    }

    fn prepend_span(&self, metrics: &ScrollMetrics) -> Option<DateSpan> {
        if self.prepending.get() || self.config.prepend_batch == 0 {
            return None;
        }
        if metrics.scroll_top >= self.config.prepend_threshold {
            return None;
        }
        let first = self.rendered?.start();
        let end = first.pred()?;
        if end < self.bounds.min() {
            trace!(%first, "prepend skipped: lower bound reached");
            return None;
        }
        let start = end
            .add_days(-(self.config.prepend_batch as i64 - 1))
            .unwrap_or(end)
            .max(self.bounds.min());
        DateSpan::new(start, end)
    }

    /// Evict rows above the viewport after an append, pulling the scroll
    /// offset up by the removed height.
    fn trim_front<M: Mount>(&mut self, mount: &mut M, scroll_top: u32, outcome: &mut ScrollOutcome) {
        let (Some(excess), Some(window)) = (self.excess_rows(), self.rendered) else {
            return;
        };
        let removed = mount.evict_front(excess);
        let Some(first) = window.start().add_days(excess as i64) else {
            return;
        };
        self.rendered = DateSpan::new(first, window.end());

        let corrected = scroll_top.saturating_sub(removed);
        mount.set_scroll_top(corrected);
        outcome.evicted_front = excess;
        outcome.scroll_top = Some(corrected);
        debug!(rows = excess, %first, "evicted days from the front");
    }

    fn trim_back<M: Mount>(&mut self, mount: &mut M, outcome: &mut ScrollOutcome) {
        let (Some(excess), Some(window)) = (self.excess_rows(), self.rendered) else {
            return;
        };
        mount.evict_back(excess);
        let Some(last) = window.end().add_days(-(excess as i64)) else {
            return;
        };
        self.rendered = DateSpan::new(window.start(), last);
        outcome.evicted_back = excess;
        debug!(rows = excess, %last, "evicted days from the back");
    }

    fn excess_rows(&self) -> Option<usize> {
        let Retention::Cap { max_rows } = self.config.retention else {
            return None;
        };
        let len = self.rendered?.len();
        (len > max_rows).then(|| len - max_rows)
    }
}

fn materialize<S: RowSource>(
    source: &mut S,
    span: DateSpan,
) -> Result<Vec<(DateKey, S::Row)>, S::Error> {
    span.iter()
        .map(|date| source.materialize(date).map(|row| (date, row)))
        .collect()
}
