use std::cell::Cell;

/// Scoped hold on a growth direction.
///
/// The flag is raised on acquisition and lowered on drop, so an error or
/// panic while a batch is materialized cannot leave the direction locked.
pub(crate) struct InFlight<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlight<'a> {
    /// `None` when the direction is already in flight
    pub(crate) fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
