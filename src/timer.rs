use std::time::Duration;

/// Identifies one scheduled tick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: TimerHandle,
    remaining: Duration,
}

/// Single-slot deferred tick driven by explicit time advancement.
///
/// The host feeds elapsed wall time through [`TickTimer::advance`]; at most one
/// deferred tick is pending at a time and scheduling replaces it. Cancelling a
/// handle that already fired, was already cancelled or was replaced is a no-op.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a tick `after` from now, replacing any pending one.
    pub fn schedule(&mut self, after: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(Pending {
            handle,
            remaining: after,
        });
        handle
    }

    /// Cancels `handle` if it is still the pending tick.
    pub fn cancel(&mut self, handle: TimerHandle) {
        if self
            .pending
            .is_some_and(|pending| pending.handle == handle)
        {
            self.pending = None;
        }
    }

    /// Returns true while a tick is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending tick fires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.remaining)
    }

    /// Moves time forward and returns the handle that came due, if any.
    ///
    /// A due tick is removed before it is returned; leftover time past the
    /// deadline is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TimerHandle> {
        let pending = self.pending.as_mut()?;

        if elapsed < pending.remaining {
            pending.remaining -= elapsed;
            return None;
        }

        self.pending.take().map(|pending| pending.handle)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::TickTimer;

    #[test]
    fn fires_once_deadline_is_reached() {
        let mut timer = TickTimer::new();
        let handle = timer.schedule(Duration::from_millis(100));

        assert_eq!(timer.advance(Duration::from_millis(60)), None);
        assert_eq!(timer.remaining(), Some(Duration::from_millis(40)));
        assert_eq!(timer.advance(Duration::from_millis(40)), Some(handle));
        assert!(!timer.is_pending());
        assert_eq!(timer.advance(Duration::from_secs(5)), None);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut timer = TickTimer::new();
        let handle = timer.schedule(Duration::from_millis(50));

        timer.cancel(handle);
        timer.cancel(handle);

        assert!(!timer.is_pending());
        assert_eq!(timer.advance(Duration::from_secs(1)), None);
    }

    #[test]
    fn cancelling_stale_handle_keeps_newer_tick() {
        let mut timer = TickTimer::new();
        let stale = timer.schedule(Duration::from_millis(50));
        let fresh = timer.schedule(Duration::from_millis(80));

        timer.cancel(stale);

        assert!(timer.is_pending());
        assert_eq!(timer.advance(Duration::from_millis(80)), Some(fresh));
    }

    #[test]
    fn cancelling_fired_handle_is_noop() {
        let mut timer = TickTimer::new();
        let fired = timer.schedule(Duration::ZERO);
        assert_eq!(timer.advance(Duration::ZERO), Some(fired));

        let next = timer.schedule(Duration::from_millis(10));
        timer.cancel(fired);

        assert_eq!(timer.advance(Duration::from_millis(10)), Some(next));
    }
}
