//! Frame clock and timer registrations driving every animation.
//!
//! The app owns one [`Scheduler`]. Each frame it reads the elapsed time,
//! advances the simulators by the frame delta and collects the timers that
//! came due. Timers are identified by [`TimerId`] and stay registered until
//! they are cancelled or, for one-shot timers, until they fire.

/// Longest frame delta handed to simulators after a stall, in milliseconds.
const MAX_FRAME_DELTA_MS: f32 = 250.0;

/// Timing of one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTick {
    /// Milliseconds since the clock started.
    pub elapsed_ms: u64,
    /// Milliseconds since the previous frame.
    pub delta_ms: f32,
}

/// Measures per-frame deltas from a monotonic millisecond counter.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame at `elapsed_ms`. The first frame has a zero delta.
    pub fn tick(&mut self, elapsed_ms: u64) -> FrameTick {
        let delta_ms = match self.last_ms {
            Some(last) => (elapsed_ms.saturating_sub(last) as f32).min(MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_ms = Some(elapsed_ms);
        FrameTick {
            elapsed_ms,
            delta_ms,
        }
    }
}

/// Handle for a registered timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due_ms: u64,
    /// Repeat period, `None` for one-shot timers.
    period_ms: Option<u64>,
}

/// Interval and timeout registrations polled once per frame.
#[derive(Debug, Default)]
pub struct Scheduler {
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire every `period_ms`, first at `now_ms + period_ms`.
    pub fn register_interval(&mut self, period_ms: u64, now_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.push(now_ms + period_ms, Some(period_ms))
    }

    /// Fire once at `now_ms + delay_ms`.
    pub fn register_timeout(&mut self, delay_ms: u64, now_ms: u64) -> TimerId {
        self.push(now_ms + delay_ms, None)
    }

    fn push(&mut self, due_ms: u64, period_ms: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms,
            period_ms,
        });
        id
    }

    /// Remove a registration. Returns false if it was not registered.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Remove every registration.
    pub fn cancel_all(&mut self) {
        if !self.timers.is_empty() {
            tracing::debug!(count = self.timers.len(), "cancelling timers");
        }
        self.timers.clear();
    }

    pub fn is_registered(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Collect the timers due at `now_ms`, in registration order.
    ///
    /// An interval that missed several periods fires once and is rescheduled
    /// from `now_ms`. One-shot timers are removed after firing.
    pub fn poll(&mut self, now_ms: u64) -> Vec<TimerId> {
        let mut fired = Vec::new();
        self.timers.retain_mut(|timer| {
            if timer.due_ms > now_ms {
                return true;
            }
            fired.push(timer.id);
            match timer.period_ms {
                Some(period) => {
                    timer.due_ms += period;
                    if timer.due_ms <= now_ms {
                        timer.due_ms = now_ms + period;
                    }
                    true
                }
                None => false,
            }
        });
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_deltas() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(100).delta_ms, 0.0);
        assert_eq!(clock.tick(133).delta_ms, 33.0);
        assert_eq!(clock.tick(10_000).delta_ms, MAX_FRAME_DELTA_MS);
    }

    #[test]
    fn test_interval_fires_every_period() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.register_interval(1000, 0);
        assert!(scheduler.poll(999).is_empty());
        assert_eq!(scheduler.poll(1000), vec![id]);
        assert!(scheduler.poll(1500).is_empty());
        assert_eq!(scheduler.poll(2000), vec![id]);
    }

    #[test]
    fn test_missed_periods_fire_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.register_interval(100, 0);
        assert_eq!(scheduler.poll(1050), vec![id]);
        assert!(scheduler.poll(1100).is_empty());
        assert_eq!(scheduler.poll(1150), vec![id]);
    }

    #[test]
    fn test_timeout_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.register_timeout(500, 100);
        assert!(scheduler.poll(599).is_empty());
        assert_eq!(scheduler.poll(600), vec![id]);
        assert!(!scheduler.is_registered(id));
        assert!(scheduler.poll(10_000).is_empty());
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut scheduler = Scheduler::new();
        let kept = scheduler.register_interval(100, 0);
        let cancelled = scheduler.register_interval(100, 0);
        assert!(scheduler.cancel(cancelled));
        assert!(!scheduler.cancel(cancelled));
        assert_eq!(scheduler.poll(100), vec![kept]);
    }

    #[test]
    fn test_cancel_all_on_shutdown() {
        let mut scheduler = Scheduler::new();
        scheduler.register_interval(16, 0);
        scheduler.register_timeout(50, 0);
        scheduler.cancel_all();
        assert!(scheduler.is_empty());
        assert!(scheduler.poll(1_000_000).is_empty());
    }
}
