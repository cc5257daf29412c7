//! Countdown to the competition start.

use chrono::{DateTime, Utc};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeLeft {
    /// Total whole seconds represented.
    pub fn total_seconds(&self) -> u64 {
        self.days as u64 * 86_400
            + self.hours as u64 * 3_600
            + self.minutes as u64 * 60
            + self.seconds as u64
    }
}

/// Which units changed on the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipState {
    pub days: bool,
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

impl FlipState {
    pub fn any(&self) -> bool {
        self.days || self.hours || self.minutes || self.seconds
    }
}

/// Time left from `now` until `target`, or `None` once the target is reached.
pub fn time_left(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<TimeLeft> {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return None;
    }
    Some(TimeLeft {
        days: (diff / MS_PER_DAY) as u32,
        hours: ((diff / MS_PER_HOUR) % 24) as u32,
        minutes: ((diff / MS_PER_MINUTE) % 60) as u32,
        seconds: ((diff / MS_PER_SECOND) % 60) as u32,
    })
}

/// Countdown that freezes at its last value once the target passes.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Utc>,
    current: TimeLeft,
    flipping: FlipState,
    expired: bool,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self {
            target,
            current: TimeLeft::default(),
            flipping: FlipState::default(),
            expired: false,
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Recompute from `now`. Returns the units that changed.
    ///
    /// After the target passes the displayed value is left untouched and no
    /// unit flips.
    pub fn tick(&mut self, now: DateTime<Utc>) -> FlipState {
        let Some(next) = time_left(self.target, now) else {
            if !self.expired {
                tracing::info!(target = %self.target, "countdown reached its target");
                self.expired = true;
            }
            self.flipping = FlipState::default();
            return self.flipping;
        };

        self.flipping = FlipState {
            days: next.days != self.current.days,
            hours: next.hours != self.current.hours,
            minutes: next.minutes != self.current.minutes,
            seconds: next.seconds != self.current.seconds,
        };
        self.current = next;
        self.flipping
    }

    pub fn current(&self) -> TimeLeft {
        self.current
    }

    pub fn flipping(&self) -> FlipState {
        self.flipping
    }

    /// Clear the flip highlight once its animation has finished.
    pub fn settle(&mut self) {
        self.flipping = FlipState::default();
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_left_units() {
        let now = target() - Duration::milliseconds(((2 * 86_400 + 3 * 3_600 + 4 * 60 + 5) * 1000) + 999);
        let left = time_left(target(), now).unwrap();
        assert_eq!(
            left,
            TimeLeft {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_total_seconds_matches_truncated_difference() {
        for diff_ms in [1_i64, 999, 1_000, 59_999, 3_600_000, 86_399_999, 1_234_567_890] {
            let now = target() - Duration::milliseconds(diff_ms);
            let left = time_left(target(), now).unwrap();
            assert_eq!(left.total_seconds(), (diff_ms / 1000) as u64, "diff {diff_ms}");
        }
    }

    #[test]
    fn test_time_left_none_at_or_after_target() {
        assert!(time_left(target(), target()).is_none());
        assert!(time_left(target(), target() + Duration::seconds(5)).is_none());
    }

    #[test]
    fn test_countdown_freezes_after_target() {
        let mut countdown = Countdown::new(target());
        countdown.tick(target() - Duration::seconds(2));
        let frozen = countdown.current();
        assert_eq!(frozen.seconds, 2);

        let flips = countdown.tick(target() + Duration::seconds(10));
        assert!(!flips.any());
        assert_eq!(countdown.current(), frozen);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_countdown_started_after_target_shows_zeros() {
        let mut countdown = Countdown::new(target());
        countdown.tick(target() + Duration::days(400));
        assert_eq!(countdown.current(), TimeLeft::default());
    }

    #[test]
    fn test_flip_flags_follow_changed_units() {
        let mut countdown = Countdown::new(target());
        countdown.tick(target() - Duration::seconds(61));
        let flips = countdown.tick(target() - Duration::seconds(60));
        assert!(flips.seconds);
        assert!(!flips.minutes);
        assert!(!flips.days);

        countdown.settle();
        assert!(!countdown.flipping().any());
    }
}
