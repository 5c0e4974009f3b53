use chrono::{DateTime, Utc};

/// Time source for id derivation and the undo window.
///
/// Injected everywhere a timestamp is read so the store and the undo
/// controller can be tested without real time passing.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod manual {
    use super::*;
    use std::cell::Cell;

    /// Settable clock for tests. Starts at a fixed epoch-millisecond value
    /// and only moves when advanced explicitly.
    #[derive(Debug)]
    pub struct ManualClock {
        now_ms: Cell<i64>,
    }

    impl ManualClock {
        pub fn at(epoch_ms: i64) -> Self {
            Self {
                now_ms: Cell::new(epoch_ms),
            }
        }

        pub fn advance_ms(&self, ms: i64) {
            self.now_ms.set(self.now_ms.get() + ms);
        }

        pub fn advance_secs(&self, secs: i64) {
            self.advance_ms(secs * 1000);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp_millis(self.now_ms.get())
                .expect("manual clock out of range")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualClock;
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::at(1_000);
        assert_eq!(clock.now().timestamp_millis(), 1_000);
        clock.advance_ms(500);
        assert_eq!(clock.now().timestamp_millis(), 1_500);
        clock.advance_secs(2);
        assert_eq!(clock.now().timestamp_millis(), 3_500);
    }
}
