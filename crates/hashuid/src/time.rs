use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Number of milliseconds in one UTC day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests.
///
/// # Example
///
/// ```
/// use hashuid::TimeSource;
/// use std::time::{Duration, SystemTime, UNIX_EPOCH};
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn now(&self) -> SystemTime {
///         UNIX_EPOCH + Duration::from_millis(1234)
///     }
/// }
///
/// assert_eq!(hashuid::time_of_day(FixedTime.now()), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current point in time.
    fn now(&self) -> SystemTime;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Returns the millisecond within the UTC day of `time`, in
/// `0..MILLIS_PER_DAY`.
///
/// Times before the Unix epoch wrap into the previous day, so the result is
/// never negative.
#[must_use]
pub fn time_of_day(time: SystemTime) -> i64 {
    let millis = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => millis_of(after),
        Err(before) => -millis_of(before.duration()),
    };
    millis.rem_euclid(MILLIS_PER_DAY)
}

fn millis_of(d: Duration) -> i64 {
    // Only the remainder within a day matters, so reduce before narrowing.
    (d.as_millis() % MILLIS_PER_DAY as u128) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(millis)
    }

    #[test]
    fn time_of_day_strips_whole_days() {
        assert_eq!(time_of_day(at(0)), 0);
        assert_eq!(time_of_day(at(123_412_341)), 123_412_341 - MILLIS_PER_DAY);
        assert_eq!(time_of_day(at(3 * MILLIS_PER_DAY as u64 + 42)), 42);
    }

    #[test]
    fn time_of_day_before_epoch_is_non_negative() {
        let before = UNIX_EPOCH - Duration::from_millis(1);
        assert_eq!(time_of_day(before), MILLIS_PER_DAY - 1);
    }

    #[test]
    fn system_clock_is_within_a_day() {
        let t = time_of_day(SystemClock.now());
        assert!((0..MILLIS_PER_DAY).contains(&t));
    }
}
