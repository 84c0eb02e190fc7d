//! Source of "now" for the timing snapshot.

use chrono::{DateTime, FixedOffset, Local};

/// Supplies the current instant together with the local UTC offset.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let instant = DateTime::parse_from_rfc3339("2025-08-18T14:30:15+02:00").unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
        assert_eq!((&clock).now(), instant);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_clocks_are_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SystemClock>();
        assert_impl::<FixedClock>();
    }
}
