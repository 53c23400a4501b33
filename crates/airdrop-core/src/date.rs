//! Date utilities shared by the resolver, the headline and the countdown.

use chrono::{DateTime, Utc};

/// Display format for window dates, e.g. `17 Mar 2026, 14:00 UTC`.
const STANDARD_FORMAT: &str = "%d %b %Y, %H:%M UTC";

/// Returns whether `now` lies within `[start, end]`, both ends inclusive.
pub fn check_date_is_between(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    start <= now && now <= end
}

/// Formats a date the way the registration headline shows it.
pub fn format_standard_date(date: DateTime<Utc>) -> String {
    date.format(STANDARD_FORMAT).to_string()
}

/// Time remaining until a target, split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Computes the countdown to `end`, clamped at zero once `end` has passed.
    pub fn until(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total = (end - now).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `(value, unit label)` pairs in display order.
    pub fn segments(&self) -> [(i64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 17, h, m, 0).unwrap()
    }

    #[test]
    fn test_between_is_inclusive() {
        let start = at(10, 0);
        let end = at(12, 0);
        assert!(check_date_is_between(start, end, start));
        assert!(check_date_is_between(start, end, end));
        assert!(check_date_is_between(start, end, at(11, 0)));
        assert!(!check_date_is_between(start, end, at(9, 59)));
        assert!(!check_date_is_between(start, end, at(12, 1)));
    }

    #[test]
    fn test_inverted_interval_never_matches() {
        assert!(!check_date_is_between(at(12, 0), at(10, 0), at(11, 0)));
    }

    #[test]
    fn test_standard_format() {
        assert_eq!(format_standard_date(at(14, 5)), "17 Mar 2026, 14:05 UTC");
    }

    #[test]
    fn test_countdown_split() {
        let now = at(0, 0);
        let end = now + Duration::days(2) + Duration::hours(3) + Duration::minutes(4) + Duration::seconds(5);
        let countdown = Countdown::until(end, now);
        assert_eq!(
            countdown,
            Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
        assert!(!countdown.is_elapsed());
    }

    #[test]
    fn test_countdown_clamps_after_end() {
        let countdown = Countdown::until(at(10, 0), at(11, 0));
        assert!(countdown.is_elapsed());
        assert_eq!(countdown.segments()[0], (0, "Days"));
    }
}
