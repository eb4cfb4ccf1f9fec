//! Clock time model - wall-clock fields and the hand angles derived from them
//!
//! Decomposes millisecond timestamps into hour/minute/second fields and
//! rebuilds timestamps by laying stored fields over a base date.

use chrono::{DateTime, Duration, NaiveTime, Offset, TimeZone, Timelike};

const MAX_HOUR: u32 = 23;
const MAX_MINUTE: u32 = 59;
const MAX_SECOND: u32 = 59;

/// Wall-clock fields shown on the face
///
/// Fields are not range-checked on construction. Out-of-range values are
/// tolerated and simply contribute no rotation to the matching hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Hour hand angle in degrees, clockwise from 12 o'clock
    ///
    /// 30° per hour plus 0.5° per minute. An invalid hour gives 0°; an invalid
    /// minute drops only the minute term.
    pub fn hour_angle(&self) -> f32 {
        if self.hour > MAX_HOUR {
            return 0.0;
        }
        let mut minutes = (self.hour % 12) * 60;
        if self.minute <= MAX_MINUTE {
            minutes += self.minute;
        }
        minutes as f32 * 0.5
    }

    /// Minute hand angle in degrees, clockwise from 12 o'clock
    pub fn minute_angle(&self) -> f32 {
        if self.minute > MAX_MINUTE {
            return 0.0;
        }
        self.minute as f32 * 6.0
    }

    /// Second hand angle in degrees, clockwise from 12 o'clock
    pub fn second_angle(&self) -> f32 {
        if self.second > MAX_SECOND {
            return 0.0;
        }
        self.second as f32 * 6.0
    }

    /// Format as "HH:MM:SS" (24-hour)
    pub fn format_time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Decompose a Unix timestamp in milliseconds into wall-clock fields in `tz`
///
/// Returns `None` when the timestamp is outside the representable range.
pub fn decompose_millis<Tz: TimeZone>(tz: &Tz, millis: i64) -> Option<ClockTime> {
    let local = tz.timestamp_millis_opt(millis).single()?;
    Some(ClockTime::new(local.hour(), local.minute(), local.second()))
}

/// Lay `time` over the calendar date of `base`
///
/// Fields are added to the base date's midnight, so out-of-range values roll
/// into the following day(s). The base's millisecond-of-second is kept.
/// Returns `None` if the result leaves the representable range.
pub fn overlay_fields<Tz: TimeZone>(base: &DateTime<Tz>, time: ClockTime) -> Option<DateTime<Tz>> {
    let local = base.naive_local();
    // Leap seconds report nanoseconds past 1e9
    let millis = (local.nanosecond() / 1_000_000) % 1_000;

    let naive = local
        .date()
        .and_time(NaiveTime::MIN)
        .checked_add_signed(Duration::hours(i64::from(time.hour)))?
        .checked_add_signed(Duration::minutes(i64::from(time.minute)))?
        .checked_add_signed(Duration::seconds(i64::from(time.second)))?
        .checked_add_signed(Duration::milliseconds(i64::from(millis)))?;

    let tz = base.timezone();
    if let Some(resolved) = tz.from_local_datetime(&naive).earliest() {
        return Some(resolved);
    }

    // Wall time skipped by a DST gap: use the offset in force before the gap,
    // which always lands the result after the transition
    let before_gap = naive.checked_sub_signed(Duration::hours(1))?;
    let offset = match tz.offset_from_local_datetime(&before_gap).earliest() {
        Some(offset) => offset.fix().local_minus_utc(),
        None => base.offset().fix().local_minus_utc(),
    };
    let utc = naive.checked_sub_signed(Duration::seconds(i64::from(offset)))?;
    Some(tz.from_utc_datetime(&utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, Utc};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    fn berlin() -> Tz {
        "Europe/Berlin".parse().unwrap()
    }

    #[test]
    fn test_three_oclock_angles() {
        let time = ClockTime::new(3, 0, 0);
        assert_eq!(time.hour_angle(), 90.0);
        assert_eq!(time.minute_angle(), 0.0);
        assert_eq!(time.second_angle(), 0.0);
    }

    #[test]
    fn test_half_past_midnight() {
        assert_eq!(ClockTime::new(0, 30, 0).hour_angle(), 15.0);
    }

    #[test]
    fn test_afternoon_hours_fold_onto_twelve() {
        assert_eq!(ClockTime::new(15, 0, 0).hour_angle(), 90.0);
        assert_eq!(ClockTime::new(23, 59, 0).hour_angle(), 359.5);
        assert_eq!(ClockTime::new(12, 0, 0).hour_angle(), 0.0);
    }

    #[test]
    fn test_out_of_range_fields_contribute_nothing() {
        let time = ClockTime::new(30, 75, 61);
        assert_eq!(time.hour_angle(), 0.0);
        assert_eq!(time.minute_angle(), 0.0);
        assert_eq!(time.second_angle(), 0.0);

        // A bad minute only drops the minute term
        assert_eq!(ClockTime::new(2, 99, 0).hour_angle(), 60.0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(ClockTime::new(7, 5, 9).format_time(), "07:05:09");
    }

    #[test]
    fn test_decompose_uses_zone() {
        // 2024-01-15T12:34:56Z is 13:34:56 in Berlin (CET)
        let millis = Utc
            .with_ymd_and_hms(2024, 1, 15, 12, 34, 56)
            .unwrap()
            .timestamp_millis();
        assert_eq!(decompose_millis(&Utc, millis), Some(ClockTime::new(12, 34, 56)));
        assert_eq!(decompose_millis(&berlin(), millis), Some(ClockTime::new(13, 34, 56)));
    }

    #[test]
    fn test_decompose_out_of_range() {
        assert_eq!(decompose_millis(&Utc, i64::MAX), None);
    }

    #[test]
    fn test_overlay_keeps_date_and_millis() {
        let base = berlin().with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
            + Duration::milliseconds(250);
        let result = overlay_fields(&base, ClockTime::new(21, 15, 30)).unwrap();
        assert_eq!((result.year(), result.month(), result.day()), (2024, 6, 1));
        assert_eq!((result.hour(), result.minute(), result.second()), (21, 15, 30));
        assert_eq!(result.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_overlay_rolls_over_out_of_range_hour() {
        let base = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let result = overlay_fields(&base, ClockTime::new(30, 0, 0)).unwrap();
        assert_eq!(result.day(), 11);
        assert_eq!(result.hour(), 6);
    }

    #[test]
    fn test_overlay_inside_dst_gap_moves_forward() {
        // Berlin skips 02:00-03:00 on 2024-03-31; 02:30 becomes 03:30 CEST
        // whether the base is before or after the transition
        let tz = berlin();
        for (hour, minute) in [(0, 30), (12, 0), (23, 59)] {
            let base = tz.with_ymd_and_hms(2024, 3, 31, hour, minute, 0).unwrap();
            let result = overlay_fields(&base, ClockTime::new(2, 30, 0)).unwrap();
            assert_eq!(result.day(), 31);
            assert_eq!(
                (result.hour(), result.minute()),
                (3, 30),
                "base {:02}:{:02}",
                hour,
                minute
            );
            assert_eq!(result.offset().fix().local_minus_utc(), 2 * 3600);
        }
    }

    #[test]
    fn test_overlay_outside_gap_on_transition_day() {
        let tz = berlin();
        let base = tz.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let early = overlay_fields(&base, ClockTime::new(1, 45, 0)).unwrap();
        let late = overlay_fields(&base, ClockTime::new(3, 15, 0)).unwrap();
        assert_eq!((early.hour(), early.minute()), (1, 45));
        assert_eq!((late.hour(), late.minute()), (3, 15));
    }

    proptest! {
        #[test]
        fn prop_hour_angle_formula(hour in 0u32..24, minute in 0u32..60) {
            let expected = (((hour % 12) * 60 + minute) as f32) * 0.5;
            prop_assert_eq!(ClockTime::new(hour, minute, 0).hour_angle(), expected);
        }

        #[test]
        fn prop_hour_angle_advances_within_hour(hour in 0u32..24, minute in 0u32..59) {
            let now = ClockTime::new(hour, minute, 0).hour_angle();
            let next = ClockTime::new(hour, minute + 1, 0).hour_angle();
            prop_assert_eq!(next - now, 0.5);
        }

        #[test]
        fn prop_hour_angle_wraps_across_hour(hour in 0u32..24) {
            let before = ClockTime::new(hour, 59, 0).hour_angle();
            let after = ClockTime::new((hour + 1) % 24, 0, 0).hour_angle();
            prop_assert_eq!((before + 0.5) % 360.0, after);
        }

        #[test]
        fn prop_minute_and_second_angles(value in 0u32..60) {
            prop_assert_eq!(ClockTime::new(0, value, 0).minute_angle(), value as f32 * 6.0);
            prop_assert_eq!(ClockTime::new(0, 0, value).second_angle(), value as f32 * 6.0);
        }

        #[test]
        fn prop_invalid_fields_never_rotate(hour in 24u32.., minute in 60u32.., second in 60u32..) {
            let time = ClockTime::new(hour, minute, second);
            prop_assert_eq!(time.hour_angle(), 0.0);
            prop_assert_eq!(time.minute_angle(), 0.0);
            prop_assert_eq!(time.second_angle(), 0.0);
        }

        #[test]
        fn prop_fields_survive_overlay(millis in 0i64..4_102_444_800_000, base in 0i64..4_102_444_800_000) {
            // Fixed offsets have no DST gaps, so every wall time exists on every date
            let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
            let time = decompose_millis(&tz, millis).unwrap();
            let base = tz.timestamp_millis_opt(base).unwrap();
            let rebuilt = overlay_fields(&base, time).unwrap();
            prop_assert_eq!(decompose_millis(&tz, rebuilt.timestamp_millis()), Some(time));
            prop_assert_eq!(rebuilt.date_naive(), base.date_naive());
        }
    }
}
