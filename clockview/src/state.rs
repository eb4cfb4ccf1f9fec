//! Clock state holder - current wall-clock fields plus the redraw request
//!
//! Every mutation raises the redraw request; the host consumes it with
//! [`ClockState::take_redraw`] on its update path.

use chrono::{Local, TimeZone, Utc};

use crate::clock_time::{decompose_millis, overlay_fields, ClockTime};

/// Shown until the first successful decomposition
const FALLBACK_TIME: ClockTime = ClockTime::new(3, 0, 0);

#[derive(Debug, Clone)]
pub struct ClockState<Tz: TimeZone = Local> {
    tz: Tz,
    time: ClockTime,
    redraw_requested: bool,
}

impl ClockState<Local> {
    /// State in the machine's local time zone, seeded with the current time
    pub fn new() -> Self {
        Self::with_timezone(Local)
    }
}

impl Default for ClockState<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> ClockState<Tz> {
    /// State in `tz`, seeded with the current time
    pub fn with_timezone(tz: Tz) -> Self {
        Self::at(tz, Utc::now().timestamp_millis())
    }

    /// State in `tz`, seeded from a Unix timestamp in milliseconds
    pub fn at(tz: Tz, millis: i64) -> Self {
        let time = decompose_millis(&tz, millis).unwrap_or(FALLBACK_TIME);
        Self {
            tz,
            time,
            redraw_requested: true,
        }
    }

    pub fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Decompose a Unix timestamp (ms) into local fields and store them
    ///
    /// Timestamps outside the representable range are ignored.
    pub fn set_time_millis(&mut self, millis: i64) {
        match decompose_millis(&self.tz, millis) {
            Some(time) => {
                self.time = time;
                self.request_redraw();
            }
            None => log::warn!("Ignoring unrepresentable timestamp {}", millis),
        }
    }

    /// Store hour and minute directly, resetting seconds to zero
    pub fn set_time_hm(&mut self, hour: u32, minute: u32) {
        self.set_time_hms(hour, minute, 0);
    }

    /// Store all three fields directly
    ///
    /// Values are not range-checked; out-of-range fields simply add no
    /// rotation to their hand.
    pub fn set_time_hms(&mut self, hour: u32, minute: u32, second: u32) {
        self.time = ClockTime::new(hour, minute, second);
        self.request_redraw();
    }

    /// Today's date combined with the stored fields, as a Unix timestamp (ms)
    ///
    /// Only the wall-clock fields survive a `set_time_millis` / `time_millis`
    /// round trip; the date is always today's.
    pub fn time_millis(&self) -> i64 {
        self.attach_time(Utc::now().timestamp_millis())
    }

    /// The stored fields laid over the date of `base_millis`
    ///
    /// Returns `base_millis` unchanged if the result cannot be represented.
    pub fn attach_time(&self, base_millis: i64) -> i64 {
        let attached = self
            .tz
            .timestamp_millis_opt(base_millis)
            .single()
            .and_then(|base| overlay_fields(&base, self.time));
        match attached {
            Some(datetime) => datetime.timestamp_millis(),
            None => {
                log::warn!(
                    "Cannot attach {} to timestamp {}",
                    self.time.format_time(),
                    base_millis
                );
                base_millis
            }
        }
    }

    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending redraw request, if any
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
