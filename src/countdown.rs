// Countdown arithmetic for the registration timer overlay.
//
// Everything here is plain millisecond math so it can be tested off-browser;
// only `now_ms` and `parse_end_date` touch the JS Date object.

use js_sys::Date;
use wasm_bindgen::JsValue;

pub const DEFAULT_END_DATE: &str = "2025-04-01T00:00:00";

pub const TICK_MS: u32 = 1_000;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Time left from `now_ms` until `target_ms` (both epoch milliseconds).
    ///
    /// A target at or before `now_ms`, or one that is not a finite number
    /// (what `Date` yields for an unparseable string), reads as all zeros.
    pub fn between(target_ms: f64, now_ms: f64) -> Self {
        let diff = target_ms - now_ms;
        if !diff.is_finite() || diff <= 0.0 {
            return Self::ZERO;
        }
        Self::from_millis(diff.floor() as u64)
    }

    pub fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    pub fn total_millis(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Display order for the overlay: largest unit first.
    pub fn units(&self) -> [(&'static str, u64); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

pub fn pad2(v: u64) -> String {
    format!("{:02}", v)
}

pub fn now_ms() -> f64 {
    Date::now()
}

// No offset in the string means local time, same as the browser's Date.
pub fn parse_end_date(iso: &str) -> Option<f64> {
    let t = Date::new(&JsValue::from_str(iso)).get_time();
    if t.is_nan() {
        None
    } else {
        Some(t)
    }
}
