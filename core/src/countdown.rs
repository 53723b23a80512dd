//! Countdown to the annual target instant.
//!
//! Every call re-derives the state from absolute timestamps, so repeated
//! ticks never accumulate drift. All date arithmetic happens in the zone
//! of `now`; there is no UTC normalization.

use crate::{config::EventConfig, target::TargetDate};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CELEBRATION_MESSAGE: &str = "Happy Birthday! 🎉🎂";
pub const DEFAULT_COUNTDOWN_LABEL: &str = "Birthday";

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// What the home screen should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    pub display_text:       String,
    pub is_target_day:      bool,
    pub celebration_active: bool,
}

impl CountdownState {
    /// Fireworks and the start button are shown only once the target
    /// instant has been reached on the target day itself.
    pub fn start_unlocked(&self) -> bool {
        self.is_target_day && self.celebration_active
    }
}

/// Remaining time split into whole units, each floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days:    i64,
    pub hours:   i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_millis(ms: i64) -> Self {
        Self {
            days:    ms / MS_PER_DAY,
            hours:   (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// `"Nd Hh Mm Ss"`, with the day part dropped entirely when zero.
    pub fn format(&self) -> String {
        let hms = self.format_hms();
        if self.days > 0 {
            format!("{}d {hms}", self.days)
        } else {
            hms
        }
    }

    pub fn format_hms(&self) -> String {
        format!("{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

/// Compute the countdown state with the default messages.
pub fn compute_countdown<Tz: TimeZone>(now: &DateTime<Tz>, target: &TargetDate) -> CountdownState {
    countdown_state(now, target, DEFAULT_CELEBRATION_MESSAGE, DEFAULT_COUNTDOWN_LABEL)
}

/// Compute the countdown state using the messages from `config`.
pub fn compute_countdown_with<Tz: TimeZone>(now: &DateTime<Tz>, config: &EventConfig) -> CountdownState {
    countdown_state(now, &config.target, &config.celebration_message, &config.countdown_label)
}

fn countdown_state<Tz: TimeZone>(
    now: &DateTime<Tz>,
    target: &TargetDate,
    celebration_message: &str,
    countdown_label: &str,
) -> CountdownState {
    let tz = now.timezone();
    let this_year = target.in_year(now.year(), &tz);
    let next_year = target.in_year(now.year() + 1, &tz);

    let event_passed = *now >= this_year;
    let effective = if event_passed { next_year } else { this_year };
    let remaining_ms = effective.signed_duration_since(now.clone()).num_milliseconds();

    // Today's calendar date, regardless of which year we are counting to.
    let is_target_day = target.matches_day(now);

    if is_target_day && event_passed {
        CountdownState {
            display_text:       celebration_message.to_string(),
            is_target_day:      true,
            celebration_active: true,
        }
    } else if remaining_ms > 0 {
        let remaining = Remaining::from_millis(remaining_ms);
        let display_text = if is_target_day {
            format!(
                "Time until {:02}:{:02}: {}",
                target.hour(),
                target.minute(),
                remaining.format_hms()
            )
        } else {
            format!("{countdown_label}: {}", remaining.format())
        };
        CountdownState {
            display_text,
            is_target_day,
            celebration_active: false,
        }
    } else {
        CountdownState {
            display_text:       String::new(),
            is_target_day:      false,
            celebration_active: false,
        }
    }
}

/// `"Current Time: HH:MM:SS"` in the zone of `now`.
pub fn clock_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!(
        "Current Time: {:02}:{:02}:{:02}",
        now.hour(),
        now.minute(),
        now.second()
    )
}
