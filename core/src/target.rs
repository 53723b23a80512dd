//! The annual target instant the countdown counts toward.

use crate::error::{SurpriseError, SurpriseResult};
use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, Offset, TimeZone};
use serde::{Deserialize, Serialize};

/// Days per month in a leap year; Feb 29 is a legal target.
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A fixed (month, day, hour, minute) that recurs every year.
/// `month` is 1-based (9 = September).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTargetDate", into = "RawTargetDate")]
pub struct TargetDate {
    month:  u32,
    day:    u32,
    hour:   u32,
    minute: u32,
}

#[derive(Serialize, Deserialize)]
struct RawTargetDate {
    month:  u32,
    day:    u32,
    #[serde(default)]
    hour:   u32,
    #[serde(default)]
    minute: u32,
}

impl TryFrom<RawTargetDate> for TargetDate {
    type Error = SurpriseError;

    fn try_from(raw: RawTargetDate) -> SurpriseResult<Self> {
        TargetDate::new(raw.month, raw.day, raw.hour, raw.minute)
    }
}

impl From<TargetDate> for RawTargetDate {
    fn from(t: TargetDate) -> Self {
        Self { month: t.month, day: t.day, hour: t.hour, minute: t.minute }
    }
}

impl TargetDate {
    pub fn new(month: u32, day: u32, hour: u32, minute: u32) -> SurpriseResult<Self> {
        let valid = (1..=12).contains(&month)
            && day >= 1
            && day <= MAX_DAYS[(month.clamp(1, 12) - 1) as usize]
            && hour < 24
            && minute < 60;
        if !valid {
            return Err(SurpriseError::InvalidTargetDate { month, day, hour, minute });
        }
        Ok(Self { month, day, hour, minute })
    }

    /// For hosts that count months from 0 (8 = September).
    pub fn from_zero_based_month(month0: u32, day: u32, hour: u32, minute: u32) -> SurpriseResult<Self> {
        TargetDate::new(month0.saturating_add(1), day, hour, minute)
    }

    pub fn month(&self) -> u32  { self.month }
    pub fn day(&self) -> u32    { self.day }
    pub fn hour(&self) -> u32   { self.hour }
    pub fn minute(&self) -> u32 { self.minute }

    /// True when `date` falls on this target's month and day, any year.
    pub fn matches_day<D: Datelike>(&self, date: &D) -> bool {
        date.month() == self.month && date.day() == self.day
    }

    /// The target instant in `year`, in the given zone.
    ///
    /// Never fails: Feb 29 in a common year rolls to Mar 1, a local time
    /// skipped by a DST jump shifts forward by the length of the gap, and a repeated
    /// local time resolves to the earlier instant.
    pub fn in_year<Tz: TimeZone>(&self, year: i32, tz: &Tz) -> DateTime<Tz> {
        let date = NaiveDate::from_ymd_opt(year, self.month, self.day).unwrap_or_else(|| {
            // Only Feb 29 can be missing once the target is validated.
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or_default()
        });
        let naive = date.and_hms_opt(self.hour, self.minute, 0).unwrap_or_default();

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(t) => t,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                // Read the wall time with the offset in force before the jump,
                // which lands it `gap` later in the new offset.
                let before = tz
                    .offset_from_utc_datetime(&(naive - Duration::hours(12)))
                    .fix()
                    .local_minus_utc();
                tz.from_utc_datetime(&(naive - Duration::seconds(i64::from(before))))
            }
        }
    }
}

impl Default for TargetDate {
    /// September 21, midnight.
    fn default() -> Self {
        Self { month: 9, day: 21, hour: 0, minute: 0 }
    }
}
