//! Prayer schedule models and next-prayer selection

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimingsError;

/// Wall-clock format used for every time we hand back to callers
pub const TIME_FORMAT: &str = "%H:%M";

/// The five daily prayers, in the order they occur
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// Candidates for "next prayer", earliest first. Sunrise is not a prayer.
    pub const ORDER: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }

    /// Position within the day, 0 for Fajr through 4 for Isha
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timings exactly as a provider reports them, e.g. `"05:12 (+03)"`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct RawTimings {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// One day of normalized prayer times for a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTimings {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
    pub timezone: Tz,
}

/// The nearest upcoming prayer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub time: NaiveTime,
}

/// Response body of `GET /getPrayerTimes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimesResponse {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub next_prayer: Prayer,
    pub next_prayer_time: String,
}

/// Strip any trailing annotation (`"05:12 (+03)"` -> `05:12`) and parse `HH:MM`
pub fn normalize_time(prayer: &'static str, raw: &str) -> Result<NaiveTime, TimingsError> {
    let token = raw.split_whitespace().next().unwrap_or_default();
    NaiveTime::parse_from_str(token, TIME_FORMAT).map_err(|_| TimingsError::InvalidTime {
        prayer,
        value: raw.to_string(),
    })
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

impl DailyTimings {
    /// Normalize a provider's raw timings and IANA timezone name
    pub fn from_raw(raw: &RawTimings, timezone: &str) -> Result<Self, TimingsError> {
        let timezone: Tz = timezone
            .parse()
            .map_err(|_| TimingsError::UnknownTimezone(timezone.to_string()))?;

        Ok(Self {
            fajr: normalize_time("Fajr", &raw.fajr)?,
            sunrise: normalize_time("Sunrise", &raw.sunrise)?,
            dhuhr: normalize_time("Dhuhr", &raw.dhuhr)?,
            asr: normalize_time("Asr", &raw.asr)?,
            maghrib: normalize_time("Maghrib", &raw.maghrib)?,
            isha: normalize_time("Isha", &raw.isha)?,
            timezone,
        })
    }

    pub fn time_of(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// First prayer strictly after `now`, placed on today's date in the
    /// location's timezone. Wraps to Fajr once Isha has passed.
    pub fn next_prayer(&self, now: DateTime<Utc>) -> NextPrayer {
        let local_now = now.with_timezone(&self.timezone);
        let today = local_now.date_naive();

        Prayer::ORDER
            .iter()
            .map(|&prayer| NextPrayer {
                prayer,
                time: self.time_of(prayer),
            })
            .find(|candidate| localize(self.timezone, today.and_time(candidate.time)) > local_now)
            .unwrap_or(NextPrayer {
                prayer: Prayer::Fajr,
                time: self.fajr,
            })
    }

    /// Full schedule plus the next prayer relative to `now`
    pub fn schedule(&self, now: DateTime<Utc>) -> PrayerTimesResponse {
        let next = self.next_prayer(now);

        PrayerTimesResponse {
            fajr: format_time(self.fajr),
            sunrise: format_time(self.sunrise),
            dhuhr: format_time(self.dhuhr),
            asr: format_time(self.asr),
            maghrib: format_time(self.maghrib),
            isha: format_time(self.isha),
            next_prayer: next.prayer,
            next_prayer_time: format_time(next.time),
        }
    }
}

/// Resolve a wall-clock time in `tz`. Ambiguous times take the earlier
/// instant; times skipped by a DST gap move forward one hour.
fn localize(tz: Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(at) => at,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}
