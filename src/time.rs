//! Time conversions for sun and moon calculations.
//!
//! Everything downstream works on a continuous count of days, so this module maps
//! absolute instants (Unix milliseconds or chrono `DateTime`s) to Julian dates and
//! back. Conversions are plain UTC arithmetic; no ΔT or leap-second handling is
//! applied, which is well below the accuracy of the series used elsewhere.

#![allow(clippy::unreadable_literal)]

use crate::math::{abs, floor, round};
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Duration, NaiveTime, Offset, TimeZone, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Milliseconds per day (86,400,000)
pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day Number of the Unix epoch (1970-01-01 00:00:00 UTC is JD 2440587.5)
pub(crate) const J1970: f64 = 2_440_588.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub(crate) const J2000: f64 = 2_451_545.0;

/// Julian date: days since noon UTC, 1 January 4713 BC.
///
/// # Example
/// ```
/// # use suncalc::time::JulianDate;
/// let jd = JulianDate::from_unix_millis(1_362_441_600_000); // 2013-03-05T00:00:00Z
/// assert_eq!(jd.julian_date(), 2_456_356.5);
/// assert_eq!(jd.to_unix_millis(), Some(1_362_441_600_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Creates a Julian date from a raw day count.
    #[must_use]
    pub const fn new(julian_date: f64) -> Self {
        Self(julian_date)
    }

    /// Creates a Julian date from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis as f64 / MILLIS_PER_DAY - 0.5 + J1970)
    }

    /// Creates a Julian date from a day offset relative to J2000.0.
    #[must_use]
    pub const fn from_days_since_j2000(days: f64) -> Self {
        Self(days + J2000)
    }

    /// Creates a Julian date from a timezone-aware chrono `DateTime`.
    ///
    /// Precision is one millisecond; sub-millisecond parts are dropped.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::from_unix_millis(datetime.timestamp_millis())
    }

    /// Creates a Julian date from year, month, day, hour, minute, and second in UTC.
    ///
    /// # Errors
    /// Returns error if any date/time component is outside valid ranges (month 1-12, day 1-31, hour 0-23, minute 0-59, second 0-59.999).
    ///
    /// # Example
    /// ```
    /// # use suncalc::time::JulianDate;
    /// let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
    /// assert_eq!(jd.julian_date(), 2_456_356.5);
    /// ```
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_datetime("month must be between 1 and 12"));
        }
        if !(1..=31).contains(&day) {
            return Err(Error::invalid_datetime("day must be between 1 and 31"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_datetime(
                "second must be between 0 and 59.999...",
            ));
        }

        if day > days_in_month(year, month, day)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }

        Ok(Self(calculate_julian_date(
            year, month, day, hour, minute, second,
        )))
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch (negative before it).
    #[must_use]
    pub const fn days_since_j2000(&self) -> f64 {
        self.0 - J2000
    }

    /// Returns this date shifted by a (possibly fractional, possibly negative) number of days.
    #[must_use]
    pub const fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Returns this date shifted by a number of hours.
    #[must_use]
    pub const fn add_hours(self, hours: f64) -> Self {
        Self(self.0 + hours / 24.0)
    }

    /// Converts back to milliseconds since the Unix epoch, rounded to the nearest millisecond.
    ///
    /// Returns `None` when the date is not finite or does not fit in an `i64`.
    #[must_use]
    pub fn to_unix_millis(&self) -> Option<i64> {
        let millis = round((self.0 + 0.5 - J1970) * MILLIS_PER_DAY);
        if !millis.is_finite() || abs(millis) >= 9.2e18 {
            return None;
        }
        Some(millis as i64)
    }

    /// Converts to a UTC chrono `DateTime`.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` when the date is NaN/infinite or outside chrono's range.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        self.to_unix_millis()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or(Error::invalid_datetime(
                "Julian date is not representable as a date/time",
            ))
    }

    /// Converts to a chrono `DateTime` in the given time zone.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` when the date is NaN/infinite or outside chrono's range.
    #[cfg(feature = "chrono")]
    pub fn to_datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Tz>> {
        Ok(self.to_datetime()?.with_timezone(tz))
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(f64::deserialize(deserializer)?))
    }
}

/// First instant of the calendar day of `datetime`, in its own time zone.
///
/// Normally local midnight. Where a zone transition skips midnight, the day starts at
/// the end of the gap: midnight is mapped to UTC with the offset in force before the
/// transition.
#[cfg(feature = "chrono")]
#[must_use]
pub fn start_of_day<Tz: TimeZone>(datetime: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = datetime.timezone();
    let midnight = datetime.date_naive().and_time(NaiveTime::MIN);
    if let Some(start) = tz.from_local_datetime(&midnight).earliest() {
        return start;
    }

    let before = tz.offset_from_utc_datetime(&(midnight - Duration::days(1))).fix();
    let utc = midnight - Duration::seconds(i64::from(before.local_minus_utc()));
    tz.from_utc_datetime(&utc)
}

/// Calculates Julian Date from UTC date/time components.
///
/// Meeus, "Astronomical Algorithms", 2nd edition, chapter 7.
fn calculate_julian_date(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    let mut y = year;
    let mut m = month as i32;

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd =
        floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + d - 1524.5;

    // Gregorian calendar correction (JDN 2299161 is 1582-10-15)
    if jd >= 2_299_161.0 {
        let a = floor(f64::from(y) / 100.0);
        let b = 2.0 - a + floor(a / 4.0);
        jd += b;
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year, is_gregorian) {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month already validated"),
    };
    Ok(days)
}
