//! A calculator bound to one instant.
//!
//! [`SunCalc`] bundles a date/time with a twilight table so the sun and moon
//! queries for that instant can be made without repeating either. Twilight angles
//! added to a calculator belong to that calculator only.

use crate::twilight::TwilightAngles;
use crate::types::{MoonIllumination, MoonPosition, MoonTimes, SolarTimes, SunPosition};
use crate::{Result, moon, sun};
use alloc::borrow::Cow;
use chrono::{DateTime, TimeZone};

/// Sun and moon calculations for a single date/time.
///
/// # Example
/// ```rust
/// use suncalc::{SunCalc, twilight};
/// use chrono::{DateTime, Utc};
///
/// let date = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let calc = SunCalc::new(date).with_twilight_angle(-4.0, "blueHourEnd", "blueHour");
///
/// let times = calc.solar_times(50.5, 30.5, 0.0).unwrap();
/// assert_eq!(
///     times.get(twilight::SOLAR_NOON).unwrap().format("%H:%M:%S").to_string(),
///     "10:10:57"
/// );
/// assert!(times.get("blueHour").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SunCalc<Tz: TimeZone> {
    datetime: DateTime<Tz>,
    angles: TwilightAngles,
}

impl<Tz: TimeZone> SunCalc<Tz> {
    /// Creates a calculator for `datetime` with the standard twilight table.
    #[must_use]
    pub fn new(datetime: DateTime<Tz>) -> Self {
        Self::with_twilight_angles(datetime, TwilightAngles::standard())
    }

    /// Creates a calculator for `datetime` with a custom twilight table.
    #[must_use]
    pub const fn with_twilight_angles(datetime: DateTime<Tz>, angles: TwilightAngles) -> Self {
        Self { datetime, angles }
    }

    /// Gets the instant this calculator is bound to.
    #[must_use]
    pub const fn datetime(&self) -> &DateTime<Tz> {
        &self.datetime
    }

    /// Gets the twilight table used by [`Self::solar_times`].
    #[must_use]
    pub const fn twilight_angles(&self) -> &TwilightAngles {
        &self.angles
    }

    /// Registers an extra twilight angle (degrees) for later [`Self::solar_times`] calls.
    pub fn add_twilight_angle(
        &mut self,
        angle: f64,
        morning_label: impl Into<Cow<'static, str>>,
        evening_label: impl Into<Cow<'static, str>>,
    ) {
        self.angles.add(angle, morning_label, evening_label);
    }

    /// Returns the calculator with an extra twilight angle registered.
    #[must_use]
    pub fn with_twilight_angle(
        mut self,
        angle: f64,
        morning_label: impl Into<Cow<'static, str>>,
        evening_label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add_twilight_angle(angle, morning_label, evening_label);
        self
    }

    /// Sun position for an observer at `latitude`/`longitude` (degrees).
    ///
    /// # Errors
    /// Returns error for invalid coordinates
    pub fn solar_position(&self, latitude: f64, longitude: f64) -> Result<SunPosition> {
        sun::solar_position(&self.datetime, latitude, longitude)
    }

    /// Solar noon, nadir and twilight crossings for an observer `height` meters up.
    ///
    /// # Errors
    /// Returns error for invalid coordinates or height
    pub fn solar_times(
        &self,
        latitude: f64,
        longitude: f64,
        height: f64,
    ) -> Result<SolarTimes<DateTime<Tz>>> {
        sun::solar_times(&self.datetime, latitude, longitude, height, &self.angles)
    }

    /// Moon position for an observer.
    ///
    /// # Errors
    /// Returns error for invalid coordinates
    pub fn moon_position(&self, latitude: f64, longitude: f64) -> Result<MoonPosition> {
        moon::moon_position(&self.datetime, latitude, longitude)
    }

    /// Moon illumination.
    #[must_use]
    pub fn moon_illumination(&self) -> MoonIllumination {
        moon::moon_illumination(&self.datetime)
    }

    /// Moonrise and moonset for the calendar day in the calculator's time zone.
    ///
    /// # Errors
    /// Returns error for invalid coordinates
    pub fn moon_times(&self, latitude: f64, longitude: f64) -> Result<MoonTimes<DateTime<Tz>>> {
        moon::moon_times(&self.datetime, latitude, longitude)
    }

    /// Moonrise and moonset for the UTC calendar day.
    ///
    /// # Errors
    /// Returns error for invalid coordinates
    pub fn moon_times_utc(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<MoonTimes<DateTime<Tz>>> {
        moon::moon_times_utc(&self.datetime, latitude, longitude)
    }
}
