//! Core data types for sun and moon calculations.

use crate::math::{floor, normalize_degrees_0_to_360, radians_to_degrees};
use crate::twilight::{NADIR, SOLAR_NOON, SUNRISE, SUNSET};
use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Position of the sun in the observer's sky.
///
/// Angles are in radians. Azimuth follows the convention of the underlying formulas:
/// 0 is due south, positive towards west (so -π/2 is east and ±π is north).
/// Use [`SunPosition::compass_azimuth`] for the usual north-clockwise bearing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunPosition {
    azimuth: f64,
    altitude: f64,
}

impl SunPosition {
    /// Creates a sun position from azimuth and altitude in radians.
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64) -> Self {
        Self { azimuth, altitude }
    }

    /// Gets the azimuth in radians (0 = south, positive towards west).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the altitude above the horizon in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the altitude above the horizon in degrees.
    #[must_use]
    pub const fn altitude_degrees(&self) -> f64 {
        radians_to_degrees(self.altitude)
    }

    /// Gets the compass bearing in degrees (0° = north, 90° = east, increasing clockwise).
    #[must_use]
    pub fn compass_azimuth(&self) -> f64 {
        compass_bearing(self.azimuth)
    }

    /// Checks if the sun's center is geometrically above the horizon.
    #[must_use]
    pub const fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Position of the moon in the observer's sky.
///
/// Same angle conventions as [`SunPosition`]. The altitude includes atmospheric
/// refraction; azimuth and parallactic angle do not.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPosition {
    azimuth: f64,
    altitude: f64,
    distance: f64,
    parallactic_angle: f64,
}

impl MoonPosition {
    /// Creates a moon position. Angles in radians, distance in kilometers.
    #[must_use]
    pub const fn new(azimuth: f64, altitude: f64, distance: f64, parallactic_angle: f64) -> Self {
        Self {
            azimuth,
            altitude,
            distance,
            parallactic_angle,
        }
    }

    /// Gets the azimuth in radians (0 = south, positive towards west).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the refraction-corrected altitude in radians.
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Gets the geocentric distance in kilometers.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the parallactic angle in radians.
    #[must_use]
    pub const fn parallactic_angle(&self) -> f64 {
        self.parallactic_angle
    }

    /// Gets the compass bearing in degrees (0° = north, 90° = east, increasing clockwise).
    #[must_use]
    pub fn compass_azimuth(&self) -> f64 {
        compass_bearing(self.azimuth)
    }

    /// Checks if the moon's center appears above the horizon.
    #[must_use]
    pub const fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

fn compass_bearing(south_based_azimuth: f64) -> f64 {
    normalize_degrees_0_to_360(radians_to_degrees(south_based_azimuth) + 180.0)
}

/// Illuminated part of the moon's disk.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonIllumination {
    fraction: f64,
    phase: f64,
    angle: f64,
}

impl MoonIllumination {
    /// Creates an illumination record.
    #[must_use]
    pub const fn new(fraction: f64, phase: f64, angle: f64) -> Self {
        Self {
            fraction,
            phase,
            angle,
        }
    }

    /// Illuminated fraction of the disk, from 0.0 (new moon) to 1.0 (full moon).
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Position in the lunation: 0.0 new moon, 0.25 first quarter, 0.5 full moon,
    /// 0.75 last quarter, back to 1.0 at the next new moon.
    #[must_use]
    pub const fn phase(&self) -> f64 {
        self.phase
    }

    /// Position angle of the bright limb's midpoint in radians, measured eastward from
    /// the north point of the disk. Negative while waxing, positive while waning.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Checks if the illuminated part is growing.
    #[must_use]
    pub const fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }

    /// Names the phase using eight equal bins centered on the principal phases.
    #[must_use]
    pub fn phase_name(&self) -> MoonPhase {
        MoonPhase::from_phase(self.phase)
    }
}

/// Conventional names of the moon's phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    /// Phase around 0.0 / 1.0
    NewMoon,
    /// Between new moon and first quarter
    WaxingCrescent,
    /// Phase around 0.25
    FirstQuarter,
    /// Between first quarter and full moon
    WaxingGibbous,
    /// Phase around 0.5
    FullMoon,
    /// Between full moon and last quarter
    WaningGibbous,
    /// Phase around 0.75
    LastQuarter,
    /// Between last quarter and new moon
    WaningCrescent,
}

impl MoonPhase {
    /// Classifies a phase value in `[0, 1]`. Values outside wrap around.
    #[must_use]
    pub fn from_phase(phase: f64) -> Self {
        let eighths = floor(phase * 8.0 + 0.5);
        match (eighths as i64).rem_euclid(8) {
            1 => Self::WaxingCrescent,
            2 => Self::FirstQuarter,
            3 => Self::WaxingGibbous,
            4 => Self::FullMoon,
            5 => Self::WaningGibbous,
            6 => Self::LastQuarter,
            7 => Self::WaningCrescent,
            _ => Self::NewMoon,
        }
    }
}

/// Morning and evening crossing of one twilight angle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarPhase<T> {
    angle: f64,
    morning_label: Cow<'static, str>,
    evening_label: Cow<'static, str>,
    morning: Option<T>,
    evening: Option<T>,
}

impl<T> SolarPhase<T> {
    pub(crate) const fn new(
        angle: f64,
        morning_label: Cow<'static, str>,
        evening_label: Cow<'static, str>,
        morning: Option<T>,
        evening: Option<T>,
    ) -> Self {
        Self {
            angle,
            morning_label,
            evening_label,
            morning,
            evening,
        }
    }

    /// Solar elevation of this phase in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Label of the morning crossing.
    #[must_use]
    pub fn morning_label(&self) -> &str {
        &self.morning_label
    }

    /// Label of the evening crossing.
    #[must_use]
    pub fn evening_label(&self) -> &str {
        &self.evening_label
    }

    /// Time the sun rises through the angle, or `None` if it does not reach it that day.
    pub const fn morning(&self) -> Option<&T> {
        self.morning.as_ref()
    }

    /// Time the sun sets through the angle, or `None` if it does not reach it that day.
    pub const fn evening(&self) -> Option<&T> {
        self.evening.as_ref()
    }

    fn try_map<U, E>(self, f: &mut impl FnMut(T) -> Result<U, E>) -> Result<SolarPhase<U>, E> {
        Ok(SolarPhase {
            angle: self.angle,
            morning_label: self.morning_label,
            evening_label: self.evening_label,
            morning: self.morning.map(&mut *f).transpose()?,
            evening: self.evening.map(&mut *f).transpose()?,
        })
    }
}

/// Solar noon, nadir and the crossing times of every twilight angle for one day.
///
/// Times are keyed by label: `"solarNoon"`, `"nadir"` and the morning/evening labels of
/// the [`crate::twilight::TwilightAngles`] table the result was computed with.
///
/// # Example
/// ```
/// # use suncalc::{sun, time::JulianDate, twilight::{self, TwilightAngles}};
/// let date = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
/// let times = sun::solar_times_from_julian(date, 50.5, 30.5, 0.0, &TwilightAngles::standard()).unwrap();
///
/// let noon = times.solar_noon();
/// let sunrise = times.get(twilight::SUNRISE).unwrap();
/// let sunset = times.get(twilight::SUNSET).unwrap();
/// assert!(sunrise < noon && noon < sunset);
/// assert!(times.get("teatime").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarTimes<T> {
    solar_noon: T,
    nadir: T,
    phases: Vec<SolarPhase<T>>,
}

impl<T> SolarTimes<T> {
    pub(crate) const fn new(solar_noon: T, nadir: T, phases: Vec<SolarPhase<T>>) -> Self {
        Self {
            solar_noon,
            nadir,
            phases,
        }
    }

    /// Time of solar transit (the sun crosses the local meridian).
    pub const fn solar_noon(&self) -> &T {
        &self.solar_noon
    }

    /// Solar midnight, half a day before solar noon.
    pub const fn nadir(&self) -> &T {
        &self.nadir
    }

    /// Per-angle results, in table order.
    pub fn phases(&self) -> &[SolarPhase<T>] {
        &self.phases
    }

    /// Looks up a time by label.
    ///
    /// Returns `None` for labels the table did not contain, and for crossings the sun
    /// does not make that day. When a label occurs more than once, the entry added
    /// last wins, and twilight labels shadow `"solarNoon"`/`"nadir"`.
    pub fn get(&self, label: &str) -> Option<&T> {
        for phase in self.phases.iter().rev() {
            if phase.evening_label() == label {
                return phase.evening();
            }
            if phase.morning_label() == label {
                return phase.morning();
            }
        }
        match label {
            SOLAR_NOON => Some(&self.solar_noon),
            NADIR => Some(&self.nadir),
            _ => None,
        }
    }

    /// Time of sunrise, if the standard `"sunrise"` entry is present and the sun rises.
    pub fn sunrise(&self) -> Option<&T> {
        self.get(SUNRISE)
    }

    /// Time of sunset, if the standard `"sunset"` entry is present and the sun sets.
    pub fn sunset(&self) -> Option<&T> {
        self.get(SUNSET)
    }

    /// Iterates over `(label, time)` pairs: solar noon, nadir, then each entry's morning
    /// and evening crossing in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&T>)> {
        [
            (SOLAR_NOON, Some(&self.solar_noon)),
            (NADIR, Some(&self.nadir)),
        ]
        .into_iter()
        .chain(self.phases.iter().flat_map(|phase| {
            [
                (phase.morning_label(), phase.morning()),
                (phase.evening_label(), phase.evening()),
            ]
        }))
    }

    /// Converts every time with `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SolarTimes<U> {
        match self.try_map(|t| Ok::<U, core::convert::Infallible>(f(t))) {
            Ok(mapped) => mapped,
            Err(never) => match never {},
        }
    }

    /// Converts every time with a fallible `f`, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<SolarTimes<U>, E> {
        let solar_noon = f(self.solar_noon)?;
        let nadir = f(self.nadir)?;
        let phases = self
            .phases
            .into_iter()
            .map(|phase| phase.try_map(&mut f))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(SolarTimes {
            solar_noon,
            nadir,
            phases,
        })
    }
}

/// Moonrise and moonset for one day.
///
/// A day either has at least one of moonrise/moonset, or the moon stays on one side of
/// the horizon throughout. Computed and deserialized values never hold `Events` with
/// neither time set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "MoonTimesRepr<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub enum MoonTimes<T> {
    /// The moon crosses the horizon at least once
    Events {
        /// Time of moonrise, if the moon rises that day
        rise: Option<T>,
        /// Time of moonset, if the moon sets that day
        set: Option<T>,
    },
    /// The moon stays above the horizon all day
    AlwaysUp,
    /// The moon stays below the horizon all day
    AlwaysDown,
}

/// Wire form of [`MoonTimes`], checked on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "MoonTimes")]
enum MoonTimesRepr<T> {
    Events { rise: Option<T>, set: Option<T> },
    AlwaysUp,
    AlwaysDown,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MoonTimesRepr<T>> for MoonTimes<T> {
    type Error = &'static str;

    fn try_from(repr: MoonTimesRepr<T>) -> Result<Self, Self::Error> {
        match repr {
            MoonTimesRepr::Events {
                rise: None,
                set: None,
            } => Err("moon times events need a rise or a set"),
            MoonTimesRepr::Events { rise, set } => Ok(Self::Events { rise, set }),
            MoonTimesRepr::AlwaysUp => Ok(Self::AlwaysUp),
            MoonTimesRepr::AlwaysDown => Ok(Self::AlwaysDown),
        }
    }
}

impl<T> MoonTimes<T> {
    /// Gets moonrise, if any.
    pub const fn rise(&self) -> Option<&T> {
        match self {
            Self::Events { rise, .. } => rise.as_ref(),
            _ => None,
        }
    }

    /// Gets moonset, if any.
    pub const fn set(&self) -> Option<&T> {
        match self {
            Self::Events { set, .. } => set.as_ref(),
            _ => None,
        }
    }

    /// Checks if the moon stays above the horizon all day.
    pub const fn is_always_up(&self) -> bool {
        matches!(self, Self::AlwaysUp)
    }

    /// Checks if the moon stays below the horizon all day.
    pub const fn is_always_down(&self) -> bool {
        matches!(self, Self::AlwaysDown)
    }

    /// Converts the event times with a fallible `f`.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<MoonTimes<U>, E> {
        Ok(match self {
            Self::Events { rise, set } => MoonTimes::Events {
                rise: rise.map(&mut f).transpose()?,
                set: set.map(&mut f).transpose()?,
            },
            Self::AlwaysUp => MoonTimes::AlwaysUp,
            Self::AlwaysDown => MoonTimes::AlwaysDown,
        })
    }
}
