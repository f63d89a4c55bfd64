//! Moon position, illumination, and moonrise/moonset.
//!
//! The lunar ephemeris keeps only the largest periodic term in longitude, latitude,
//! and distance, which is good to about a degree. Rise and set times come from a
//! sampled search: the apparent altitude is evaluated every hour of the day and a
//! parabola is fitted through each two-hour window to locate horizon crossings.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::coords::{self, EquatorialCoordinates, Observer};
use crate::error::check_coordinates;
use crate::math::{PI, abs, acos, atan2, cos, degrees_to_radians, sin, sqrt};
use crate::refraction::refraction;
use crate::sun::sun_coordinates;
use crate::time::JulianDate;
#[cfg(feature = "chrono")]
use crate::time::start_of_day;
use crate::types::{MoonIllumination, MoonPosition, MoonTimes};
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Mean Earth-Sun distance in km.
const SUN_DISTANCE: f64 = 149_598_000.0;

/// Altitude (radians) of the moon's center at rise and set.
const MOON_HORIZON: f64 = degrees_to_radians(0.133);

/// Geocentric position of the moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCoordinates {
    /// Right ascension and declination
    pub equatorial: EquatorialCoordinates,
    /// Distance from the Earth's center in km
    pub distance: f64,
}

/// Geocentric coordinates of the moon at `days` since J2000.0.
#[must_use]
pub fn moon_coordinates(days: f64) -> LunarCoordinates {
    let mean_longitude = degrees_to_radians(218.316 + 13.176396 * days);
    let mean_anomaly = degrees_to_radians(134.963 + 13.064993 * days);
    let mean_distance = degrees_to_radians(93.272 + 13.229350 * days);

    let l = mean_longitude + degrees_to_radians(6.289) * sin(mean_anomaly);
    let b = degrees_to_radians(5.128) * sin(mean_distance);

    LunarCoordinates {
        equatorial: EquatorialCoordinates::from_ecliptic(l, b),
        distance: 385001.0 - 20905.0 * cos(mean_anomaly),
    }
}

/// Calculate the moon's position for an observer.
///
/// The altitude includes atmospheric refraction; the parallactic angle is computed from
/// the geometric altitude.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use suncalc::moon;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let position = moon::moon_position(&datetime, 50.5, 30.5).unwrap();
///
/// assert!((position.azimuth() - -0.9783999522438226).abs() < 1e-9);
/// assert!((position.distance() - 364121.37256256194).abs() < 1e-6);
/// ```
#[cfg(feature = "chrono")]
pub fn moon_position<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonPosition> {
    moon_position_from_julian(JulianDate::from_datetime(datetime), latitude, longitude)
}

/// Calculate the moon's position from a Julian date.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn moon_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<MoonPosition> {
    check_coordinates(latitude, longitude)?;
    Ok(position_for(&Observer::new(latitude, longitude), jd))
}

fn position_for(observer: &Observer, jd: JulianDate) -> MoonPosition {
    let days = jd.days_since_j2000();
    let moon = moon_coordinates(days);
    let h = observer.hour_angle(days, moon.equatorial.right_ascension);

    let geometric = coords::altitude(h, observer.phi, moon.equatorial.declination);
    let parallactic_angle = coords::parallactic_angle(h, observer.phi, moon.equatorial.declination);

    MoonPosition::new(
        coords::azimuth(h, observer.phi, moon.equatorial.declination),
        geometric + refraction(geometric),
        moon.distance,
        parallactic_angle,
    )
}

/// Calculate the illuminated fraction, phase, and bright-limb angle of the moon.
///
/// Illumination is geocentric, so no observer is involved.
///
/// # Example
/// ```rust
/// use suncalc::moon;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let illumination = moon::moon_illumination(&datetime);
///
/// assert!((illumination.fraction() - 0.4848068202456373).abs() < 1e-9);
/// assert!((illumination.phase() - 0.7548368838538762).abs() < 1e-9);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn moon_illumination<Tz: TimeZone>(datetime: &DateTime<Tz>) -> MoonIllumination {
    moon_illumination_from_julian(JulianDate::from_datetime(datetime))
}

/// Calculate moon illumination from a Julian date.
#[must_use]
pub fn moon_illumination_from_julian(jd: JulianDate) -> MoonIllumination {
    let days = jd.days_since_j2000();
    let sun = sun_coordinates(days);
    let moon = moon_coordinates(days);
    let moon_eq = moon.equatorial;

    let ra_difference = sun.right_ascension - moon_eq.right_ascension;

    // geocentric elongation of the moon from the sun
    let elongation = acos(
        sin(sun.declination) * sin(moon_eq.declination)
            + cos(sun.declination) * cos(moon_eq.declination) * cos(ra_difference),
    );
    let inclination = atan2(
        SUN_DISTANCE * sin(elongation),
        moon.distance - SUN_DISTANCE * cos(elongation),
    );
    let angle = atan2(
        cos(sun.declination) * sin(ra_difference),
        sin(sun.declination) * cos(moon_eq.declination)
            - cos(sun.declination) * sin(moon_eq.declination) * cos(ra_difference),
    );

    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    MoonIllumination::new(
        f64::midpoint(1.0, cos(inclination)),
        0.5 + 0.5 * inclination * sign / PI,
        angle,
    )
}

/// Calculate moonrise and moonset for the calendar day of `date` in its own time zone.
///
/// The search runs from local midnight for 24 hours. Times come back in the time
/// zone of `date`.
///
/// # Errors
/// Returns error for invalid coordinates, or if a time falls outside the range chrono
/// can represent.
///
/// # Example
/// ```rust
/// use suncalc::moon;
/// use chrono::{FixedOffset, TimeZone};
///
/// let kyiv = FixedOffset::east_opt(2 * 3600).unwrap();
/// let date = kyiv.with_ymd_and_hms(2013, 3, 5, 12, 0, 0).unwrap();
/// let times = moon::moon_times(&date, 50.5, 30.5).unwrap();
///
/// assert_eq!(times.rise().unwrap().to_rfc3339(), "2013-03-05T01:54:29.675+02:00");
/// assert_eq!(times.set().unwrap().format("%H:%M").to_string(), "10:44");
/// ```
#[cfg(feature = "chrono")]
pub fn moon_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonTimes<DateTime<Tz>>> {
    times_from(&start_of_day(date), latitude, longitude)
}

/// Calculate moonrise and moonset for the UTC calendar day of `date`.
///
/// The search runs from 00:00 UTC. Times come back in the time zone of `date`.
///
/// # Errors
/// Returns error for invalid coordinates, or if a time falls outside the range chrono
/// can represent.
///
/// # Example
/// ```rust
/// use suncalc::moon;
/// use chrono::{DateTime, Utc};
///
/// let date = "2013-03-04T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let times = moon::moon_times_utc(&date, 50.5, 30.5).unwrap();
///
/// let rise = times.rise().unwrap();
/// assert_eq!(rise.format("%H:%M:%S").to_string(), "23:54:29");
/// ```
#[cfg(feature = "chrono")]
pub fn moon_times_utc<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonTimes<DateTime<Tz>>> {
    let midnight = start_of_day(&date.with_timezone(&Utc)).with_timezone(&date.timezone());
    times_from(&midnight, latitude, longitude)
}

#[cfg(feature = "chrono")]
fn times_from<Tz: TimeZone>(
    midnight: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<MoonTimes<DateTime<Tz>>> {
    let tz = midnight.timezone();
    moon_times_from_julian(JulianDate::from_datetime(midnight), latitude, longitude)?
        .try_map(|jd| jd.to_datetime_in(&tz))
}

/// Calculate moonrise and moonset in the 24 hours following `start`.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn moon_times_from_julian(
    start: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<MoonTimes<JulianDate>> {
    check_coordinates(latitude, longitude)?;

    let observer = Observer::new(latitude, longitude);
    let hours = scan_horizon(|hour| {
        position_for(&observer, start.add_hours(hour)).altitude() - MOON_HORIZON
    });

    Ok(match hours {
        MoonTimes::Events { rise, set } => MoonTimes::Events {
            rise: rise.map(|hour| start.add_hours(hour)),
            set: set.map(|hour| start.add_hours(hour)),
        },
        MoonTimes::AlwaysUp => MoonTimes::AlwaysUp,
        MoonTimes::AlwaysDown => MoonTimes::AlwaysDown,
    })
}

/// Finds horizon crossings of `height` (altitude above the horizon, radians, as a
/// function of hours from the start) over hours 0 to 24.
///
/// Samples every hour and fits a parabola through each window of three samples
/// `(hour - 1, hour, hour + 1)`. Stops once both a rise and a set are found. When
/// nothing is found, the vertex height of the last window decides between always up
/// and always down.
fn scan_horizon(height: impl Fn(f64) -> f64) -> MoonTimes<f64> {
    let mut rise = None;
    let mut set = None;
    let mut ye = 0.0;

    let mut h0 = height(0.0);

    for hour in (1..24).step_by(2) {
        let hour = f64::from(hour);
        let h1 = height(hour);
        let h2 = height(hour + 1.0);

        let a = f64::midpoint(h0, h2) - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        ye = (a * xe + b) * xe + h1;
        let d = b * b - 4.0 * a * h1;

        let mut roots = 0;
        let mut x1 = 0.0;
        let mut x2 = 0.0;

        if d >= 0.0 {
            let dx = sqrt(d) / (abs(a) * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if abs(x1) <= 1.0 {
                roots += 1;
            }
            if abs(x2) <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        match roots {
            1 if h0 < 0.0 => rise = Some(hour + x1),
            1 => set = Some(hour + x1),
            2 => {
                // a parabola dipping below the horizon sets first
                let (r, s) = if ye < 0.0 { (x2, x1) } else { (x1, x2) };
                rise = Some(hour + r);
                set = Some(hour + s);
            }
            _ => {}
        }

        if rise.is_some() && set.is_some() {
            break;
        }

        h0 = h2;
    }

    if rise.is_some() || set.is_some() {
        MoonTimes::Events { rise, set }
    } else if ye > 0.0 {
        MoonTimes::AlwaysUp
    } else {
        MoonTimes::AlwaysDown
    }
}
