//! Sun position and solar times.
//!
//! Low-precision solar ephemeris (mean anomaly plus a three-term equation of center,
//! accurate to roughly a minute of arc over a few centuries around J2000) and the
//! transit-based sunrise/sunset scheme from
//! <https://aa.quae.nl/en/reken/zonpositie.html>.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::coords::{self, EquatorialCoordinates, Observer};
use crate::error::{check_coordinates, check_height};
use crate::math::{PI, TAU, acos, cos, degrees_to_radians, round_half_up, sin, sqrt};
use crate::time::{J2000, JulianDate};
use crate::twilight::TwilightAngles;
use crate::types::{SolarPhase, SolarTimes, SunPosition};
use crate::Result;
use alloc::vec::Vec;
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone};

/// Perihelion of the Earth (radians).
const PERIHELION_OF_EARTH: f64 = degrees_to_radians(102.9372);

/// Fractional-day offset of the approximate transit formula.
const J0: f64 = 0.0009;

/// Solar mean anomaly (radians) at `days` since J2000.0.
#[must_use]
pub fn solar_mean_anomaly(days: f64) -> f64 {
    degrees_to_radians(357.5291 + 0.98560028 * days)
}

/// Ecliptic longitude of the sun (radians) for mean anomaly `m`.
#[must_use]
pub fn ecliptic_longitude(m: f64) -> f64 {
    let equation_of_center =
        degrees_to_radians(1.9148 * sin(m) + 0.02 * sin(2.0 * m) + 0.0003 * sin(3.0 * m));
    m + equation_of_center + PERIHELION_OF_EARTH + PI
}

/// Geocentric equatorial coordinates of the sun at `days` since J2000.0.
#[must_use]
pub fn sun_coordinates(days: f64) -> EquatorialCoordinates {
    let m = solar_mean_anomaly(days);
    let l = ecliptic_longitude(m);
    EquatorialCoordinates::from_ecliptic(l, 0.0)
}

/// Calculate the sun's position for an observer.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude outside ±180°)
///
/// # Example
/// ```rust
/// use suncalc::sun;
/// use chrono::{DateTime, Utc};
///
/// let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let position = sun::solar_position(&datetime, 50.5, 30.5).unwrap();
///
/// assert!((position.azimuth() - -2.5003175907168385).abs() < 1e-9);
/// assert!((position.altitude() - -0.7000406838781611).abs() < 1e-9);
/// ```
#[cfg(feature = "chrono")]
pub fn solar_position<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    solar_position_from_julian(JulianDate::from_datetime(datetime), latitude, longitude)
}

/// Calculate the sun's position from a Julian date.
///
/// # Errors
/// Returns error for invalid coordinates
pub fn solar_position_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
) -> Result<SunPosition> {
    check_coordinates(latitude, longitude)?;

    let observer = Observer::new(latitude, longitude);
    let days = jd.days_since_j2000();
    let sun = sun_coordinates(days);
    let h = observer.hour_angle(days, sun.right_ascension);

    Ok(SunPosition::new(
        coords::azimuth(h, observer.phi, sun.declination),
        coords::altitude(h, observer.phi, sun.declination),
    ))
}

/// Calculate solar noon, nadir and the crossing times of every twilight angle.
///
/// The day is the solar day whose transit lies closest to `date` at the observer's
/// longitude. Times come back in the time zone of `date`.
///
/// # Arguments
/// * `date` - Date for calculations
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `height` - Observer height above the horizon in meters; raises the horizon dip
/// * `angles` - Twilight angles to report
///
/// # Errors
/// Returns error for invalid coordinates or height, or if a time falls outside the
/// range chrono can represent.
///
/// # Example
/// ```rust
/// use suncalc::{sun, twilight::{self, TwilightAngles}};
/// use chrono::{DateTime, Utc};
///
/// let date = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let times = sun::solar_times(&date, 50.5, 30.5, 0.0, &TwilightAngles::standard()).unwrap();
///
/// let sunrise = times.get(twilight::SUNRISE).unwrap();
/// assert_eq!(sunrise.format("%H:%M:%S").to_string(), "04:34:56");
/// ```
#[cfg(feature = "chrono")]
pub fn solar_times<Tz: TimeZone>(
    date: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    height: f64,
    angles: &TwilightAngles,
) -> Result<SolarTimes<DateTime<Tz>>> {
    let tz = date.timezone();
    solar_times_from_julian(
        JulianDate::from_datetime(date),
        latitude,
        longitude,
        height,
        angles,
    )?
    .try_map(|jd| jd.to_datetime_in(&tz))
}

/// Calculate solar noon, nadir and twilight crossings from a Julian date.
///
/// A crossing is `None` when the sun does not reach the angle that day (polar day or
/// night for that angle). Each morning time is the evening time mirrored around solar
/// noon.
///
/// # Errors
/// Returns error for invalid coordinates or height
pub fn solar_times_from_julian(
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
    height: f64,
    angles: &TwilightAngles,
) -> Result<SolarTimes<JulianDate>> {
    check_coordinates(latitude, longitude)?;
    check_height(height)?;

    let observer = Observer::new(latitude, longitude);
    let days = jd.days_since_j2000();

    let dh = observer_angle(height);
    let n = julian_cycle(days, observer.lw);
    let ds = approx_transit(0.0, observer.lw, n);
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = coords::declination(l, 0.0);
    let j_noon = solar_transit_j(ds, m, l);

    let phases = angles
        .iter()
        .map(|entry| {
            let h0 = degrees_to_radians(entry.angle() + dh);
            let j_set = set_j(h0, &observer, dec, n, m, l);
            let (morning, evening) = if j_set.is_finite() {
                let j_rise = j_noon - (j_set - j_noon);
                (Some(JulianDate::new(j_rise)), Some(JulianDate::new(j_set)))
            } else {
                (None, None)
            };
            let (morning_label, evening_label) = entry.labels();
            SolarPhase::new(entry.angle(), morning_label, evening_label, morning, evening)
        })
        .collect::<Vec<_>>();

    Ok(SolarTimes::new(
        JulianDate::new(j_noon),
        JulianDate::new(j_noon - 0.5),
        phases,
    ))
}

/// Horizon dip (degrees) for an observer `height` meters above the horizon.
fn observer_angle(height: f64) -> f64 {
    -2.076 * sqrt(height) / 60.0
}

fn julian_cycle(days: f64, lw: f64) -> f64 {
    round_half_up(days - J0 - lw / TAU)
}

const fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / TAU + n
}

fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * sin(m) - 0.0069 * sin(2.0 * l)
}

/// Hour angle at which the sun reaches altitude `h`; NaN if it never does.
fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    acos((sin(h) - sin(phi) * sin(dec)) / (cos(phi) * cos(dec)))
}

fn set_j(h: f64, observer: &Observer, dec: f64, n: f64, m: f64, l: f64) -> f64 {
    let w = hour_angle(h, observer.phi, dec);
    let a = approx_transit(w, observer.lw, n);
    solar_transit_j(a, m, l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twilight;

    // 2013-03-05T00:00:00Z
    fn march_5_2013() -> JulianDate {
        JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap()
    }

    #[test]
    fn test_solar_position_reference() {
        let position = solar_position_from_julian(march_5_2013(), 50.5, 30.5).unwrap();
        assert!((position.azimuth() - -2.5003175907168385).abs() < 1e-9);
        assert!((position.altitude() - -0.7000406838781611).abs() < 1e-9);
    }

    #[test]
    fn test_solar_position_validation() {
        assert!(solar_position_from_julian(march_5_2013(), 95.0, 0.0).is_err());
        assert!(solar_position_from_julian(march_5_2013(), 0.0, 185.0).is_err());
    }

    #[test]
    fn test_sun_coordinates_at_march_equinox() {
        // Around 2013-03-20 the sun crosses the celestial equator heading north.
        let before = JulianDate::from_utc(2013, 3, 19, 0, 0, 0.0).unwrap();
        let after = JulianDate::from_utc(2013, 3, 21, 0, 0, 0.0).unwrap();
        let before = sun_coordinates(before.days_since_j2000());
        let after = sun_coordinates(after.days_since_j2000());
        assert!(before.declination < 0.0);
        assert!(after.declination > 0.0);
    }

    #[test]
    fn test_observer_angle() {
        assert_eq!(observer_angle(0.0), 0.0);
        assert!((observer_angle(2000.0) - -1.5474).abs() < 1e-4);
    }

    #[test]
    fn test_morning_mirrors_evening_around_noon() {
        let times = solar_times_from_julian(
            march_5_2013(),
            50.5,
            30.5,
            0.0,
            &TwilightAngles::standard(),
        )
        .unwrap();
        let noon = times.solar_noon().julian_date();

        for phase in times.phases() {
            let rise = phase.morning().unwrap().julian_date();
            let set = phase.evening().unwrap().julian_date();
            assert_eq!(noon - (set - noon), rise, "{}", phase.morning_label());
        }
        assert_eq!(times.nadir().julian_date(), noon - 0.5);
    }

    #[test]
    fn test_polar_night_has_no_crossings() {
        let winter = JulianDate::from_utc(2013, 12, 21, 12, 0, 0.0).unwrap();
        let times =
            solar_times_from_julian(winter, 80.0, 15.0, 0.0, &TwilightAngles::standard()).unwrap();

        assert!(times.solar_noon().julian_date().is_finite());
        assert_eq!(times.get(twilight::SUNRISE), None);
        assert_eq!(times.get(twilight::SUNSET), None);
        assert_eq!(times.get(twilight::GOLDEN_HOUR), None);
        assert_eq!(times.get(twilight::NAUTICAL_DUSK), None);
        // The sun peaks near -13.4° here, so it still climbs through -18°.
        assert!(times.get(twilight::NIGHT).is_some());
    }

    #[test]
    fn test_height_validation() {
        let angles = TwilightAngles::standard();
        assert!(solar_times_from_julian(march_5_2013(), 50.5, 30.5, -1.0, &angles).is_err());
        assert!(solar_times_from_julian(march_5_2013(), 50.5, 30.5, f64::NAN, &angles).is_err());
    }
}
