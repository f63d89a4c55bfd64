//! Coordinate transformations shared by the sun and moon models.
//!
//! Angles are in radians throughout. Nothing here clamps its inputs: arguments that
//! leave the domain of `asin`/`acos` produce NaN.

#![allow(clippy::many_single_char_names)]

use crate::math::{asin, atan2, cos, degrees_to_radians, sin, tan};

/// Obliquity of the ecliptic (radians).
const OBLIQUITY_OF_EARTH: f64 = degrees_to_radians(23.4397);

/// Equatorial coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialCoordinates {
    /// Right ascension in radians
    pub right_ascension: f64,
    /// Declination in radians
    pub declination: f64,
}

impl EquatorialCoordinates {
    /// Converts ecliptic longitude and latitude (radians) to equatorial coordinates.
    #[must_use]
    pub fn from_ecliptic(longitude: f64, latitude: f64) -> Self {
        Self {
            right_ascension: right_ascension(longitude, latitude),
            declination: declination(longitude, latitude),
        }
    }
}

/// Right ascension for ecliptic longitude `l` and latitude `b`.
#[must_use]
pub fn right_ascension(l: f64, b: f64) -> f64 {
    atan2(
        sin(l) * cos(OBLIQUITY_OF_EARTH) - tan(b) * sin(OBLIQUITY_OF_EARTH),
        cos(l),
    )
}

/// Declination for ecliptic longitude `l` and latitude `b`.
#[must_use]
pub fn declination(l: f64, b: f64) -> f64 {
    asin(sin(b) * cos(OBLIQUITY_OF_EARTH) + cos(b) * sin(OBLIQUITY_OF_EARTH) * sin(l))
}

/// Local sidereal time for `days` since J2000.0 at west longitude `lw` (radians).
#[must_use]
pub fn sidereal_time(days: f64, lw: f64) -> f64 {
    degrees_to_radians(280.16 + 360.985_623_5 * days) - lw
}

/// Azimuth from hour angle `h`, observer latitude `phi` and declination `dec`.
///
/// Measured from south, positive towards west.
#[must_use]
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), cos(h) * sin(phi) - tan(dec) * cos(phi))
}

/// Altitude above the horizon from hour angle `h`, observer latitude `phi` and declination `dec`.
#[must_use]
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    asin(sin(phi) * sin(dec) + cos(phi) * cos(dec) * cos(h))
}

/// Parallactic angle (Meeus, formula 14.1).
#[must_use]
pub fn parallactic_angle(h: f64, phi: f64, dec: f64) -> f64 {
    atan2(sin(h), tan(phi) * cos(dec) - sin(dec) * cos(h))
}

/// Observer in the form the horizontal transforms need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Observer {
    /// Latitude in radians
    pub phi: f64,
    /// West longitude in radians (east negative)
    pub lw: f64,
}

impl Observer {
    pub(crate) const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            phi: degrees_to_radians(latitude),
            lw: degrees_to_radians(-longitude),
        }
    }

    /// Local hour angle of a body at `days` since J2000.0.
    pub(crate) fn hour_angle(&self, days: f64, right_ascension: f64) -> f64 {
        sidereal_time(days, self.lw) - right_ascension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_ecliptic_origin_maps_to_equatorial_origin() {
        let eq = EquatorialCoordinates::from_ecliptic(0.0, 0.0);
        assert!(eq.right_ascension.abs() < EPSILON);
        assert!(eq.declination.abs() < EPSILON);
    }

    #[test]
    fn test_summer_solstice_declination_equals_obliquity() {
        let eq = EquatorialCoordinates::from_ecliptic(PI / 2.0, 0.0);
        assert!((eq.declination - OBLIQUITY_OF_EARTH).abs() < EPSILON);
        assert!((eq.right_ascension - PI / 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_body_on_meridian() {
        // Hour angle zero: the body is due south (azimuth 0) at altitude 90° - |phi - dec|.
        let phi = degrees_to_radians(50.0);
        let dec = degrees_to_radians(20.0);
        assert!(azimuth(0.0, phi, dec).abs() < EPSILON);
        assert!((altitude(0.0, phi, dec) - degrees_to_radians(60.0)).abs() < EPSILON);
        assert!(parallactic_angle(0.0, phi, dec).abs() < EPSILON);
    }

    #[test]
    fn test_observer_uses_west_longitude() {
        let observer = Observer::new(50.5, 30.5);
        assert!((observer.lw + degrees_to_radians(30.5)).abs() < EPSILON);
        assert!((observer.phi - degrees_to_radians(50.5)).abs() < EPSILON);

        let days = 4811.5;
        let h = observer.hour_angle(days, 1.0);
        assert!((h - (sidereal_time(days, observer.lw) - 1.0)).abs() < EPSILON);
    }
}
