//! # suncalc
//!
//! Sun and moon positions, sunlight phases, moon illumination, and moonrise/moonset.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The algorithms are the compact low-precision series described at
//! <https://aa.quae.nl/en/reken/zonpositie.html> and
//! <https://aa.quae.nl/en/reken/hemelpositie.html>: good to about a minute of arc for
//! the sun and about a degree for the moon, which is plenty for rise/set times and
//! photography planning.
//!
//! ## Features
//!
//! - Sun position (azimuth, altitude)
//! - Solar noon, nadir and any number of named twilight angles (sunrise, dusk, golden hour, ...)
//! - Moon position, distance and parallactic angle
//! - Moon illumination and phase
//! - Moonrise and moonset for a local or UTC calendar day
//! - `std` or `no_std`, with or without `chrono`
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based API and the [`SunCalc`] calculator
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for result types and twilight tables
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! suncalc = "0.1"
//!
//! # Minimal std (no chrono)
//! suncalc = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! suncalc = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunlight phases (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use suncalc::{SunCalc, twilight};
//! use chrono::{DateTime, Utc};
//!
//! let date = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let calc = SunCalc::new(date);
//!
//! let times = calc.solar_times(50.5, 30.5, 0.0).unwrap();
//! for (label, time) in times.iter() {
//!     match time {
//!         Some(time) => println!("{label:>14}: {}", time.format("%H:%M:%S")),
//!         None => println!("{label:>14}: -"),
//!     }
//! }
//! assert_eq!(times.get(twilight::SUNSET).unwrap().format("%H:%M:%S").to_string(), "15:46:57");
//! # }
//! ```
//!
//! ### Moon (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use suncalc::{MoonTimes, SunCalc};
//! use chrono::{DateTime, Utc};
//!
//! let date = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let calc = SunCalc::new(date);
//!
//! let illumination = calc.moon_illumination();
//! println!("{:.1}% lit, {:?}", illumination.fraction() * 100.0, illumination.phase_name());
//!
//! match calc.moon_times(50.5, 30.5).unwrap() {
//!     MoonTimes::Events { rise, set } => println!("rise {rise:?}, set {set:?}"),
//!     MoonTimes::AlwaysUp => println!("moon up all day"),
//!     MoonTimes::AlwaysDown => println!("moon down all day"),
//! }
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use suncalc::{sun, moon, time::JulianDate, TwilightAngles};
//!
//! let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).unwrap();
//!
//! let position = sun::solar_position_from_julian(jd, 50.5, 30.5).unwrap();
//! println!("Sun altitude: {:.2}°", position.altitude_degrees());
//!
//! let times = sun::solar_times_from_julian(jd, 50.5, 30.5, 0.0, &TwilightAngles::standard()).unwrap();
//! let sunrise = times.sunrise().unwrap();
//! println!("Sunrise at JD {:.5}", sunrise.julian_date());
//!
//! let illumination = moon::moon_illumination_from_julian(jd);
//! assert!((0.0..=1.0).contains(&illumination.fraction()));
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: radians, 0 = south, increasing toward west (`compass_azimuth` gives
//!   degrees from north, clockwise)
//! - **Altitude**: radians above the horizon
//! - **Latitude/longitude**: degrees, north and east positive

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mirrored times in tests
    clippy::suboptimal_flops, // Series are evaluated term by term, as published
)]

extern crate alloc;

// Public API exports
#[cfg(feature = "chrono")]
pub use crate::calc::SunCalc;
pub use crate::error::{Error, Result};
pub use crate::time::JulianDate;
pub use crate::twilight::{TwilightAngle, TwilightAngles};
pub use crate::types::{
    MoonIllumination, MoonPhase, MoonPosition, MoonTimes, SolarPhase, SolarTimes, SunPosition,
};

// Calculation modules
pub mod moon;
pub mod sun;

#[cfg(feature = "chrono")]
pub mod calc;

// Core modules
pub mod coords;
pub mod error;
pub mod refraction;
pub mod twilight;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_time_zone_does_not_change_positions() {
        let datetime_fixed = "2013-03-05T02:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();

        let sun1 = sun::solar_position(&datetime_fixed, 50.5, 30.5).unwrap();
        let sun2 = sun::solar_position(&datetime_utc, 50.5, 30.5).unwrap();
        assert_eq!(sun1, sun2);

        let moon1 = moon::moon_position(&datetime_fixed, 50.5, 30.5).unwrap();
        let moon2 = moon::moon_position(&datetime_utc, 50.5, 30.5).unwrap();
        assert_eq!(moon1, moon2);
    }

    #[test]
    fn test_solar_times_keep_caller_time_zone() {
        let datetime_fixed = "2013-03-05T02:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let times = SunCalc::new(datetime_fixed)
            .solar_times(50.5, 30.5, 0.0)
            .unwrap();

        let noon = times.solar_noon();
        assert_eq!(noon.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(noon.format("%H:%M:%S").to_string(), "12:10:57");
    }
}
