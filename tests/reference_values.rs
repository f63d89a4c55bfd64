#![cfg(feature = "chrono")]

//! Reference values for Kyiv-area coordinates on 2013-03-05.

use chrono::{DateTime, TimeZone, Utc};
use suncalc::{SunCalc, twilight};

const LAT: f64 = 50.5;
const LNG: f64 = 30.5;

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
}

fn hms(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[test]
fn sun_position_reference() {
    let position = SunCalc::new(date()).solar_position(LAT, LNG).unwrap();

    assert!((position.azimuth() - -2.5003175907168385).abs() < 1e-10);
    assert!((position.altitude() - -0.7000406838781611).abs() < 1e-10);
    assert!(!position.is_above_horizon());
}

#[test]
fn solar_times_reference() {
    let times = SunCalc::new(date()).solar_times(LAT, LNG, 0.0).unwrap();

    let expected = [
        (twilight::SOLAR_NOON, "2013-03-05 10:10:57"),
        (twilight::NADIR, "2013-03-04 22:10:57"),
        (twilight::SUNRISE, "2013-03-05 04:34:56"),
        (twilight::SUNSET, "2013-03-05 15:46:57"),
        (twilight::SUNRISE_END, "2013-03-05 04:38:19"),
        (twilight::SUNSET_START, "2013-03-05 15:43:34"),
        (twilight::DAWN, "2013-03-05 04:02:17"),
        (twilight::DUSK, "2013-03-05 16:19:36"),
        (twilight::NAUTICAL_DAWN, "2013-03-05 03:24:31"),
        (twilight::NAUTICAL_DUSK, "2013-03-05 16:57:22"),
        (twilight::NIGHT_END, "2013-03-05 02:46:17"),
        (twilight::NIGHT, "2013-03-05 17:35:36"),
        (twilight::GOLDEN_HOUR_END, "2013-03-05 05:19:01"),
        (twilight::GOLDEN_HOUR, "2013-03-05 15:02:52"),
    ];

    for (label, want) in expected {
        let time = times
            .get(label)
            .unwrap_or_else(|| panic!("missing {label}"));
        assert_eq!(hms(time), want, "{label}");
    }
    assert_eq!(times.iter().count(), expected.len());
}

#[test]
fn solar_times_with_observer_height() {
    let calc = SunCalc::new(date());
    let times = calc.solar_times(LAT, LNG, 2000.0).unwrap();

    assert_eq!(hms(times.sunrise().unwrap()), "2013-03-05 04:25:07");
    assert_eq!(hms(times.sunset().unwrap()), "2013-03-05 15:56:46");
    assert_eq!(hms(times.get(twilight::DAWN).unwrap()), "2013-03-05 03:52:33");
    assert_eq!(hms(times.get(twilight::GOLDEN_HOUR).unwrap()), "2013-03-05 15:12:59");

    // height only moves the crossings, not the transit
    let ground = calc.solar_times(LAT, LNG, 0.0).unwrap();
    assert_eq!(times.solar_noon(), ground.solar_noon());
}

#[test]
fn day_lengthens_with_observer_height() {
    let calc = SunCalc::new(date());
    let mut previous = None;

    for height in [0.0, 10.0, 100.0, 500.0, 2000.0, 8000.0] {
        let times = calc.solar_times(LAT, LNG, height).unwrap();
        let day = *times.sunset().unwrap() - *times.sunrise().unwrap();
        if let Some(previous) = previous {
            assert!(day > previous, "height {height} should lengthen the day");
        }
        previous = Some(day);
    }
}

#[test]
fn moon_position_reference() {
    let position = SunCalc::new(date()).moon_position(LAT, LNG).unwrap();

    assert!((position.azimuth() - -0.9783999522438226).abs() < 1e-10);
    assert!((position.altitude() - 0.014551482243892251).abs() < 1e-10);
    assert!((position.distance() - 364121.37256256194).abs() < 1e-6);
}

#[test]
fn moon_illumination_reference() {
    let illumination = SunCalc::new(date()).moon_illumination();

    assert!((illumination.fraction() - 0.4848068202456373).abs() < 1e-10);
    assert!((illumination.phase() - 0.7548368838538762).abs() < 1e-10);
    assert!((illumination.angle() - 1.6732942678578346).abs() < 1e-10);
    assert!(!illumination.is_waxing());
    assert_eq!(illumination.phase_name(), suncalc::MoonPhase::LastQuarter);
}

#[test]
fn moon_times_reference() {
    let date = Utc.with_ymd_and_hms(2013, 3, 4, 0, 0, 0).unwrap();
    let times = SunCalc::new(date).moon_times_utc(LAT, LNG).unwrap();

    assert_eq!(hms(times.rise().unwrap()), "2013-03-04 23:54:29");
    assert_eq!(hms(times.set().unwrap()), "2013-03-04 07:47:58");
    assert!(!times.is_always_up());
    assert!(!times.is_always_down());
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let calc = SunCalc::new(date());

    assert!(calc.solar_position(90.5, LNG).is_err());
    assert!(calc.solar_times(LAT, -180.5, 0.0).is_err());
    assert!(calc.solar_times(LAT, LNG, -5.0).is_err());
    assert!(calc.moon_position(f64::NAN, LNG).is_err());
    assert!(calc.moon_times(LAT, f64::INFINITY).is_err());
    assert!(calc.moon_times_utc(-91.0, LNG).is_err());
}
