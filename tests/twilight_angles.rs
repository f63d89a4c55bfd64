#![cfg(feature = "chrono")]

//! Custom twilight angles and label lookup.

use chrono::{DateTime, TimeZone, Utc};
use suncalc::{SunCalc, TwilightAngles, sun, twilight};

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
}

#[test]
fn custom_angle_appears_between_neighbouring_angles() {
    let angles = TwilightAngles::standard().with_angle(-4.0, "blueHourEnd", "blueHour");
    let times = sun::solar_times(&date(), 50.5, 30.5, 0.0, &angles).unwrap();

    let blue_end = times.get("blueHourEnd").unwrap();
    let blue = times.get("blueHour").unwrap();

    // -4° lies between civil twilight (-6°) and sunrise (-0.833°)
    assert!(times.get(twilight::DAWN).unwrap() < blue_end);
    assert!(blue_end < times.sunrise().unwrap());
    assert!(times.sunset().unwrap() < blue);
    assert!(blue < times.get(twilight::DUSK).unwrap());
}

#[test]
fn engine_angles_do_not_leak_between_calculators() {
    let mut first = SunCalc::new(date());
    first.add_twilight_angle(-9.0, "midDawn", "midDusk");
    let second = SunCalc::new(date());

    assert!(first.solar_times(50.5, 30.5, 0.0).unwrap().get("midDusk").is_some());
    assert!(second.solar_times(50.5, 30.5, 0.0).unwrap().get("midDusk").is_none());
}

#[test]
fn unknown_label_is_none() {
    let times = SunCalc::new(date()).solar_times(50.5, 30.5, 0.0).unwrap();
    assert_eq!(times.get("elevenses"), None);
    assert_eq!(times.get(""), None);
}

#[test]
fn duplicate_label_resolves_to_last_entry() {
    let angles = TwilightAngles::standard().with_angle(-2.0, twilight::SUNRISE, twilight::SUNSET);
    let times = sun::solar_times(&date(), 50.5, 30.5, 0.0, &angles).unwrap();

    let standard = SunCalc::new(date()).solar_times(50.5, 30.5, 0.0).unwrap();

    // the sun reaches -2° before it reaches -0.833°
    assert!(times.sunrise().unwrap() < standard.sunrise().unwrap());
    assert!(times.sunset().unwrap() > standard.sunset().unwrap());
    assert_eq!(times.phases().len(), 7);
}

#[test]
fn phase_label_shadows_solar_noon() {
    let angles = TwilightAngles::empty().with_angle(0.0, "morningZero", twilight::SOLAR_NOON);
    let times = sun::solar_times(&date(), 50.5, 30.5, 0.0, &angles).unwrap();

    assert_ne!(times.get(twilight::SOLAR_NOON), Some(times.solar_noon()));
    assert!(times.get(twilight::SOLAR_NOON).unwrap() > times.solar_noon());
}

#[test]
fn iteration_follows_table_order() {
    let angles = TwilightAngles::empty()
        .with_angle(-6.0, "a", "b")
        .with_angle(6.0, "c", "d");
    let times = sun::solar_times(&date(), 50.5, 30.5, 0.0, &angles).unwrap();

    let labels: Vec<&str> = times.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, ["solarNoon", "nadir", "a", "b", "c", "d"]);
}

#[test]
fn unreachable_angle_yields_none_at_every_latitude() {
    // the sun never climbs 80° above the horizon in early March outside the tropics
    let angles = TwilightAngles::empty().with_angle(80.0, "high", "low");

    for latitude in [30.0, 50.5, 70.0, -45.0] {
        let times = sun::solar_times(&date(), latitude, 30.5, 0.0, &angles).unwrap();
        assert_eq!(times.get("high"), None, "latitude {latitude}");
        assert_eq!(times.get("low"), None, "latitude {latitude}");
        assert!(times.get(twilight::SOLAR_NOON).is_some());
    }
}

#[test]
fn polar_day_has_no_sunset() {
    let midsummer = Utc.with_ymd_and_hms(2013, 6, 21, 0, 0, 0).unwrap();
    let times = SunCalc::new(midsummer).solar_times(70.0, 25.0, 0.0).unwrap();

    assert_eq!(times.sunrise(), None);
    assert_eq!(times.sunset(), None);
    assert_eq!(times.get(twilight::NIGHT), None);
    // the midnight sun still dips to about 3.4°, below the golden hour angle
    assert!(times.get(twilight::GOLDEN_HOUR).is_some());
    assert!(times.get(twilight::GOLDEN_HOUR_END).is_some());
}
