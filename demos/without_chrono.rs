//! Example demonstrating usage without chrono.
//!
//! This shows how to use the numeric API in environments where users handle their
//! own time conversions.

use suncalc::{MoonTimes, TwilightAngles, moon, sun, time::JulianDate, twilight};

/// Formats a Julian date as hours and minutes UTC.
fn clock(jd: &JulianDate) -> String {
    let day_fraction = (jd.julian_date() + 0.5).fract();
    let minutes = (day_fraction * 1440.0).round() as u32 % 1440;
    format!("{:02}:{:02} UTC", minutes / 60, minutes % 60)
}

fn main() {
    println!("suncalc without chrono\n");

    // 2013-03-05 00:00:00 UTC near Kyiv
    let jd = JulianDate::from_utc(2013, 3, 5, 0, 0, 0.0).expect("Valid date");
    let (latitude, longitude) = (50.5, 30.5);

    println!("Julian Date: {:.6}", jd.julian_date());
    println!("Days since J2000: {:.6}\n", jd.days_since_j2000());

    let position = sun::solar_position_from_julian(jd, latitude, longitude).expect("Valid coordinates");
    println!("Sun:");
    println!("  Azimuth: {:.3}° (compass)", position.compass_azimuth());
    println!("  Altitude: {:.3}°", position.altitude_degrees());

    let times = sun::solar_times_from_julian(jd, latitude, longitude, 0.0, &TwilightAngles::standard())
        .expect("Valid coordinates");
    println!("  Solar noon: {}", clock(times.solar_noon()));
    for label in [twilight::SUNRISE, twilight::SUNSET, twilight::DAWN, twilight::DUSK] {
        match times.get(label) {
            Some(time) => println!("  {label}: {}", clock(time)),
            None => println!("  {label}: does not occur"),
        }
    }

    let illumination = moon::moon_illumination_from_julian(jd);
    println!("\nMoon:");
    println!(
        "  {:.1}% illuminated ({:?})",
        illumination.fraction() * 100.0,
        illumination.phase_name()
    );

    match moon::moon_times_from_julian(jd, latitude, longitude).expect("Valid coordinates") {
        MoonTimes::Events { rise, set } => {
            println!("  Rise: {}", rise.as_ref().map_or_else(|| "-".to_string(), clock));
            println!("  Set: {}", set.as_ref().map_or_else(|| "-".to_string(), clock));
        }
        MoonTimes::AlwaysUp => println!("  Up all day"),
        MoonTimes::AlwaysDown => println!("  Down all day"),
    }
}
