//! Basic sun and moon position example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use suncalc::{moon, sun};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Kyiv local time with a fixed offset
    let datetime_fixed = "2013-03-05T02:00:00+02:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same moment in UTC
    let datetime_utc = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
    let latitude = 50.5;
    let longitude = 30.5;

    let sun_fixed = sun::solar_position(&datetime_fixed, latitude, longitude)?;
    let sun_utc = sun::solar_position(&datetime_utc, latitude, longitude)?;

    println!("Sun position near Kyiv on March 5, 2013 at 02:00 local time:");
    println!("  Azimuth: {:.3}° (compass)", sun_fixed.compass_azimuth());
    println!("  Altitude: {:.3}°", sun_fixed.altitude_degrees());

    println!(
        "\nFixedOffset and UTC inputs give identical results: {}",
        sun_fixed == sun_utc
    );

    let moon = moon::moon_position(&datetime_utc, latitude, longitude)?;
    println!("\nMoon position:");
    println!("  Azimuth: {:.3}° (compass)", moon.compass_azimuth());
    println!("  Altitude: {:.3}°", moon.altitude().to_degrees());
    println!("  Distance: {:.0} km", moon.distance());
    println!("  Parallactic angle: {:.3}°", moon.parallactic_angle().to_degrees());

    if moon.is_above_horizon() {
        println!("  Moon is above the horizon");
    } else {
        println!("  Moon is below the horizon");
    }

    Ok(())
}
