//! A week of moon phases and moonrise/moonset times.

use chrono::{Duration, TimeZone};
use chrono_tz::Europe::Kyiv;
use suncalc::{MoonTimes, SunCalc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Kyiv.with_ymd_and_hms(2013, 3, 1, 12, 0, 0).unwrap();
    let latitude = 50.5;
    let longitude = 30.5;

    println!("Moon near Kyiv, first week of March 2013 (local time):");
    for day in 0..7 {
        let calc = SunCalc::new(start + Duration::days(day));
        let illumination = calc.moon_illumination();

        let events = match calc.moon_times(latitude, longitude)? {
            MoonTimes::Events { rise, set } => {
                let show = |time: Option<chrono::DateTime<chrono_tz::Tz>>| {
                    time.map_or_else(|| "--:--".to_string(), |t| t.format("%H:%M").to_string())
                };
                format!("rise {}  set {}", show(rise), show(set))
            }
            MoonTimes::AlwaysUp => "up all day".to_string(),
            MoonTimes::AlwaysDown => "down all day".to_string(),
        };

        println!(
            "  {}  {:>5.1}% lit  {:<16}  {events}",
            calc.datetime().date_naive(),
            illumination.fraction() * 100.0,
            format!("{:?}", illumination.phase_name()),
        );
    }

    // Near the pole the moon can stay on one side of the horizon all day.
    let arctic = SunCalc::new(chrono::Utc.with_ymd_and_hms(2013, 3, 16, 0, 0, 0).unwrap());
    println!(
        "\nAt 89°N on 2013-03-16 (UTC day): {:?}",
        arctic.moon_times_utc(89.0, 0.0)?
    );

    Ok(())
}
