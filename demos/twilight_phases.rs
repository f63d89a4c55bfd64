//! Sunlight phases for a day, including a custom "blue hour" angle.

use chrono::TimeZone;
use chrono_tz::Europe::Kyiv;
use suncalc::SunCalc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let date = Kyiv.with_ymd_and_hms(2013, 3, 5, 12, 0, 0).unwrap();
    let latitude = 50.5;
    let longitude = 30.5;

    let calc = SunCalc::new(date).with_twilight_angle(-4.0, "blueHourEnd", "blueHour");

    for height in [0.0, 2000.0] {
        let times = calc.solar_times(latitude, longitude, height)?;

        println!("Sunlight phases near Kyiv on {} at {height} m:", date.date_naive());
        for (label, time) in times.iter() {
            match time {
                Some(time) => println!("  {label:>14}: {}", time.format("%H:%M:%S %Z")),
                None => println!("  {label:>14}: does not occur"),
            }
        }

        if let (Some(sunrise), Some(sunset)) = (times.sunrise(), times.sunset()) {
            let day = sunset.clone() - sunrise.clone();
            println!(
                "  Day length: {}h {:02}m\n",
                day.num_hours(),
                day.num_minutes() % 60
            );
        }
    }

    Ok(())
}
