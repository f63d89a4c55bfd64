use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use suncalc::{SunCalc, TwilightAngles, moon, sun};

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2013-03-05T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 50.5;
    let lon = 30.5;
    let angles = TwilightAngles::standard();

    c.bench_function("solar_position_single", |b| {
        b.iter(|| sun::solar_position(black_box(&datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("solar_times_single", |b| {
        b.iter(|| {
            sun::solar_times(
                black_box(&datetime),
                black_box(lat),
                black_box(lon),
                black_box(0.0),
                black_box(&angles),
            )
            .unwrap()
        })
    });

    c.bench_function("moon_position_single", |b| {
        b.iter(|| moon::moon_position(black_box(&datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("moon_illumination_single", |b| {
        b.iter(|| moon::moon_illumination(black_box(&datetime)))
    });

    c.bench_function("moon_times_single", |b| {
        b.iter(|| moon::moon_times_utc(black_box(&datetime), black_box(lat), black_box(lon)).unwrap())
    });
}

fn benchmark_time_series_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_series_fixed_location");

    let base_datetime = "2013-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 50.5;
    let lon = 30.5;

    for &days in &[30_i64, 365] {
        group.throughput(Throughput::Elements(days as u64));

        group.bench_with_input(BenchmarkId::new("daily_report", days), &days, |b, &days| {
            b.iter(|| {
                for day in 0..days {
                    let calc = SunCalc::new(base_datetime + Duration::days(day));
                    black_box(calc.solar_times(lat, lon, 0.0).unwrap());
                    black_box(calc.moon_illumination());
                    black_box(calc.moon_times_utc(lat, lon).unwrap());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("hourly_positions", days), &days, |b, &days| {
            b.iter(|| {
                for hour in 0..days * 24 {
                    let dt = base_datetime + Duration::hours(hour);
                    black_box(sun::solar_position(&dt, lat, lon).unwrap());
                    black_box(moon::moon_position(&dt, lat, lon).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_sweep_fixed_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("coordinate_sweep_fixed_time");

    let datetime = "2013-06-21T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let calc = SunCalc::new(datetime);

    for &step in &[10.0_f64, 5.0] {
        let coordinates: Vec<(f64, f64)> = (0..)
            .map(|i| -80.0 + f64::from(i) * step)
            .take_while(|lat| *lat <= 80.0)
            .flat_map(|lat| {
                (0..)
                    .map(move |j| -180.0 + f64::from(j) * step)
                    .take_while(|lon| *lon <= 180.0)
                    .map(move |lon| (lat, lon))
            })
            .collect();
        group.throughput(Throughput::Elements(coordinates.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("solar_times_grid", coordinates.len()),
            &coordinates,
            |b, coordinates| {
                b.iter(|| {
                    for &(lat, lon) in coordinates {
                        black_box(calc.solar_times(lat, lon, 0.0).unwrap());
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_time_series_fixed_location,
    benchmark_coordinate_sweep_fixed_time
);

criterion_main!(benches);
