//! Empirical atmospheric refraction.

#![allow(clippy::unreadable_literal)]

use crate::math::tan;

/// Atmospheric refraction (radians) to add to a geometric altitude `altitude` (radians).
///
/// Meeus, "Astronomical Algorithms" formula 16.4: `1.02 / tan(h + 10.26 / (h + 5.10))`
/// arc minutes with `h` in degrees, expressed here in radians. Negative altitudes are
/// treated as zero, where the formula tops out at roughly 0.5°; below the horizon it
/// would otherwise divide by zero at `h = -0.08901179`.
///
/// # Example
/// ```
/// # use suncalc::refraction::refraction;
/// let on_horizon = refraction(0.0);
/// assert!((on_horizon.to_degrees() - 0.484).abs() < 1e-3);
/// assert_eq!(refraction(-0.2), on_horizon);
/// ```
#[must_use]
pub fn refraction(altitude: f64) -> f64 {
    let h = if altitude < 0.0 { 0.0 } else { altitude };
    0.0002967 / tan(h + 0.00312536 / (h + 0.08901179))
}
