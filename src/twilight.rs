//! Named solar elevation angles ("twilight angles") for [`crate::sun::solar_times`].
//!
//! A [`TwilightAngles`] table is an ordered list of `(angle, morning label, evening label)`
//! entries. For every entry the solar-times calculation reports the instant the sun climbs
//! through the angle in the morning and sinks through it in the evening. The table is a
//! plain value: appending to one table never affects another, nor any result already
//! computed from it.
//!
//! # Example
//! ```
//! # use suncalc::twilight::TwilightAngles;
//! let angles = TwilightAngles::standard().with_angle(-3.0, "blueHourEnd", "blueHour");
//! assert_eq!(angles.len(), 7);
//! assert!(angles.contains_label("blueHour"));
//! ```

use alloc::borrow::Cow;
use alloc::vec::Vec;

/// Label of solar noon (transit) in [`crate::SolarTimes`].
pub const SOLAR_NOON: &str = "solarNoon";
/// Label of solar midnight in [`crate::SolarTimes`].
pub const NADIR: &str = "nadir";

/// Top edge of the sun appears on the horizon (morning, -0.833°).
pub const SUNRISE: &str = "sunrise";
/// Top edge of the sun disappears below the horizon (evening, -0.833°).
pub const SUNSET: &str = "sunset";
/// Bottom edge of the sun touches the horizon (morning, -0.3°).
pub const SUNRISE_END: &str = "sunriseEnd";
/// Bottom edge of the sun touches the horizon (evening, -0.3°).
pub const SUNSET_START: &str = "sunsetStart";
/// Civil dawn (morning, -6°).
pub const DAWN: &str = "dawn";
/// Civil dusk (evening, -6°).
pub const DUSK: &str = "dusk";
/// Nautical dawn (morning, -12°).
pub const NAUTICAL_DAWN: &str = "nauticalDawn";
/// Nautical dusk (evening, -12°).
pub const NAUTICAL_DUSK: &str = "nauticalDusk";
/// Astronomical night ends (morning, -18°).
pub const NIGHT_END: &str = "nightEnd";
/// Astronomical night starts (evening, -18°).
pub const NIGHT: &str = "night";
/// Morning golden hour ends (6°).
pub const GOLDEN_HOUR_END: &str = "goldenHourEnd";
/// Evening golden hour starts (6°).
pub const GOLDEN_HOUR: &str = "goldenHour";

/// One row of a [`TwilightAngles`] table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TwilightAngle {
    /// Solar elevation in degrees (negative below the horizon)
    angle: f64,
    morning_label: Cow<'static, str>,
    evening_label: Cow<'static, str>,
}

impl TwilightAngle {
    /// Creates an entry for `angle` degrees with the given morning and evening labels.
    pub fn new(
        angle: f64,
        morning_label: impl Into<Cow<'static, str>>,
        evening_label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            angle,
            morning_label: morning_label.into(),
            evening_label: evening_label.into(),
        }
    }

    const fn standard(angle: f64, morning_label: &'static str, evening_label: &'static str) -> Self {
        Self {
            angle,
            morning_label: Cow::Borrowed(morning_label),
            evening_label: Cow::Borrowed(evening_label),
        }
    }

    /// Gets the solar elevation angle in degrees.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        self.angle
    }

    /// Gets the label of the morning crossing.
    #[must_use]
    pub fn morning_label(&self) -> &str {
        &self.morning_label
    }

    /// Gets the label of the evening crossing.
    #[must_use]
    pub fn evening_label(&self) -> &str {
        &self.evening_label
    }

    pub(crate) fn labels(&self) -> (Cow<'static, str>, Cow<'static, str>) {
        (self.morning_label.clone(), self.evening_label.clone())
    }
}

/// Ordered, append-only table of twilight angles.
///
/// Entries are neither validated nor de-duplicated. When two entries share a label,
/// lookups on [`crate::SolarTimes`] resolve to the one appended last.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TwilightAngles {
    entries: Vec<TwilightAngle>,
}

impl TwilightAngles {
    /// Creates an empty table. Solar times computed with it only carry noon and nadir.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates the standard table: sunrise/sunset, sunrise end/sunset start, civil,
    /// nautical and astronomical twilight, and golden hour.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: alloc::vec![
                TwilightAngle::standard(-0.833, SUNRISE, SUNSET),
                TwilightAngle::standard(-0.3, SUNRISE_END, SUNSET_START),
                TwilightAngle::standard(-6.0, DAWN, DUSK),
                TwilightAngle::standard(-12.0, NAUTICAL_DAWN, NAUTICAL_DUSK),
                TwilightAngle::standard(-18.0, NIGHT_END, NIGHT),
                TwilightAngle::standard(6.0, GOLDEN_HOUR_END, GOLDEN_HOUR),
            ],
        }
    }

    /// Appends an entry.
    pub fn add(
        &mut self,
        angle: f64,
        morning_label: impl Into<Cow<'static, str>>,
        evening_label: impl Into<Cow<'static, str>>,
    ) {
        self.entries
            .push(TwilightAngle::new(angle, morning_label, evening_label));
    }

    /// Returns the table with an entry appended.
    #[must_use]
    pub fn with_angle(
        mut self,
        angle: f64,
        morning_label: impl Into<Cow<'static, str>>,
        evening_label: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.add(angle, morning_label, evening_label);
        self
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in the order they were added.
    pub fn iter(&self) -> core::slice::Iter<'_, TwilightAngle> {
        self.entries.iter()
    }

    /// Whether any entry uses `label` as its morning or evening label.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.morning_label() == label || entry.evening_label() == label)
    }
}

impl Default for TwilightAngles {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> IntoIterator for &'a TwilightAngles {
    type Item = &'a TwilightAngle;
    type IntoIter = core::slice::Iter<'a, TwilightAngle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
