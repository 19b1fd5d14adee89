//! Bearing arithmetic in degrees, measured clockwise from north.

use std::fmt;

use super::Point2;

const HUNDREDTHS_PER_DEGREE: i64 = 360_000;
const HUNDREDTHS_PER_MINUTE: i64 = 6_000;

/// Maps any angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Azimuth of the direction `from`→`to`, in degrees `[0, 360)`.
///
/// North (+y) is 0°, east (+x) is 90°.
#[must_use]
pub fn azimuth_degrees(from: &Point2, to: &Point2) -> f64 {
    let d = to - from;
    normalize_degrees(d.x.atan2(d.y).to_degrees())
}

/// Smallest angle between two bearings, in `[0, 180]`.
#[must_use]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Clockwise angle from `reference` to `azimuth`, in `[0, 360)`.
#[must_use]
pub fn relative_bearing(azimuth: f64, reference: f64) -> f64 {
    normalize_degrees(azimuth - reference)
}

/// An azimuth split into degrees, minutes and hundredths of a second.
///
/// Rounding happens once, on the total, so a value such as
/// `359.99999999` becomes `000°00'00.00"` rather than `359°59'60.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Seconds multiplied by 100.
    pub centiseconds: u16,
}

impl Dms {
    /// Converts a bearing in decimal degrees.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_degrees(angle: f64) -> Self {
        let total = (normalize_degrees(angle) * 360_000.0).round() as i64;
        let total = total.rem_euclid(HUNDREDTHS_PER_DEGREE * 360);

        let degrees = total / HUNDREDTHS_PER_DEGREE;
        let rem = total % HUNDREDTHS_PER_DEGREE;
        let minutes = rem / HUNDREDTHS_PER_MINUTE;
        let centiseconds = rem % HUNDREDTHS_PER_MINUTE;

        Self {
            degrees: degrees as u16,
            minutes: minutes as u8,
            centiseconds: centiseconds as u16,
        }
    }

    /// Seconds component as a float.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        f64::from(self.centiseconds) / 100.0
    }

    /// Converts back to decimal degrees.
    #[must_use]
    pub fn to_degrees(&self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds() / 3600.0
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}°{:02}'{:02}.{:02}\"",
            self.degrees,
            self.minutes,
            self.centiseconds / 100,
            self.centiseconds % 100
        )
    }
}
