use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Minimum number of intervals an alignment is resampled into.
const MIN_INTERVALS: usize = 10;

/// A named reference polyline, such as a road centerline.
///
/// Samples are an ordered, open polyline; consecutive samples form the
/// segments measured during confrontant resolution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentCurve {
    pub name: String,
    pub samples: Vec<Point2>,
}

impl AlignmentCurve {
    /// Creates an alignment from already sampled points.
    #[must_use]
    pub fn new(name: impl Into<String>, samples: Vec<Point2>) -> Self {
        Self {
            name: name.into(),
            samples,
        }
    }

    /// Resamples a polyline at equal arc-length steps no longer than
    /// `max_interval`, using at least ten intervals.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if fewer than 2 points are given
    /// or `max_interval` is not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_polyline(
        name: impl Into<String>,
        points: &[Point2],
        max_interval: f64,
    ) -> Result<Self> {
        if points.len() < 2 {
            return Err(OperationError::InvalidInput(
                "alignment polyline needs at least 2 points".to_owned(),
            )
            .into());
        }
        if max_interval <= 0.0 || !max_interval.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "sampling interval must be positive, got {max_interval}"
            ))
            .into());
        }

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for w in points.windows(2) {
            total += (w[1] - w[0]).norm();
            cumulative.push(total);
        }

        let intervals = interval_count(total, max_interval);
        let step = total / intervals as f64;

        let mut samples = Vec::with_capacity(intervals + 1);
        let mut seg = 0;
        for i in 0..=intervals {
            let station = if i == intervals { total } else { step * i as f64 };
            while seg + 2 < cumulative.len() && cumulative[seg + 1] < station {
                seg += 1;
            }
            let seg_len = cumulative[seg + 1] - cumulative[seg];
            let t = if seg_len > 0.0 {
                ((station - cumulative[seg]) / seg_len).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let a = points[seg];
            let b = points[seg + 1];
            samples.push(a + (b - a) * t);
        }

        Ok(Self::new(name, samples))
    }

    /// Total length of the sampled polyline.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.samples.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn interval_count(length: f64, max_interval: f64) -> usize {
    let needed = (length / max_interval).ceil();
    if needed.is_finite() && needed > MIN_INTERVALS as f64 {
        needed as usize
    } else {
        MIN_INTERVALS
    }
}
