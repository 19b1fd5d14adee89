use tracing::debug;

use crate::error::{OperationError, Result, RingError};
use crate::math::{Point2, CLOSING_TOLERANCE};
use crate::model::Vertex;

/// Cleans a raw boundary point sequence into an implicitly closed ring.
///
/// # Algorithm
///
/// 1. Drop every point closer than `tolerance` to the previously kept point
///    (micro-edges from digitizing noise).
/// 2. Drop trailing points closer than `tolerance` to the first point (a
///    repeated closing point).
/// 3. Number the survivors from 1.
#[derive(Debug)]
pub struct NormalizeRing<'a> {
    points: &'a [Point2],
    tolerance: f64,
}

impl<'a> NormalizeRing<'a> {
    /// Creates a ring normalization with the default closing tolerance.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self {
            points,
            tolerance: CLOSING_TOLERANCE,
        }
    }

    /// Sets the distance below which two points are considered the same.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the normalization.
    ///
    /// # Errors
    ///
    /// - `RingError::NonFiniteCoordinate` if any coordinate is NaN or infinite
    /// - `RingError::InsufficientVertices` if fewer than 3 distinct points remain
    /// - `OperationError::InvalidInput` if the tolerance is not positive or not
    ///   finite
    pub fn execute(&self) -> Result<Vec<Vertex>> {
        // Zero would keep an exact repeated closing point as a zero-length side.
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "closing tolerance must be positive, got {}",
                self.tolerance
            ))
            .into());
        }
        if let Some(index) = self
            .points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(RingError::NonFiniteCoordinate { index }.into());
        }

        let mut kept: Vec<Point2> = Vec::with_capacity(self.points.len());
        for p in self.points {
            match kept.last() {
                Some(last) if (p - last).norm() < self.tolerance => {}
                _ => kept.push(*p),
            }
        }

        while kept.len() > 1 && (kept[kept.len() - 1] - kept[0]).norm() < self.tolerance {
            kept.pop();
        }

        if kept.len() < 3 {
            return Err(RingError::InsufficientVertices { found: kept.len() }.into());
        }

        let dropped = self.points.len() - kept.len();
        if dropped > 0 {
            debug!(dropped, remaining = kept.len(), "removed duplicate ring points");
        }

        Ok(kept
            .iter()
            .enumerate()
            .map(|(i, p)| Vertex::new(i + 1, p.x, p.y))
            .collect())
    }
}
