use crate::math::azimuth::azimuth_degrees;
use crate::model::{Side, Vertex};

/// Derives one oriented side per consecutive vertex pair of a ring,
/// including the closing side from the last vertex back to the first.
///
/// The ring is expected to come from
/// [`NormalizeRing`](crate::operations::ring::NormalizeRing); degenerate
/// edges are not filtered again here.
#[derive(Debug)]
pub struct BuildSides<'a> {
    ring: &'a [Vertex],
}

impl<'a> BuildSides<'a> {
    #[must_use]
    pub fn new(ring: &'a [Vertex]) -> Self {
        Self { ring }
    }

    /// Executes the construction, returning unresolved, unclassified sides.
    #[must_use]
    pub fn execute(&self) -> Vec<Side> {
        let n = self.ring.len();
        (0..n)
            .map(|i| {
                let from = &self.ring[i];
                let to = &self.ring[(i + 1) % n];
                let (a, b) = (from.point(), to.point());
                Side::new(from.index, to.index, (b - a).norm(), azimuth_degrees(&a, &b))
            })
            .collect()
    }
}
