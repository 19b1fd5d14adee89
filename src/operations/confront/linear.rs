use super::{ConfrontantLookup, ConfrontantMatch, DEFAULT_CONFRONTING_TOLERANCE};
use crate::math::distance_2d::{point_to_polyline_dist, point_to_segment_dist};
use crate::math::Point2;
use crate::model::{AlignmentCurve, NeighborParcel};

/// Brute-force lookup: measures every alignment segment and neighbor edge.
///
/// Cost per query is O(alignment samples + neighbor edges).
#[derive(Debug, Clone)]
pub struct LinearLookup<'a> {
    alignments: &'a [AlignmentCurve],
    neighbors: &'a [NeighborParcel<'a>],
    tolerance: f64,
}

impl<'a> LinearLookup<'a> {
    /// Creates a lookup with the default tolerance.
    #[must_use]
    pub fn new(alignments: &'a [AlignmentCurve], neighbors: &'a [NeighborParcel<'a>]) -> Self {
        Self {
            alignments,
            neighbors,
            tolerance: DEFAULT_CONFRONTING_TOLERANCE,
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl ConfrontantLookup for LinearLookup<'_> {
    fn lookup(&self, point: &Point2, exclude: Option<usize>) -> ConfrontantMatch<'_> {
        for alignment in self.alignments {
            let distance = point_to_polyline_dist(point, &alignment.samples);
            if distance < self.tolerance {
                return ConfrontantMatch::Alignment {
                    name: &alignment.name,
                    distance,
                };
            }
        }

        let mut best: Option<(usize, f64)> = None;
        for (i, neighbor) in self.neighbors.iter().enumerate() {
            if exclude == Some(i) {
                continue;
            }
            for (a, b) in neighbor.edges() {
                let d = point_to_segment_dist(point, a, b);
                if d < self.tolerance && best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((i, d));
                }
            }
        }

        match best {
            Some((i, distance)) => ConfrontantMatch::Neighbor {
                name: self.neighbors[i].name,
                distance,
            },
            None => ConfrontantMatch::Unmatched,
        }
    }
}
