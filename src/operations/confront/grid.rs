use std::collections::HashMap;

use super::{ConfrontantLookup, ConfrontantMatch};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;
use crate::model::{AlignmentCurve, NeighborParcel};

/// Default grid cell edge length, in distance units.
pub const DEFAULT_CELL_SIZE: f64 = 8.0;

/// Position of a segment inside its owner: `(owner index, segment index)`.
type SegmentRef = (usize, usize);

type CellKey = (i64, i64);

/// Uniform-grid lookup over alignment segments and neighbor edges.
///
/// Every segment is registered in the cells it crosses, widened by one cell.
/// With a cell size of at least the tolerance, every segment closer than the
/// tolerance to a query point lives in the 3×3 block of cells around it, so
/// answers match [`LinearLookup`](super::LinearLookup) exactly, including
/// first-alignment priority and neighbor tie-break order.
#[derive(Debug, Clone)]
pub struct GridLookup<'a> {
    alignments: &'a [AlignmentCurve],
    neighbors: &'a [NeighborParcel<'a>],
    tolerance: f64,
    cell_size: f64,
    alignment_cells: HashMap<CellKey, Vec<SegmentRef>>,
    neighbor_cells: HashMap<CellKey, Vec<SegmentRef>>,
}

impl<'a> GridLookup<'a> {
    /// Builds the grid.
    ///
    /// `cell_size` is raised to `tolerance` when smaller; a non-positive
    /// value falls back to [`DEFAULT_CELL_SIZE`].
    #[must_use]
    pub fn new(
        alignments: &'a [AlignmentCurve],
        neighbors: &'a [NeighborParcel<'a>],
        tolerance: f64,
        cell_size: f64,
    ) -> Self {
        let cell_size = if cell_size.is_finite() && cell_size > 0.0 {
            cell_size
        } else {
            DEFAULT_CELL_SIZE
        };
        let cell_size = cell_size.max(tolerance);

        let mut alignment_cells: HashMap<CellKey, Vec<SegmentRef>> = HashMap::new();
        for (ai, alignment) in alignments.iter().enumerate() {
            for (si, w) in alignment.samples.windows(2).enumerate() {
                insert_segment(&mut alignment_cells, cell_size, &w[0], &w[1], (ai, si));
            }
        }

        let mut neighbor_cells: HashMap<CellKey, Vec<SegmentRef>> = HashMap::new();
        for (ni, neighbor) in neighbors.iter().enumerate() {
            for (ei, (a, b)) in neighbor.edges().enumerate() {
                insert_segment(&mut neighbor_cells, cell_size, a, b, (ni, ei));
            }
        }

        Self {
            alignments,
            neighbors,
            tolerance,
            cell_size,
            alignment_cells,
            neighbor_cells,
        }
    }

    /// Number of non-empty cells, for diagnostics.
    #[must_use]
    pub fn occupied_cells(&self) -> usize {
        self.alignment_cells.len() + self.neighbor_cells.len()
    }

    /// Sorted, de-duplicated segments registered around `point`.
    fn candidates(
        &self,
        cells: &HashMap<CellKey, Vec<SegmentRef>>,
        point: &Point2,
    ) -> Vec<SegmentRef> {
        let (cx, cy) = cell_of(point, self.cell_size);
        let mut found = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(list) = cells.get(&(cx + dx, cy + dy)) {
                    found.extend_from_slice(list);
                }
            }
        }
        found.sort_unstable();
        found.dedup();
        found
    }
}

impl ConfrontantLookup for GridLookup<'_> {
    fn lookup(&self, point: &Point2, exclude: Option<usize>) -> ConfrontantMatch<'_> {
        // Candidates are sorted by alignment index, so the first hit found
        // while walking them in order belongs to the earliest matching
        // alignment; its distance is the minimum over that alignment.
        let mut hit: Option<(usize, f64)> = None;
        for (ai, si) in self.candidates(&self.alignment_cells, point) {
            if let Some((hit_ai, _)) = hit {
                if ai != hit_ai {
                    break;
                }
            }
            let samples = &self.alignments[ai].samples;
            let d = point_to_segment_dist(point, &samples[si], &samples[si + 1]);
            if d < self.tolerance {
                hit = match hit {
                    Some((_, best)) if best <= d => hit,
                    _ => Some((ai, d)),
                };
            }
        }
        if let Some((ai, distance)) = hit {
            return ConfrontantMatch::Alignment {
                name: &self.alignments[ai].name,
                distance,
            };
        }

        let mut best: Option<(usize, f64)> = None;
        for (ni, ei) in self.candidates(&self.neighbor_cells, point) {
            if exclude == Some(ni) {
                continue;
            }
            let ring = self.neighbors[ni].ring;
            let a = &ring[ei];
            let b = &ring[(ei + 1) % ring.len()];
            let d = point_to_segment_dist(point, a, b);
            if d < self.tolerance && best.is_none_or(|(_, bd)| d < bd) {
                best = Some((ni, d));
            }
        }

        match best {
            Some((ni, distance)) => ConfrontantMatch::Neighbor {
                name: self.neighbors[ni].name,
                distance,
            },
            None => ConfrontantMatch::Unmatched,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn cell_of(p: &Point2, cell_size: f64) -> CellKey {
    (
        (p.x / cell_size).floor() as i64,
        (p.y / cell_size).floor() as i64,
    )
}

fn insert_segment(
    cells: &mut HashMap<CellKey, Vec<SegmentRef>>,
    cell_size: f64,
    a: &Point2,
    b: &Point2,
    seg: SegmentRef,
) {
    // Non-finite points can never be within tolerance of anything.
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return;
    }
    for key in segment_cells(a, b, cell_size) {
        cells.entry(key).or_default().push(seg);
    }
}

/// Cells covered by the segment `a`-`b`, widened by one cell on each side.
///
/// The segment is walked in steps of at most half a cell, so every point of
/// it lies within half a cell of a visited sample. Marking the 3×3 block
/// around each sample then keeps every query point closer than one cell to
/// the segment within one cell of a registered cell. The number of cells is
/// proportional to `length / cell_size`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn segment_cells(a: &Point2, b: &Point2, cell_size: f64) -> Vec<CellKey> {
    let length = (b - a).norm();
    let steps = (length / (0.5 * cell_size)).ceil().max(1.0) as usize;

    let mut keys = Vec::with_capacity(9 * (steps + 1));
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let (cx, cy) = cell_of(&a.lerp(b, t), cell_size);
        for dx in -1..=1 {
            for dy in -1..=1 {
                keys.push((cx + dx, cy + dy));
            }
        }
    }
    keys.sort_unstable();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::super::LinearLookup;
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn road(name: &str, y: f64) -> AlignmentCurve {
        let samples = (0..=40).map(|i| p(f64::from(i) * 0.5, y)).collect();
        AlignmentCurve::new(name, samples)
    }

    fn block() -> Vec<Vec<Point2>> {
        let mut rings = Vec::new();
        for col in 0..4_u32 {
            let x0 = f64::from(col) * 12.0;
            rings.push(vec![
                p(x0, 0.0),
                p(x0, 30.0),
                p(x0 + 12.0, 30.0),
                p(x0 + 12.0, 0.0),
            ]);
        }
        rings
    }

    #[test]
    fn matches_linear_lookup_on_a_block() {
        let rings = block();
        let names = ["Lot 01", "Lot 02", "Lot 03", "Lot 04"];
        let neighbors: Vec<_> = names
            .iter()
            .zip(&rings)
            .map(|(n, r)| NeighborParcel::new(n, r))
            .collect();
        let alignments = [road("First Street", -0.7), road("Second Street", -0.2)];

        let linear = LinearLookup::new(&alignments, &neighbors).with_tolerance(1.0);
        let grid = GridLookup::new(&alignments, &neighbors, 1.0, 3.0);

        for (own, ring) in rings.iter().enumerate() {
            for i in 0..ring.len() {
                let a = ring[i];
                let b = ring[(i + 1) % ring.len()];
                let mid = nalgebra::center(&a, &b);
                assert_eq!(
                    grid.lookup(&mid, Some(own)),
                    linear.lookup(&mid, Some(own)),
                    "parcel {own} side {i}"
                );
            }
        }
    }

    fn assert_same_answers(
        grid: &GridLookup<'_>,
        linear: &LinearLookup<'_>,
        points: &[Point2],
        exclude: Option<usize>,
    ) {
        for q in points {
            assert_eq!(
                grid.lookup(q, exclude),
                linear.lookup(q, exclude),
                "at ({}, {})",
                q.x,
                q.y
            );
        }
    }

    #[test]
    fn matches_linear_lookup_on_diagonal_edges() {
        let rings = [
            vec![p(0.0, 0.0), p(6.0, 9.0), p(15.0, 3.0)],
            vec![p(6.0, 9.0), p(9.0, 18.0), p(18.0, 12.0), p(15.0, 3.0)],
        ];
        let neighbors = [
            NeighborParcel::new("Lot 01", &rings[0]),
            NeighborParcel::new("Lot 02", &rings[1]),
        ];
        let diagonal = (0..=30)
            .map(|i| p(f64::from(i) * 0.7, 20.0 - f64::from(i) * 0.6))
            .collect();
        let alignments = [AlignmentCurve::new("Old Road", diagonal)];

        let linear = LinearLookup::new(&alignments, &neighbors).with_tolerance(1.0);
        let grid = GridLookup::new(&alignments, &neighbors, 1.0, 1.5);

        // Half-cell lattice: every other point sits exactly on a cell boundary.
        let lattice: Vec<_> = (-4..=44)
            .flat_map(|i| (-4..=44).map(move |j| p(f64::from(i) * 0.75, f64::from(j) * 0.75)))
            .collect();
        assert_same_answers(&grid, &linear, &lattice, None);
        assert_same_answers(&grid, &linear, &lattice, Some(1));
    }

    #[test]
    fn long_diagonal_edge_occupies_cells_along_its_length() {
        let ring = vec![p(0.0, 0.0), p(3000.0, 3000.0), p(3000.0, 0.0)];
        let neighbors = [NeighborParcel::new("Farm", &ring)];
        let linear = LinearLookup::new(&[], &neighbors).with_tolerance(1.0);
        let grid = GridLookup::new(&[], &neighbors, 1.0, 1.0);

        // Three edges totalling about 10_243 units; a bounding-box fill would
        // take millions of cells.
        assert!(grid.occupied_cells() < 100_000, "{}", grid.occupied_cells());

        let along: Vec<_> = (0..600)
            .flat_map(|i| {
                let t = f64::from(i) * 5.0;
                [p(t + 0.3, t - 0.4), p(t - 0.6, t + 0.2), p(t + 2.0, t - 2.0)]
            })
            .collect();
        assert_same_answers(&grid, &linear, &along, None);
        assert_eq!(grid.lookup(&p(1500.4, 1499.8), None).name(), Some("Farm"));
        assert_eq!(grid.lookup(&p(1500.0, 1000.0), None), ConfrontantMatch::Unmatched);
    }

    #[test]
    fn first_alignment_priority_is_kept() {
        let alignments = [road("Far Avenue", -0.9), road("Near Street", -0.1)];
        let grid = GridLookup::new(&alignments, &[], 1.0, DEFAULT_CELL_SIZE);
        assert_eq!(grid.lookup(&p(5.0, 0.0), None).name(), Some("Far Avenue"));
    }

    #[test]
    fn point_far_from_everything_is_unmatched() {
        let alignments = [road("Main Street", 0.0)];
        let grid = GridLookup::new(&alignments, &[], 1.0, DEFAULT_CELL_SIZE);
        assert_eq!(grid.lookup(&p(5.0, 2.0), None), ConfrontantMatch::Unmatched);
        assert_eq!(grid.lookup(&p(500.0, 500.0), None), ConfrontantMatch::Unmatched);
    }

    #[test]
    fn small_cell_size_is_raised_to_tolerance() {
        let alignments = [road("Main Street", -1.5)];
        let grid = GridLookup::new(&alignments, &[], 2.0, 0.1);
        assert_eq!(grid.lookup(&p(5.0, 0.0), None).name(), Some("Main Street"));
        assert!(grid.occupied_cells() > 0);
    }
}
