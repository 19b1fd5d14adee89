use tracing::debug;

use super::{ConfrontantLookup, ConfrontantMatch, DEFAULT_PUBLIC_SPACE_LABEL};
use crate::error::{OperationError, Result};
use crate::math::distance_2d::midpoint;
use crate::model::{ConfrontantKind, Side, Vertex};

/// Fills in the confrontant of every side from its midpoint.
///
/// Sides whose confrontant was set by the user ([`ConfrontantKind::Manual`])
/// are left alone.
pub struct ResolveConfrontants<'a, L: ConfrontantLookup + ?Sized> {
    ring: &'a [Vertex],
    sides: &'a [Side],
    lookup: &'a L,
    exclude: Option<usize>,
    public_label: String,
}

impl<'a, L: ConfrontantLookup + ?Sized> ResolveConfrontants<'a, L> {
    /// Creates a resolution over the sides of `ring`.
    #[must_use]
    pub fn new(ring: &'a [Vertex], sides: &'a [Side], lookup: &'a L) -> Self {
        Self {
            ring,
            sides,
            lookup,
            exclude: None,
            public_label: DEFAULT_PUBLIC_SPACE_LABEL.to_owned(),
        }
    }

    /// Skips the neighbor at `index` (the parcel itself).
    #[must_use]
    pub fn excluding(mut self, index: usize) -> Self {
        self.exclude = Some(index);
        self
    }

    /// Sets the label used for sides that confront nothing.
    #[must_use]
    pub fn with_public_label(mut self, label: impl Into<String>) -> Self {
        self.public_label = label.into();
        self
    }

    /// Executes the resolution, returning updated copies of the sides.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a side refers to a vertex
    /// that is not in the ring.
    pub fn execute(&self) -> Result<Vec<Side>> {
        self.sides
            .iter()
            .map(|side| {
                if side.confrontant_kind == ConfrontantKind::Manual {
                    return Ok(side.clone());
                }
                let a = self.vertex(side.from_vertex)?.point();
                let b = self.vertex(side.to_vertex)?.point();
                let mid = midpoint(&a, &b);

                let found = self.lookup.lookup(&mid, self.exclude);
                let (confrontant, kind) = match found {
                    ConfrontantMatch::Alignment { name, .. } => {
                        (name.to_owned(), ConfrontantKind::Alignment)
                    }
                    ConfrontantMatch::Neighbor { name, .. } => {
                        (name.to_owned(), ConfrontantKind::Neighbor)
                    }
                    ConfrontantMatch::Unmatched => {
                        (self.public_label.clone(), ConfrontantKind::PublicSpace)
                    }
                };
                debug!(side = %side.label(), %confrontant, ?kind, "resolved confrontant");

                Ok(Side {
                    confrontant,
                    confrontant_kind: kind,
                    ..side.clone()
                })
            })
            .collect()
    }

    fn vertex(&self, index: usize) -> Result<&Vertex> {
        self.ring.iter().find(|v| v.index == index).ok_or_else(|| {
            OperationError::InvalidInput(format!("side refers to missing vertex V{index}")).into()
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::model::{AlignmentCurve, NeighborParcel};
    use crate::operations::confront::LinearLookup;
    use crate::operations::sides::BuildSides;

    fn square() -> Vec<Vertex> {
        vec![
            Vertex::new(1, 0.0, 0.0),
            Vertex::new(2, 0.0, 10.0),
            Vertex::new(3, 10.0, 10.0),
            Vertex::new(4, 10.0, 0.0),
        ]
    }

    fn street_along_west(offset: f64) -> AlignmentCurve {
        let samples = (0..=12).map(|i| Point2::new(-offset, f64::from(i) - 1.0)).collect();
        AlignmentCurve::new("Main Street", samples)
    }

    #[test]
    fn half_unit_from_alignment_resolves_to_alignment() {
        let ring = square();
        let sides = BuildSides::new(&ring).execute();
        let alignments = [street_along_west(0.5)];
        let lookup = LinearLookup::new(&alignments, &[]);

        let resolved = ResolveConfrontants::new(&ring, &sides, &lookup).execute().unwrap();
        assert_eq!(resolved[0].confrontant, "Main Street");
        assert_eq!(resolved[0].confrontant_kind, ConfrontantKind::Alignment);
        assert_eq!(resolved[1].confrontant, DEFAULT_PUBLIC_SPACE_LABEL);
        assert_eq!(resolved[1].confrontant_kind, ConfrontantKind::PublicSpace);
    }

    #[test]
    fn two_units_from_everything_resolves_to_public_space() {
        let ring = square();
        let sides = BuildSides::new(&ring).execute();
        let alignments = [street_along_west(2.0)];
        let east = [
            Point2::new(12.0, 0.0),
            Point2::new(12.0, 10.0),
            Point2::new(22.0, 10.0),
            Point2::new(22.0, 0.0),
        ];
        let neighbors = [NeighborParcel::new("Lot 02", &east)];
        let lookup = LinearLookup::new(&alignments, &neighbors).with_tolerance(1.0);

        let resolved = ResolveConfrontants::new(&ring, &sides, &lookup)
            .with_public_label("Open Space")
            .execute()
            .unwrap();
        for side in &resolved {
            assert_eq!(side.confrontant, "Open Space");
        }
    }

    #[test]
    fn neighbor_edge_and_self_exclusion() {
        let ring = square();
        let sides = BuildSides::new(&ring).execute();
        let own: Vec<Point2> = ring.iter().map(Vertex::point).collect();
        let east = [
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(20.0, 10.0),
            Point2::new(20.0, 0.0),
        ];
        let neighbors = [
            NeighborParcel::new("Lot 01", &own),
            NeighborParcel::new("Lot 02", &east),
        ];
        let lookup = LinearLookup::new(&[], &neighbors);

        let resolved = ResolveConfrontants::new(&ring, &sides, &lookup)
            .excluding(0)
            .execute()
            .unwrap();
        assert_eq!(resolved[2].confrontant, "Lot 02");
        assert_eq!(resolved[2].confrontant_kind, ConfrontantKind::Neighbor);
        assert_eq!(resolved[0].confrontant_kind, ConfrontantKind::PublicSpace);
    }

    #[test]
    fn manual_labels_survive_resolution() {
        let ring = square();
        let mut sides = BuildSides::new(&ring).execute();
        sides[1].confrontant = "Creek".to_owned();
        sides[1].confrontant_kind = ConfrontantKind::Manual;
        let lookup = LinearLookup::new(&[], &[]);

        let resolved = ResolveConfrontants::new(&ring, &sides, &lookup).execute().unwrap();
        assert_eq!(resolved[1].confrontant, "Creek");
        assert_eq!(resolved[1].confrontant_kind, ConfrontantKind::Manual);
    }

    #[test]
    fn missing_vertex_is_an_error() {
        let ring = square();
        let mut sides = BuildSides::new(&ring).execute();
        sides[0].to_vertex = 9;
        let lookup = LinearLookup::new(&[], &[]);
        assert!(ResolveConfrontants::new(&ring, &sides, &lookup).execute().is_err());
    }
}
