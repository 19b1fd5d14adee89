use std::fmt;

use crate::model::{Parcel, Side};

/// Traversal statement of a classified parcel boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryNarrative {
    /// Opening clause naming the starting vertex.
    pub opening: String,
    /// One clause per side, in traversal order.
    pub segments: Vec<String>,
}

impl BoundaryNarrative {
    /// Full statement as a single paragraph.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoundaryNarrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return Ok(());
        }
        write!(f, "{}{}", self.opening, self.segments.join(" "))
    }
}

/// Builds the boundary narrative of a parcel.
///
/// Sides are visited frontage, right, rear, left, then every other side in
/// ring order. The statement opens at vertex V1 and its last clause returns
/// to V1.
#[derive(Debug)]
pub struct DescribeBoundary<'a> {
    parcel: &'a Parcel,
    unit: String,
}

impl<'a> DescribeBoundary<'a> {
    #[must_use]
    pub fn new(parcel: &'a Parcel) -> Self {
        Self {
            parcel,
            unit: "m".to_owned(),
        }
    }

    /// Sets the length unit suffix.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn execute(&self) -> BoundaryNarrative {
        let ordered = traversal_order(&self.parcel.sides);
        let start = self
            .parcel
            .vertices
            .first()
            .map_or(1, |v| v.index);
        let last = ordered.len().saturating_sub(1);

        let segments = ordered
            .iter()
            .enumerate()
            .map(|(i, side)| {
                let head = format!(
                    "from vertex V{}, proceeds with azimuth {}, confronting {}, for {:.3} {}, ",
                    side.from_vertex,
                    side.azimuth_dms(),
                    side.confrontant,
                    side.length,
                    self.unit
                );
                if i == last {
                    format!("{head}returning to the starting point, vertex V{start}.")
                } else {
                    format!("{head}to vertex V{};", side.to_vertex)
                }
            })
            .collect();

        BoundaryNarrative {
            opening: format!("Starting at vertex V{start}, "),
            segments,
        }
    }
}

/// Sides sorted by traversal rank; the sort is stable so ties keep ring order.
fn traversal_order(sides: &[Side]) -> Vec<&Side> {
    let mut ordered: Vec<&Side> = sides.iter().collect();
    ordered.sort_by_key(|s| s.face_role.traversal_rank());
    ordered
}
