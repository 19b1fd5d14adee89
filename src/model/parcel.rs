use super::side::{ConfrontantKind, FaceRole, Side};
use super::vertex::Vertex;
use crate::error::{OperationError, Result};
use crate::math::azimuth::Dms;
use crate::math::polygon_2d::{ring_area, ring_perimeter};
use crate::math::Point2;
use crate::operations::classify::ClassifyFaces;

/// Coarse shape category used by lot descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParcelShape {
    /// Exactly four sides.
    Regular,
    Irregular,
}

/// One line of the vertex table: a corner and the bearing of the side leaving it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexRow {
    pub label: String,
    pub east: f64,
    pub north: f64,
    pub outgoing_azimuth: Option<Dms>,
}

/// A parcel with its ring, derived sides and enclosed area.
///
/// Values are never patched in place: reclassification and confrontant
/// overrides return a new `Parcel`. Role lookups such as [`Parcel::frontage`]
/// scan `sides` on every call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub name: String,
    pub group: String,
    pub vertices: Vec<Vertex>,
    pub sides: Vec<Side>,
    pub area: f64,
}

impl Parcel {
    /// Assembles a parcel and computes its area from the ring.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the side count differs from
    /// the vertex count.
    pub fn new(
        name: impl Into<String>,
        group: impl Into<String>,
        vertices: Vec<Vertex>,
        sides: Vec<Side>,
    ) -> Result<Self> {
        if vertices.len() != sides.len() {
            return Err(OperationError::InvalidInput(format!(
                "{} sides for {} vertices",
                sides.len(),
                vertices.len()
            ))
            .into());
        }
        let area = ring_area(&points_of(&vertices));
        Ok(Self {
            name: name.into(),
            group: group.into(),
            vertices,
            sides,
            area,
        })
    }

    /// Ring positions in vertex order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        points_of(&self.vertices)
    }

    /// Total boundary length.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        ring_perimeter(&self.points())
    }

    #[must_use]
    pub fn shape(&self) -> ParcelShape {
        if self.sides.len() == 4 {
            ParcelShape::Regular
        } else {
            ParcelShape::Irregular
        }
    }

    /// Iterates sides carrying `role`, in ring order.
    pub fn sides_with_role(&self, role: FaceRole) -> impl Iterator<Item = &Side> + '_ {
        self.sides.iter().filter(move |s| s.face_role == role)
    }

    #[must_use]
    pub fn frontage(&self) -> Option<&Side> {
        self.sides_with_role(FaceRole::Frontage).next()
    }

    /// Index of the frontage side, if one is set.
    #[must_use]
    pub fn frontage_index(&self) -> Option<usize> {
        self.sides
            .iter()
            .position(|s| s.face_role == FaceRole::Frontage)
    }

    #[must_use]
    pub fn rear(&self) -> Option<&Side> {
        self.sides_with_role(FaceRole::Rear).next()
    }

    #[must_use]
    pub fn left(&self) -> Option<&Side> {
        self.sides_with_role(FaceRole::Left).next()
    }

    #[must_use]
    pub fn right(&self) -> Option<&Side> {
        self.sides_with_role(FaceRole::Right).next()
    }

    #[must_use]
    pub fn others(&self) -> Vec<&Side> {
        self.sides_with_role(FaceRole::Other).collect()
    }

    /// Returns a copy classified around a new frontage side.
    ///
    /// # Errors
    ///
    /// Returns a classification error if `frontage_index` is out of range.
    pub fn reclassify(&self, frontage_index: usize) -> Result<Self> {
        let sides = ClassifyFaces::new(frontage_index).execute(&self.sides)?;
        Ok(Self {
            sides,
            ..self.clone()
        })
    }

    /// Returns a copy with one side's confrontant replaced by a user label.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if `side_index` is out of range.
    pub fn with_confrontant(&self, side_index: usize, label: impl Into<String>) -> Result<Self> {
        if side_index >= self.sides.len() {
            return Err(OperationError::InvalidInput(format!(
                "side index {side_index} is out of range for {} sides",
                self.sides.len()
            ))
            .into());
        }
        let mut sides = self.sides.clone();
        sides[side_index].confrontant = label.into();
        sides[side_index].confrontant_kind = ConfrontantKind::Manual;
        Ok(Self {
            sides,
            ..self.clone()
        })
    }

    /// Vertex table: every corner with the azimuth of the side leaving it.
    #[must_use]
    pub fn vertex_table(&self) -> Vec<VertexRow> {
        self.vertices
            .iter()
            .map(|v| VertexRow {
                label: v.label(),
                east: v.east,
                north: v.north,
                outgoing_azimuth: self
                    .sides
                    .iter()
                    .find(|s| s.from_vertex == v.index)
                    .map(Side::azimuth_dms),
            })
            .collect()
    }
}

fn points_of(vertices: &[Vertex]) -> Vec<Point2> {
    vertices.iter().map(Vertex::point).collect()
}
