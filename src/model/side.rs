use std::fmt;

use crate::math::azimuth::Dms;

/// Semantic role of a side relative to the chosen frontage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FaceRole {
    Frontage,
    Rear,
    Left,
    Right,
    Other,
    #[default]
    Unclassified,
}

impl FaceRole {
    /// Position of the role in the boundary traversal order
    /// (frontage, right, rear, left, then everything else).
    #[must_use]
    pub fn traversal_rank(self) -> u8 {
        match self {
            Self::Frontage => 0,
            Self::Right => 1,
            Self::Rear => 2,
            Self::Left => 3,
            Self::Other | Self::Unclassified => 4,
        }
    }
}

impl fmt::Display for FaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Frontage => "Frontage",
            Self::Rear => "Rear",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Other => "Other",
            Self::Unclassified => "Unclassified",
        };
        f.write_str(s)
    }
}

/// Where a side's confrontant label came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfrontantKind {
    #[default]
    Unresolved,
    /// A road alignment within tolerance.
    Alignment,
    /// The nearest neighboring parcel edge within tolerance.
    Neighbor,
    /// Nothing within tolerance.
    PublicSpace,
    /// Set by the user.
    Manual,
}

/// An oriented side of a parcel ring, from one vertex to the next.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Side {
    /// 1-based index of the starting vertex.
    pub from_vertex: usize,
    /// 1-based index of the ending vertex.
    pub to_vertex: usize,
    pub length: f64,
    /// Bearing clockwise from north, in `[0, 360)`.
    pub azimuth_degrees: f64,
    pub confrontant: String,
    pub confrontant_kind: ConfrontantKind,
    pub face_role: FaceRole,
}

impl Side {
    /// Creates an unresolved, unclassified side.
    #[must_use]
    pub fn new(from_vertex: usize, to_vertex: usize, length: f64, azimuth_degrees: f64) -> Self {
        Self {
            from_vertex,
            to_vertex,
            length,
            azimuth_degrees,
            confrontant: String::new(),
            confrontant_kind: ConfrontantKind::Unresolved,
            face_role: FaceRole::Unclassified,
        }
    }

    /// Azimuth as degrees-minutes-seconds.
    #[must_use]
    pub fn azimuth_dms(&self) -> Dms {
        Dms::from_degrees(self.azimuth_degrees)
    }

    /// Label such as `V1→V2`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("V{}→V{}", self.from_vertex, self.to_vertex)
    }
}
