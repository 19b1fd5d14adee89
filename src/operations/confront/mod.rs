//! Confrontant resolution: what each parcel side borders.
//!
//! A [`ConfrontantLookup`] answers "what is within tolerance of this point"
//! with a fixed policy:
//!
//! 1. Alignments are tried in caller order and the **first** one whose
//!    polyline comes within tolerance wins, even if a later alignment is
//!    closer.
//! 2. Otherwise the globally nearest neighbor edge within tolerance wins;
//!    equal distances keep the earlier neighbor, then the earlier edge.
//! 3. Otherwise the point is unmatched (public space).
//!
//! [`LinearLookup`] scans everything; [`GridLookup`] buckets segments into a
//! uniform grid and gives identical answers.

mod grid;
mod linear;
mod resolve_confrontants;

pub use grid::{GridLookup, DEFAULT_CELL_SIZE};
pub use linear::LinearLookup;
pub use resolve_confrontants::ResolveConfrontants;

use crate::math::Point2;

/// Default distance within which a reference counts as confronting a side.
pub const DEFAULT_CONFRONTING_TOLERANCE: f64 = 1.0;

/// Label used when nothing is within tolerance.
pub const DEFAULT_PUBLIC_SPACE_LABEL: &str = "Public Area";

/// Outcome of a confrontant lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfrontantMatch<'a> {
    Alignment { name: &'a str, distance: f64 },
    Neighbor { name: &'a str, distance: f64 },
    Unmatched,
}

impl ConfrontantMatch<'_> {
    /// Matched name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Alignment { name, .. } | Self::Neighbor { name, .. } => Some(name),
            Self::Unmatched => None,
        }
    }
}

/// Spatial query used to find what a side's midpoint confronts.
pub trait ConfrontantLookup {
    /// Resolves `point` against alignments and neighbors.
    ///
    /// `exclude` is the index of a neighbor to skip, normally the parcel
    /// being processed when neighbors come from the same store.
    fn lookup(&self, point: &Point2, exclude: Option<usize>) -> ConfrontantMatch<'_>;
}
