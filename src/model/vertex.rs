use crate::math::Point2;

/// A numbered corner of a parcel ring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// 1-based position in the ring.
    pub index: usize,
    /// East coordinate.
    pub east: f64,
    /// North coordinate.
    pub north: f64,
}

impl Vertex {
    /// Creates a new vertex.
    #[must_use]
    pub fn new(index: usize, east: f64, north: f64) -> Self {
        Self { index, east, north }
    }

    /// Returns the vertex position as a point (`x` = east, `y` = north).
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.east, self.north)
    }

    /// Survey label, e.g. `V3`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("V{}", self.index)
    }
}
