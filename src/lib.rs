//! Parcel boundary analysis.
//!
//! Turns a raw parcel outline into numbered vertices and oriented sides,
//! resolves what each side confronts (a road alignment, a neighboring parcel
//! or public space), classifies sides as frontage, rear, left, right or
//! other, and produces a boundary narrative.
//!
//! ```text
//! raw points ─► NormalizeRing ─► BuildSides ─► ResolveConfrontants ─► ClassifyFaces ─► DescribeBoundary
//! ```

pub mod error;
pub mod math;
pub mod model;
pub mod operations;

pub use error::{LotlineError, Result};
