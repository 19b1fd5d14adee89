pub mod azimuth;
pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type. `x` is the east coordinate, `y` the north coordinate.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Distance below which two consecutive ring points are the same survey point.
pub const CLOSING_TOLERANCE: f64 = 0.001;
