mod build_sides;

pub use build_sides::BuildSides;
