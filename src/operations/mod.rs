pub mod classify;
pub mod confront;
pub mod narrative;
pub mod ring;
pub mod sides;
pub mod survey;
