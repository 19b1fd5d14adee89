mod classify_faces;
mod suggest_frontage;

pub use classify_faces::{classify, ClassifyFaces, REAR_MAX_DEVIATION_DEGREES};
pub use suggest_frontage::{suggest_frontage, DEFAULT_STREET_KEYWORDS};
