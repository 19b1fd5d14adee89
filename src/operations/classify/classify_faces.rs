use crate::error::{ClassificationError, Result};
use crate::math::azimuth::{angular_difference, normalize_degrees, relative_bearing};
use crate::model::{FaceRole, Side};

/// A side is only the rear if it points within this many degrees of the
/// direction opposite the frontage.
pub const REAR_MAX_DEVIATION_DEGREES: f64 = 45.0;

/// Assigns face roles to every side given the frontage side index.
///
/// Roles are always rebuilt from scratch, so the output depends only on the
/// sides' azimuths and the frontage index; any roles already present in the
/// input are ignored.
///
/// # Algorithm
///
/// 1. The chosen side is the **frontage**.
/// 2. The **rear** is the other side whose azimuth is closest to the
///    frontage azimuth + 180°, if that deviation is below 45°. Ties keep the
///    lowest index.
/// 3. Every remaining side is classified by its clockwise bearing relative
///    to the frontage: `[45, 135)` is **left**, `[225, 315)` is **right**,
///    anything else is **other**.
///
/// This assumes a roughly rectangular lot; irregular lots legitimately end
/// up with several `Other` sides.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyFaces {
    frontage_index: usize,
}

impl ClassifyFaces {
    #[must_use]
    pub fn new(frontage_index: usize) -> Self {
        Self { frontage_index }
    }

    /// Executes the classification, returning classified copies of `sides`.
    ///
    /// # Errors
    ///
    /// - `ClassificationError::NoSides` if `sides` is empty
    /// - `ClassificationError::FrontageOutOfRange` if the index is not a side
    pub fn execute(&self, sides: &[Side]) -> Result<Vec<Side>> {
        if sides.is_empty() {
            return Err(ClassificationError::NoSides.into());
        }
        let Some(frontage) = sides.get(self.frontage_index) else {
            return Err(ClassificationError::FrontageOutOfRange {
                index: self.frontage_index,
                side_count: sides.len(),
            }
            .into());
        };

        let az_frontage = frontage.azimuth_degrees;
        let opposite = normalize_degrees(az_frontage + 180.0);

        let mut rear: Option<(usize, f64)> = None;
        for (i, side) in sides.iter().enumerate() {
            if i == self.frontage_index {
                continue;
            }
            let diff = angular_difference(side.azimuth_degrees, opposite);
            if rear.is_none_or(|(_, best)| diff < best) {
                rear = Some((i, diff));
            }
        }
        let rear_index = rear
            .filter(|&(_, diff)| diff < REAR_MAX_DEVIATION_DEGREES)
            .map(|(i, _)| i);

        Ok(sides
            .iter()
            .enumerate()
            .map(|(i, side)| {
                let face_role = if i == self.frontage_index {
                    FaceRole::Frontage
                } else if Some(i) == rear_index {
                    FaceRole::Rear
                } else {
                    lateral_role(relative_bearing(side.azimuth_degrees, az_frontage))
                };
                Side {
                    face_role,
                    ..side.clone()
                }
            })
            .collect())
    }
}

/// Classifies `sides` around `frontage_index`. Shorthand for
/// [`ClassifyFaces::execute`].
///
/// # Errors
///
/// See [`ClassifyFaces::execute`].
pub fn classify(sides: &[Side], frontage_index: usize) -> Result<Vec<Side>> {
    ClassifyFaces::new(frontage_index).execute(sides)
}

fn lateral_role(rel: f64) -> FaceRole {
    if (45.0..135.0).contains(&rel) {
        FaceRole::Left
    } else if (225.0..315.0).contains(&rel) {
        FaceRole::Right
    } else {
        FaceRole::Other
    }
}
