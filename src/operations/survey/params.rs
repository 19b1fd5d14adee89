use crate::error::{OperationError, Result};
use crate::math::CLOSING_TOLERANCE;
use crate::operations::classify::DEFAULT_STREET_KEYWORDS;
use crate::operations::confront::{
    DEFAULT_CELL_SIZE, DEFAULT_CONFRONTING_TOLERANCE, DEFAULT_PUBLIC_SPACE_LABEL,
};

/// How confrontant candidates are searched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LookupStrategy {
    /// Measure every alignment segment and neighbor edge.
    #[default]
    Linear,
    /// Bucket segments into a uniform grid first.
    Grid { cell_size: f64 },
}

/// Parameters for the parcel survey pipeline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurveyParams {
    /// Points closer than this are merged during ring cleanup. Must be
    /// positive.
    pub closing_tolerance: f64,
    /// Maximum distance from a side midpoint to a confronting reference.
    pub confronting_tolerance: f64,
    /// Confrontant for sides that border nothing within tolerance.
    pub public_space_label: String,
    /// Words that mark a confrontant as a street when suggesting a frontage.
    pub street_keywords: Vec<String>,
    pub lookup: LookupStrategy,
    /// Length unit suffix used in narratives and confrontation tables.
    pub unit: String,
}

impl Default for SurveyParams {
    fn default() -> Self {
        Self {
            closing_tolerance: CLOSING_TOLERANCE,
            confronting_tolerance: DEFAULT_CONFRONTING_TOLERANCE,
            public_space_label: DEFAULT_PUBLIC_SPACE_LABEL.to_owned(),
            street_keywords: DEFAULT_STREET_KEYWORDS
                .iter()
                .map(|&k| k.to_owned())
                .collect(),
            lookup: LookupStrategy::Linear,
            unit: "m".to_owned(),
        }
    }
}

impl SurveyParams {
    /// Switches to the grid lookup with the default cell size.
    #[must_use]
    pub fn with_grid_lookup(mut self) -> Self {
        self.lookup = LookupStrategy::Grid {
            cell_size: DEFAULT_CELL_SIZE,
        };
        self
    }

    /// Checks that tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if a tolerance or the grid
    /// cell size is not positive or not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.closing_tolerance.is_finite() || self.closing_tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "closing tolerance must be positive, got {}",
                self.closing_tolerance
            ))
            .into());
        }
        if !self.confronting_tolerance.is_finite() || self.confronting_tolerance <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "confronting tolerance must be positive, got {}",
                self.confronting_tolerance
            ))
            .into());
        }
        if let LookupStrategy::Grid { cell_size } = self.lookup {
            if !cell_size.is_finite() || cell_size <= 0.0 {
                return Err(OperationError::InvalidInput(format!(
                    "grid cell size must be positive, got {cell_size}"
                ))
                .into());
            }
        }
        Ok(())
    }
}
