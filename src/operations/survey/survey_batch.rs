use std::collections::HashMap;

use tracing::{info, warn};

use super::{LookupStrategy, SurveyParams, SurveyParcel};
use crate::error::{LotlineError, Result};
use crate::model::{AlignmentCurve, Parcel, ParcelId, ParcelStore};
use crate::operations::confront::{ConfrontantLookup, GridLookup, LinearLookup};
use crate::operations::narrative::{
    confrontation_summary, BoundaryNarrative, ConfrontationRow, DescribeBoundary,
};

/// A parcel that made it through the pipeline, with its outputs rendered in
/// the batch's length unit.
#[derive(Debug, Clone)]
pub struct SurveyedParcel {
    pub id: ParcelId,
    pub parcel: Parcel,
    pub narrative: BoundaryNarrative,
    pub summary: Vec<ConfrontationRow>,
}

impl SurveyedParcel {
    fn new(id: ParcelId, parcel: Parcel, unit: &str) -> Self {
        let narrative = DescribeBoundary::new(&parcel).with_unit(unit).execute();
        let summary = confrontation_summary(&parcel, unit);
        Self {
            id,
            parcel,
            narrative,
            summary,
        }
    }
}

/// A parcel that was skipped, and why.
#[derive(Debug)]
pub struct ParcelWarning {
    pub id: ParcelId,
    /// Parcel name, empty if the ID was not in the store.
    pub name: String,
    pub error: LotlineError,
}

/// Result of a batch survey: every parcel that succeeded plus one warning per
/// parcel that failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub parcels: Vec<SurveyedParcel>,
    pub warnings: Vec<ParcelWarning>,
}

impl BatchReport {
    /// Surveyed parcel by ID.
    #[must_use]
    pub fn get(&self, id: ParcelId) -> Option<&Parcel> {
        self.parcels.iter().find(|s| s.id == id).map(|s| &s.parcel)
    }
}

/// Surveys a selection of parcels from a store.
///
/// Every other parcel in the store is a neighbor candidate. Each parcel is
/// processed on its own; a failure is logged and reported in
/// [`BatchReport::warnings`] without stopping the rest of the batch.
#[derive(Debug)]
pub struct SurveyBatch<'a> {
    store: &'a ParcelStore,
    alignments: &'a [AlignmentCurve],
    selection: Option<Vec<ParcelId>>,
    frontages: HashMap<ParcelId, usize>,
    params: SurveyParams,
}

impl<'a> SurveyBatch<'a> {
    /// Creates a batch over every parcel of `store`.
    #[must_use]
    pub fn new(store: &'a ParcelStore, alignments: &'a [AlignmentCurve]) -> Self {
        Self {
            store,
            alignments,
            selection: None,
            frontages: HashMap::new(),
            params: SurveyParams::default(),
        }
    }

    /// Restricts the batch to the given parcels, in the given order.
    #[must_use]
    pub fn select(mut self, ids: impl IntoIterator<Item = ParcelId>) -> Self {
        self.selection = Some(ids.into_iter().collect());
        self
    }

    /// Fixes the frontage side of one parcel instead of suggesting it.
    #[must_use]
    pub fn with_frontage(mut self, id: ParcelId, side_index: usize) -> Self {
        self.frontages.insert(id, side_index);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: SurveyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the batch.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the parameters are invalid.
    /// Per-parcel failures are reported in the returned [`BatchReport`].
    pub fn execute(&self) -> Result<BatchReport> {
        self.params.validate()?;

        let neighbors = self.store.neighbor_views();
        let tolerance = self.params.confronting_tolerance;

        let report = match self.params.lookup {
            LookupStrategy::Linear => {
                let lookup =
                    LinearLookup::new(self.alignments, &neighbors).with_tolerance(tolerance);
                self.run(&lookup)
            }
            LookupStrategy::Grid { cell_size } => {
                let lookup = GridLookup::new(self.alignments, &neighbors, tolerance, cell_size);
                self.run(&lookup)
            }
        };

        info!(
            surveyed = report.parcels.len(),
            skipped = report.warnings.len(),
            "parcel batch complete"
        );
        Ok(report)
    }

    fn run(&self, lookup: &dyn ConfrontantLookup) -> BatchReport {
        let ids: &[ParcelId] = match &self.selection {
            Some(ids) => ids,
            None => self.store.ids(),
        };

        let mut report = BatchReport::default();
        for &id in ids {
            let record = match self.store.get(id) {
                Ok(record) => record,
                Err(e) => {
                    warn!(?id, error = %e, "skipping parcel");
                    report.warnings.push(ParcelWarning {
                        id,
                        name: String::new(),
                        error: e.into(),
                    });
                    continue;
                }
            };

            let mut survey = SurveyParcel::new(record, lookup).with_params(self.params.clone());
            if let Some(index) = self.store.position(id) {
                survey = survey.excluding(index);
            }
            if let Some(&frontage) = self.frontages.get(&id) {
                survey = survey.with_frontage(frontage);
            }

            match survey.execute() {
                Ok(parcel) => {
                    report
                        .parcels
                        .push(SurveyedParcel::new(id, parcel, &self.params.unit));
                }
                Err(error) => {
                    warn!(parcel = %record.name, %error, "skipping parcel");
                    report.warnings.push(ParcelWarning {
                        id,
                        name: record.name.clone(),
                        error,
                    });
                }
            }
        }
        report
    }
}
