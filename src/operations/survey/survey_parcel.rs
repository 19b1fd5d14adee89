use super::SurveyParams;
use crate::error::Result;
use crate::model::{Parcel, ParcelRecord};
use crate::operations::classify::{suggest_frontage, ClassifyFaces};
use crate::operations::confront::{ConfrontantLookup, ResolveConfrontants};
use crate::operations::ring::NormalizeRing;
use crate::operations::sides::BuildSides;

/// Runs the full pipeline for one raw parcel:
/// normalize ring → build sides → resolve confrontants → classify faces.
///
/// Without an explicit frontage the side suggested by
/// [`suggest_frontage`] is used.
pub struct SurveyParcel<'a> {
    record: &'a ParcelRecord,
    lookup: &'a dyn ConfrontantLookup,
    exclude: Option<usize>,
    frontage: Option<usize>,
    params: SurveyParams,
}

impl<'a> SurveyParcel<'a> {
    /// Creates a survey with default parameters.
    ///
    /// The lookup's own tolerance governs confrontant matching.
    #[must_use]
    pub fn new(record: &'a ParcelRecord, lookup: &'a dyn ConfrontantLookup) -> Self {
        Self {
            record,
            lookup,
            exclude: None,
            frontage: None,
            params: SurveyParams::default(),
        }
    }

    /// Skips the neighbor at `index` during confrontant lookup.
    #[must_use]
    pub fn excluding(mut self, index: usize) -> Self {
        self.exclude = Some(index);
        self
    }

    /// Uses the given side as frontage instead of the suggested one.
    #[must_use]
    pub fn with_frontage(mut self, index: usize) -> Self {
        self.frontage = Some(index);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: SurveyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// - ring errors if the points do not form a ring of at least 3 vertices
    /// - classification errors if the explicit frontage is out of range
    pub fn execute(&self) -> Result<Parcel> {
        let ring = NormalizeRing::new(&self.record.points)
            .with_tolerance(self.params.closing_tolerance)
            .execute()?;
        let sides = BuildSides::new(&ring).execute();

        let mut resolve = ResolveConfrontants::new(&ring, &sides, self.lookup)
            .with_public_label(self.params.public_space_label.clone());
        if let Some(index) = self.exclude {
            resolve = resolve.excluding(index);
        }
        let sides = resolve.execute()?;

        let frontage = self.frontage.unwrap_or_else(|| {
            suggest_frontage(&sides, self.params.street_keywords.as_slice())
        });
        let sides = ClassifyFaces::new(frontage).execute(&sides)?;

        Parcel::new(
            self.record.name.clone(),
            self.record.group.clone(),
            ring,
            sides,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{LotlineError, RingError};
    use crate::math::Point2;
    use crate::model::{AlignmentCurve, ConfrontantKind, FaceRole};
    use crate::operations::confront::LinearLookup;

    fn lot() -> ParcelRecord {
        ParcelRecord::new(
            "Lot 01",
            "Block A",
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 10.0),
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 0.0),
                Point2::new(0.0, 0.0),
            ],
        )
    }

    fn east_road() -> AlignmentCurve {
        AlignmentCurve::from_polyline(
            "Harbor Road",
            &[Point2::new(10.5, -5.0), Point2::new(10.5, 15.0)],
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn suggested_frontage_faces_the_road() {
        let record = lot();
        let alignments = [east_road()];
        let lookup = LinearLookup::new(&alignments, &[]);
        let parcel = SurveyParcel::new(&record, &lookup).execute().unwrap();

        assert_eq!(parcel.vertices.len(), 4);
        assert_eq!(parcel.sides.len(), 4);
        assert!((parcel.area - 100.0).abs() < 1e-9);

        let frontage = parcel.frontage().unwrap();
        assert_eq!(frontage.from_vertex, 3);
        assert_eq!(frontage.confrontant, "Harbor Road");
        assert_eq!(frontage.confrontant_kind, ConfrontantKind::Alignment);
        assert_eq!(parcel.rear().unwrap().from_vertex, 1);
    }

    #[test]
    fn explicit_frontage_overrides_suggestion() {
        let record = lot();
        let alignments = [east_road()];
        let lookup = LinearLookup::new(&alignments, &[]);
        let parcel = SurveyParcel::new(&record, &lookup)
            .with_frontage(1)
            .execute()
            .unwrap();
        assert_eq!(parcel.sides[1].face_role, FaceRole::Frontage);
        assert_eq!(parcel.sides[3].face_role, FaceRole::Rear);
    }

    #[test]
    fn custom_public_label() {
        let record = lot();
        let lookup = LinearLookup::new(&[], &[]);
        let params = SurveyParams {
            public_space_label: "Green Belt".to_owned(),
            ..SurveyParams::default()
        };
        let parcel = SurveyParcel::new(&record, &lookup)
            .with_params(params)
            .execute()
            .unwrap();
        assert!(parcel.sides.iter().all(|s| s.confrontant == "Green Belt"));
        assert_eq!(parcel.frontage_index(), Some(0));
    }

    #[test]
    fn degenerate_record_fails() {
        let record = ParcelRecord::new(
            "Sliver",
            "Block A",
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)],
        );
        let lookup = LinearLookup::new(&[], &[]);
        let err = SurveyParcel::new(&record, &lookup).execute().unwrap_err();
        assert!(matches!(
            err,
            LotlineError::Ring(RingError::InsufficientVertices { found: 2 })
        ));
    }
}
