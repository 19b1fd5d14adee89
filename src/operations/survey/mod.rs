mod params;
mod survey_batch;
mod survey_parcel;

pub use params::{LookupStrategy, SurveyParams};
pub use survey_batch::{BatchReport, ParcelWarning, SurveyBatch, SurveyedParcel};
pub use survey_parcel::SurveyParcel;
