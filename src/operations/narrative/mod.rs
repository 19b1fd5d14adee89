mod describe_boundary;
mod summary;

pub use describe_boundary::{BoundaryNarrative, DescribeBoundary};
pub use summary::{confrontation_summary, ConfrontationRow};
