pub mod alignment;
pub mod parcel;
pub mod side;
pub mod store;
pub mod vertex;

pub use alignment::AlignmentCurve;
pub use parcel::{Parcel, ParcelShape, VertexRow};
pub use side::{ConfrontantKind, FaceRole, Side};
pub use store::{NeighborParcel, ParcelId, ParcelRecord, ParcelStore};
pub use vertex::Vertex;
