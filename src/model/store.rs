use slotmap::SlotMap;

use crate::error::OperationError;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a parcel in the parcel store.
    pub struct ParcelId;
}

/// Raw parcel geometry as delivered by the extraction layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParcelRecord {
    /// Parcel name, e.g. `Lot 07`.
    pub name: String,
    /// Block or site the parcel belongs to.
    pub group: String,
    /// Ordered boundary points, possibly repeating the first point at the end.
    pub points: Vec<Point2>,
}

impl ParcelRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(name: impl Into<String>, group: impl Into<String>, points: Vec<Point2>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            points,
        }
    }
}

/// Read-only view of another parcel's boundary, used as a confrontant candidate.
///
/// The ring is treated as closed: its last point connects back to the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborParcel<'a> {
    pub name: &'a str,
    pub ring: &'a [Point2],
}

impl<'a> NeighborParcel<'a> {
    /// Creates a neighbor view.
    #[must_use]
    pub fn new(name: &'a str, ring: &'a [Point2]) -> Self {
        Self { name, ring }
    }

    /// Iterates the closed ring's edges as `(start, end)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&'a Point2, &'a Point2)> + '_ {
        let n = self.ring.len();
        let ring = self.ring;
        (0..n).map(move |i| (&ring[i], &ring[(i + 1) % n]))
    }
}

/// Arena that owns the raw records of every parcel in a drawing.
///
/// Iteration follows insertion order, which is also the order neighbors are
/// scanned in during confrontant resolution.
#[derive(Debug, Default)]
pub struct ParcelStore {
    records: SlotMap<ParcelId, ParcelRecord>,
    order: Vec<ParcelId>,
}

impl ParcelStore {
    /// Creates a new, empty parcel store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parcel record and returns its ID.
    pub fn insert(&mut self, record: ParcelRecord) -> ParcelId {
        let id = self.records.insert(record);
        self.order.push(id);
        id
    }

    /// Removes a parcel record, returning it if it was present.
    pub fn remove(&mut self, id: ParcelId) -> Option<ParcelRecord> {
        let record = self.records.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(record)
    }

    /// Returns a reference to the record, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the parcel is not in the store.
    pub fn get(&self, id: ParcelId) -> Result<&ParcelRecord, OperationError> {
        self.records
            .get(id)
            .ok_or_else(|| OperationError::EntityNotFound("parcel".into()))
    }

    /// Number of parcels in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store holds no parcels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// IDs in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ParcelId] {
        &self.order
    }

    /// Iterates `(id, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParcelId, &ParcelRecord)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.records.get(id).map(|r| (id, r)))
    }

    /// Position of `id` in insertion order.
    #[must_use]
    pub fn position(&self, id: ParcelId) -> Option<usize> {
        self.order.iter().position(|&other| other == id)
    }

    /// Read-only neighbor views of every parcel, in insertion order.
    #[must_use]
    pub fn neighbor_views(&self) -> Vec<NeighborParcel<'_>> {
        self.iter()
            .map(|(_, r)| NeighborParcel::new(&r.name, &r.points))
            .collect()
    }
}
