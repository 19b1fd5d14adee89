use std::fmt;

use crate::math::azimuth::Dms;
use crate::model::{FaceRole, Parcel, Side};

/// One line of a confrontation table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfrontationRow {
    pub role: FaceRole,
    pub from_vertex: usize,
    pub to_vertex: usize,
    pub length: f64,
    pub confrontant: String,
    pub azimuth: Dms,
    /// Length unit suffix, e.g. `"m"`.
    pub unit: String,
}

impl ConfrontationRow {
    fn from_side(side: &Side, unit: &str) -> Self {
        Self {
            role: side.face_role,
            from_vertex: side.from_vertex,
            to_vertex: side.to_vertex,
            length: side.length,
            confrontant: side.confrontant.clone(),
            azimuth: side.azimuth_dms(),
            unit: unit.to_owned(),
        }
    }
}

impl fmt::Display for ConfrontationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} {} with {}. Az: {}",
            self.role, self.length, self.unit, self.confrontant, self.azimuth
        )
    }
}

/// Rows in table order: frontage, rear, right, left, then other and
/// unclassified sides. Within a role, sides keep ring order. Lengths are
/// labelled with `unit`.
#[must_use]
pub fn confrontation_summary(parcel: &Parcel, unit: &str) -> Vec<ConfrontationRow> {
    TABLE_ORDER
        .iter()
        .flat_map(|&role| parcel.sides_with_role(role))
        .map(|side| ConfrontationRow::from_side(side, unit))
        .collect()
}

const TABLE_ORDER: [FaceRole; 6] = [
    FaceRole::Frontage,
    FaceRole::Rear,
    FaceRole::Right,
    FaceRole::Left,
    FaceRole::Other,
    FaceRole::Unclassified,
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Vertex;
    use crate::operations::sides::BuildSides;

    #[test]
    fn table_order_and_text() {
        let vertices = vec![
            Vertex::new(1, 0.0, 0.0),
            Vertex::new(2, 0.0, 12.0),
            Vertex::new(3, 25.0, 12.0),
            Vertex::new(4, 25.0, 0.0),
        ];
        let sides = BuildSides::new(&vertices).execute();
        let parcel = Parcel::new("Lot 01", "Block A", vertices, sides)
            .unwrap()
            .with_confrontant(0, "Main Street")
            .unwrap()
            .reclassify(0)
            .unwrap();

        let rows = confrontation_summary(&parcel, "m");
        let roles: Vec<_> = rows.iter().map(|r| r.role).collect();
        assert_eq!(
            roles,
            [FaceRole::Frontage, FaceRole::Rear, FaceRole::Right, FaceRole::Left]
        );
        assert_eq!(
            rows[0].to_string(),
            "Frontage: 12.000 m with Main Street. Az: 000°00'00.00\""
        );
        assert_eq!(rows[1].from_vertex, 3);
    }

    #[test]
    fn other_sides_follow_in_ring_order() {
        let vertices = vec![
            Vertex::new(1, 0.0, 0.0),
            Vertex::new(2, 0.0, 10.0),
            Vertex::new(3, 5.0, 10.0),
            Vertex::new(4, 5.0, 5.0),
            Vertex::new(5, 10.0, 5.0),
            Vertex::new(6, 10.0, 0.0),
        ];
        let sides = BuildSides::new(&vertices).execute();
        let parcel = Parcel::new("Lot 02", "Block A", vertices, sides)
            .unwrap()
            .reclassify(0)
            .unwrap();
        let rows = confrontation_summary(&parcel, "ft");
        assert_eq!(rows.len(), 6);
        assert!(rows[0].to_string().starts_with("Frontage: 10.000 ft with"));
        assert_eq!(rows[3].from_vertex, 2);
        assert_eq!(rows[4].from_vertex, 4);
        let last = rows.last().unwrap();
        assert_eq!(last.role, FaceRole::Other);
        assert_eq!(last.from_vertex, 5);
    }
}
