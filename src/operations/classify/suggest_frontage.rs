use crate::model::{ConfrontantKind, Side};

/// Fragments that mark a confrontant label as a street.
///
/// Abbreviation prefixes, so `"AV"` also covers "Av. Paulista", "Avenida" and
/// "Avenue", and `"ROD"` covers "Rod. SP-280" and "Rodovia".
pub const DEFAULT_STREET_KEYWORDS: &[&str] = &[
    "RUA", "AV", "ESTR", "ROD", "TRAV", "ALAM", "STREET", "ROAD", "LANE", "DRIVE", "BOULEVARD",
    "HIGHWAY",
];

/// Picks an initial frontage side before the user chooses one.
///
/// Prefers the first side resolved against an alignment, then the first side
/// whose confrontant contains one of `keywords` (case-insensitive), and falls
/// back to side 0.
#[must_use]
pub fn suggest_frontage<S: AsRef<str>>(sides: &[Side], keywords: &[S]) -> usize {
    if let Some(i) = sides
        .iter()
        .position(|s| s.confrontant_kind == ConfrontantKind::Alignment)
    {
        return i;
    }
    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_uppercase()).collect();
    sides
        .iter()
        .position(|s| {
            let label = s.confrontant.to_uppercase();
            keywords.iter().any(|k| !k.is_empty() && label.contains(k.as_str()))
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn side(label: &str, kind: ConfrontantKind) -> Side {
        Side {
            confrontant: label.to_owned(),
            confrontant_kind: kind,
            ..Side::new(1, 2, 1.0, 0.0)
        }
    }

    #[test]
    fn alignment_side_is_preferred() {
        let sides = [
            side("Elm Street", ConfrontantKind::Manual),
            side("Lot 03", ConfrontantKind::Neighbor),
            side("Access Way", ConfrontantKind::Alignment),
        ];
        assert_eq!(suggest_frontage(&sides, DEFAULT_STREET_KEYWORDS), 2);
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let sides = [
            side("Lot 03", ConfrontantKind::Neighbor),
            side("Rua das Flores", ConfrontantKind::Manual),
        ];
        assert_eq!(suggest_frontage(&sides, DEFAULT_STREET_KEYWORDS), 1);
        assert_eq!(suggest_frontage(&sides, &["flores"]), 1);
    }

    #[test]
    fn abbreviated_street_labels_match() {
        let labels = [
            "Av. Paulista",
            "Rod. SP-280",
            "Estr. Velha",
            "Trav. do Carmo",
            "Alam. Santos",
        ];
        for label in labels {
            let sides = [
                side("Lot 03", ConfrontantKind::Neighbor),
                side(label, ConfrontantKind::Manual),
            ];
            assert_eq!(suggest_frontage(&sides, DEFAULT_STREET_KEYWORDS), 1, "{label}");
        }
    }

    #[test]
    fn falls_back_to_first_side() {
        let sides = [
            side("Lot 03", ConfrontantKind::Neighbor),
            side("Public Area", ConfrontantKind::PublicSpace),
        ];
        assert_eq!(suggest_frontage(&sides, DEFAULT_STREET_KEYWORDS), 0);
        assert_eq!(suggest_frontage::<&str>(&[], &[]), 0);
    }
}
