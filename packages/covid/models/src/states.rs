//! Bundesland AGS code utilities.
//!
//! Provides mappings between the two-digit AGS codes and the full state
//! names for the 16 German Bundesländer. The county asset references
//! states both ways: `bl_id` carries the code, `bl` the name.

/// AGS codes for the 16 Bundesländer.
pub const STATE_AGS: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
];

/// Maps a two-digit AGS code to the full Bundesland name.
///
/// Returns `"Unknown"` for unrecognized codes.
#[must_use]
pub fn state_name(ags: &str) -> &'static str {
    match ags {
        "01" => "Schleswig-Holstein",
        "02" => "Hamburg",
        "03" => "Niedersachsen",
        "04" => "Bremen",
        "05" => "Nordrhein-Westfalen",
        "06" => "Hessen",
        "07" => "Rheinland-Pfalz",
        "08" => "Baden-Württemberg",
        "09" => "Bayern",
        "10" => "Saarland",
        "11" => "Berlin",
        "12" => "Brandenburg",
        "13" => "Mecklenburg-Vorpommern",
        "14" => "Sachsen",
        "15" => "Sachsen-Anhalt",
        "16" => "Thüringen",
        _ => "Unknown",
    }
}

/// Maps a Bundesland name to its two-digit AGS code.
///
/// Returns `None` for unrecognized names.
#[must_use]
pub fn ags_for_name(name: &str) -> Option<&'static str> {
    match name {
        "Schleswig-Holstein" => Some("01"),
        "Hamburg" => Some("02"),
        "Niedersachsen" => Some("03"),
        "Bremen" => Some("04"),
        "Nordrhein-Westfalen" => Some("05"),
        "Hessen" => Some("06"),
        "Rheinland-Pfalz" => Some("07"),
        "Baden-Württemberg" => Some("08"),
        "Bayern" => Some("09"),
        "Saarland" => Some("10"),
        "Berlin" => Some("11"),
        "Brandenburg" => Some("12"),
        "Mecklenburg-Vorpommern" => Some("13"),
        "Sachsen" => Some("14"),
        "Sachsen-Anhalt" => Some("15"),
        "Thüringen" => Some("16"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ags_count() {
        assert_eq!(STATE_AGS.len(), 16);
    }

    #[test]
    fn name_roundtrip() {
        for ags in STATE_AGS {
            let name = state_name(ags);
            assert_ne!(name, "Unknown", "no name for AGS: {ags}");
            assert_eq!(
                ags_for_name(name),
                Some(*ags),
                "roundtrip failed for {ags} -> {name}"
            );
        }
    }

    #[test]
    fn unknown_ags() {
        assert_eq!(state_name("99"), "Unknown");
        assert_eq!(ags_for_name("Elsaß"), None);
    }
}
