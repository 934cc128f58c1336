//! Named WOEID (Where On Earth ID) locations accepted by `trends/place`.

/// WOEID of the worldwide trend list.
pub const WORLDWIDE: i64 = 1;

/// Locations offered by name; any other positive WOEID is still accepted.
pub const KNOWN_LOCATIONS: &[(&str, i64)] = &[
    ("Worldwide", WORLDWIDE),
    ("United States", 23_424_977),
    ("United Kingdom", 23_424_975),
    ("Canada", 23_424_775),
    ("India", 23_424_848),
    ("Australia", 23_424_748),
    ("Japan", 23_424_856),
    ("Brazil", 23_424_768),
    ("Germany", 23_424_829),
    ("France", 23_424_819),
    ("New York", 2_459_115),
    ("Los Angeles", 2_442_047),
    ("London", 44_418),
];

/// Resolves a location given as a numeric WOEID or a known name
/// (case-insensitive).
#[must_use]
pub fn resolve_location(input: &str) -> Option<i64> {
    let input = input.trim();
    if let Ok(id) = input.parse::<i64>() {
        return Some(id);
    }
    KNOWN_LOCATIONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(input))
        .map(|(_, id)| *id)
}

/// Display name for a known WOEID.
#[must_use]
pub fn location_name(id: i64) -> Option<&'static str> {
    KNOWN_LOCATIONS
        .iter()
        .find(|(_, woeid)| *woeid == id)
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_case_insensitively() {
        assert_eq!(resolve_location("worldwide"), Some(WORLDWIDE));
        assert_eq!(resolve_location(" United States "), Some(23_424_977));
        assert_eq!(resolve_location("LONDON"), Some(44_418));
    }

    #[test]
    fn numeric_input_passes_through() {
        assert_eq!(resolve_location("2459115"), Some(2_459_115));
        assert_eq!(resolve_location("0"), Some(0));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(resolve_location("Atlantis"), None);
    }

    #[test]
    fn names_for_known_ids() {
        assert_eq!(location_name(1), Some("Worldwide"));
        assert_eq!(location_name(44_418), Some("London"));
        assert_eq!(location_name(42), None);
    }
}
