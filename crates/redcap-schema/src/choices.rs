//! Parser for the "Choices, Calculations, OR Slider Labels" string.

use redcap_model::ChoiceMap;

/// Footnote marker embedded in some labels; everything after it is
/// presentation markup and is dropped.
const FOOTNOTE_MARKER: &str = "<br><sup>";

/// Parse a choices string of the form `code, label | code, label | ...`.
///
/// Codes are normalized (lower-cased, hyphens to underscores); labels are
/// truncated at the footnote marker and trimmed. Returns `None` when the
/// string is blank or any pair lacks a comma; fields without choices
/// (free text, calc) legitimately have no mapping, so this is not an
/// error here. Field types that mandate choices turn `None` into a
/// compile error.
pub fn parse_choices(raw: &str) -> Option<ChoiceMap> {
    if raw.trim().is_empty() {
        return None;
    }
    let mut map = ChoiceMap::new();
    for piece in raw.split('|') {
        let (code, label) = piece.split_once(',')?;
        map.insert(clean_code(code), clean_label(label));
    }
    if map.is_empty() { None } else { Some(map) }
}

fn clean_code(code: &str) -> String {
    code.trim().replace('-', "_").to_lowercase()
}

fn clean_label(label: &str) -> String {
    let label = label.split(FOOTNOTE_MARKER).next().unwrap_or(label);
    label.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordered_pairs() {
        let map = parse_choices("1, Red | 2, Blue").unwrap();
        let pairs: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(pairs, [("1", "Red"), ("2", "Blue")]);
    }

    #[test]
    fn label_keeps_embedded_commas() {
        let map = parse_choices("1, Red, bright | 2, Blue").unwrap();
        assert_eq!(map.get("1"), Some("Red, bright"));
    }

    #[test]
    fn code_is_normalized() {
        let map = parse_choices("A-1, Alpha | B-2, Beta").unwrap();
        assert_eq!(map.get("a_1"), Some("Alpha"));
        assert_eq!(map.get("b_2"), Some("Beta"));
    }

    #[test]
    fn footnote_marker_truncates_label() {
        let map = parse_choices("1, Red<br><sup>see protocol</sup>").unwrap();
        assert_eq!(map.get("1"), Some("Red"));
    }

    #[test]
    fn blank_and_malformed_are_no_mapping() {
        assert_eq!(parse_choices(""), None);
        assert_eq!(parse_choices("   "), None);
        // A pair without a comma poisons the whole string.
        assert_eq!(parse_choices("1, Red | just-text"), None);
        // Calc expressions look nothing like pairs.
        assert_eq!(parse_choices("[weight]/[height]^2"), None);
    }
}
