//! Display formatting for extracted candidate names.

use crate::naming::validity::is_valid_name;

/// Hard cap on a formatted display name. Longer results are rejected rather
/// than truncated: a 50+ character "name" is almost always a misread line.
pub const MAX_NAME_LEN: usize = 50;

/// Normalizes a raw name candidate into display form.
///
/// Collapses whitespace, strips characters that cannot appear in a name,
/// title-cases each word (with O'Connor / McDonald handling), and re-checks
/// validity on the result. Returns `None` when the cleaned name fails the
/// length cap or the final validity check.
pub fn format_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '\'' | '-' | '.'))
        .collect();

    let name = cleaned
        .split_whitespace()
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ");

    if name.chars().count() > MAX_NAME_LEN {
        return None;
    }
    if !is_valid_name(&name) {
        return None;
    }
    Some(name)
}

/// Title-cases one word, capitalizing after apostrophes and hyphens
/// (o'connor -> O'Connor, garcia-lopez -> Garcia-Lopez) and restoring the
/// Scottish/Irish "Mc" prefix (mcdonald -> McDonald).
fn title_case_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut start_of_segment = true;

    for c in word.chars().flat_map(char::to_lowercase) {
        if matches!(c, '\'' | '-' | '.') {
            out.push(c);
            start_of_segment = true;
        } else if start_of_segment {
            out.extend(c.to_uppercase());
            start_of_segment = false;
        } else {
            out.push(c);
        }
    }

    apply_mc_prefix(out)
}

fn apply_mc_prefix(word: String) -> String {
    let Some(rest) = word.strip_prefix("Mc") else {
        return word;
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_lowercase() => {
            let mut fixed = String::with_capacity(word.len());
            fixed.push_str("Mc");
            fixed.extend(c.to_uppercase());
            fixed.extend(chars);
            fixed
        }
        _ => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_title_case() {
        assert_eq!(format_name("john smith"), Some("John Smith".to_string()));
    }

    #[test]
    fn test_all_caps_input_is_normalized() {
        assert_eq!(format_name("JOHN SMITH"), Some("John Smith".to_string()));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(
            format_name("  john \t  smith \n"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_apostrophe_name() {
        assert_eq!(
            format_name("sean o'connor"),
            Some("Sean O'Connor".to_string())
        );
    }

    #[test]
    fn test_mc_prefix() {
        assert_eq!(
            format_name("angus mcdonald"),
            Some("Angus McDonald".to_string())
        );
    }

    #[test]
    fn test_hyphenated_surname() {
        assert_eq!(
            format_name("maria garcia-lopez"),
            Some("Maria Garcia-Lopez".to_string())
        );
    }

    #[test]
    fn test_foreign_characters_are_stripped() {
        assert_eq!(
            format_name("john* smith(1)"),
            Some("John Smith".to_string())
        );
    }

    #[test]
    fn test_over_length_name_rejected() {
        let long = format!("{} {}", "A".repeat(30), "B".repeat(30));
        assert_eq!(format_name(&long), None);
    }

    #[test]
    fn test_single_word_rejected_by_recheck() {
        assert_eq!(format_name("Madonna"), None);
    }

    #[test]
    fn test_boilerplate_rejected_by_recheck() {
        assert_eq!(format_name("Real Estate"), None);
        assert_eq!(format_name("Curriculum Vitae"), None);
    }
}
