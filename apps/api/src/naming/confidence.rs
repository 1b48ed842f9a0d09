//! Advisory confidence scoring for an extracted name.
//!
//! The score is informational only. It never gates acceptance; extraction
//! validity is decided entirely by `validity.rs`.

use crate::naming::validity::is_placeholder_token;
use crate::naming::UNKNOWN_CANDIDATE;

/// Scores how much an extracted name looks like the document's actual
/// candidate, in [0.0, 1.0].
///
/// Base 0.5; -0.3 for suspicious (placeholder-flavored) words; +0.2 when the
/// name recurs elsewhere in the text; +0.2 / +0.15 for a 2- / 3-word name;
/// +0.15 when the name appears within the first 200 characters.
pub fn name_confidence(name: &str, source_text: &str) -> f32 {
    if name == UNKNOWN_CANDIDATE || name.trim().is_empty() {
        return 0.0;
    }

    let mut score = 0.5_f32;
    let words: Vec<&str> = name.split_whitespace().collect();

    if words.iter().any(|w| is_suspicious(w)) {
        score -= 0.3;
    }

    let name_lower = name.to_lowercase();
    let text_lower = source_text.to_lowercase();
    if text_lower.matches(&name_lower).count() > 1 {
        score += 0.2;
    }

    match words.len() {
        2 => score += 0.2,
        3 => score += 0.15,
        _ => {}
    }

    let head: String = text_lower.chars().take(200).collect();
    if head.contains(&name_lower) {
        score += 0.15;
    }

    score.clamp(0.0, 1.0)
}

fn is_suspicious(word: &str) -> bool {
    let lower = word.to_lowercase();
    is_placeholder_token(&lower) || matches!(lower.as_str(), "template" | "document")
}
