//! Filename-based name extraction, the fallback when resume text yields
//! nothing ("John_Smith_Resume.pdf" still identifies the candidate).

use regex::Regex;

use crate::naming::format::format_name;
use crate::naming::{NameExtractor, UNKNOWN_CANDIDATE};

/// Tokens stripped from a filename before the last-resort validation pass.
const FILENAME_BOILERPLATE: &[&str] = &[
    "resume", "cv", "curriculum", "vitae", "real", "test", "sample", "draft", "final", "copy",
    "updated", "new", "latest",
];

/// Ordered filename shapes. Compiled once by `NameExtractor::new`.
pub(crate) fn compile_shapes() -> Vec<Regex> {
    [
        // First_Last
        r"^([A-Za-z]+[_\- ][A-Za-z]+)$",
        // First_M.Last / First_M_Last
        r"^([A-Za-z]+[_\- ][A-Za-z]\.?[_\- ][A-Za-z]+)$",
        // Name_resume / Name_cv
        r"(?i)^(.+?)[_\- ](?:resume|cv)$",
        // resume_Name / cv_Name
        r"(?i)^(?:resume|cv)[_\- ](.+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("invalid filename pattern"))
    .collect()
}

impl NameExtractor {
    /// Extracts a candidate name from an uploaded file's name.
    /// Total function: yields `UNKNOWN_CANDIDATE` when nothing validates.
    pub fn extract_name_from_filename(&self, filename: &str) -> String {
        let stem = file_stem(filename);
        if stem.is_empty() {
            return UNKNOWN_CANDIDATE.to_string();
        }

        for shape in &self.filename_shapes {
            if let Some(caps) = shape.captures(stem) {
                if let Some(candidate) = caps.get(1) {
                    if let Some(name) = format_name(&despace(candidate.as_str())) {
                        return name;
                    }
                }
            }
        }

        // Last resort: drop boilerplate and version-ish tokens, validate the rest.
        let remainder: Vec<&str> = stem
            .split(['_', '-', ' '])
            .filter(|t| !t.is_empty())
            .filter(|t| !FILENAME_BOILERPLATE.contains(&t.to_lowercase().as_str()))
            .filter(|t| !is_versionish(t))
            .collect();

        format_name(&remainder.join(" ")).unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string())
    }
}

/// Basename without its final extension.
fn file_stem(filename: &str) -> &str {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    match base.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => base,
    }
}

/// Separator characters normalized to single spaces.
fn despace(s: &str) -> String {
    s.split(['_', '-', ' '])
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// "2", "2024", "v2", "V3" and friends.
fn is_versionish(token: &str) -> bool {
    let t = token.strip_prefix(['v', 'V']).unwrap_or(token);
    !t.is_empty() && t.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> NameExtractor {
        NameExtractor::new()
    }

    #[test]
    fn test_name_resume_shape() {
        assert_eq!(
            extractor().extract_name_from_filename("John_Smith_Resume.pdf"),
            "John Smith"
        );
    }

    #[test]
    fn test_first_last_shape() {
        assert_eq!(
            extractor().extract_name_from_filename("Jane-Doe.pdf"),
            "Jane Doe"
        );
    }

    #[test]
    fn test_first_middle_initial_last_shape() {
        assert_eq!(
            extractor().extract_name_from_filename("John_A._Smith.docx"),
            "John A. Smith"
        );
    }

    #[test]
    fn test_resume_prefix_shape() {
        assert_eq!(
            extractor().extract_name_from_filename("resume_Maria_Garcia.txt"),
            "Maria Garcia"
        );
    }

    #[test]
    fn test_cv_suffix_shape() {
        assert_eq!(
            extractor().extract_name_from_filename("alice_brown_cv.pdf"),
            "Alice Brown"
        );
    }

    #[test]
    fn test_boilerplate_and_version_tokens_stripped() {
        assert_eq!(
            extractor().extract_name_from_filename("final_John_Smith_draft_v2.pdf"),
            "John Smith"
        );
    }

    #[test]
    fn test_path_components_are_ignored() {
        assert_eq!(
            extractor().extract_name_from_filename("/tmp/uploads/John_Smith_Resume.pdf"),
            "John Smith"
        );
    }

    #[test]
    fn test_placeholder_filename_yields_sentinel() {
        assert_eq!(
            extractor().extract_name_from_filename("sample_resume_test.pdf"),
            UNKNOWN_CANDIDATE
        );
    }

    #[test]
    fn test_generic_filename_yields_sentinel() {
        assert_eq!(
            extractor().extract_name_from_filename("document1.pdf"),
            UNKNOWN_CANDIDATE
        );
        assert_eq!(extractor().extract_name_from_filename(""), UNKNOWN_CANDIDATE);
    }
}
