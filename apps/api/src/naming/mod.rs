//! Candidate name extraction from raw resume text.
//!
//! An ordered chain of five independent strategies, tried first to last with
//! the first validated match winning. Every strategy funnels its candidates
//! through `format_name`, so nothing reaches a record without passing the
//! validity checks in `validity.rs`. Total: on failure the chain yields the
//! `"Unknown Candidate"` sentinel, never an error.

pub mod confidence;
pub mod filename;
pub mod format;
pub mod validity;

use regex::Regex;

use crate::naming::format::format_name;
use crate::naming::validity::{is_headerish_line, is_likely_name_word, is_placeholder_token};

/// Sentinel display name used whenever no plausible name can be found.
pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

/// Local-part segments of an email address that are not name material.
const NON_NAME_SEGMENTS: &[&str] = &[
    "test", "sample", "admin", "info", "mail", "contact", "hr", "jobs", "resume", "user", "temp",
    "noreply", "hello", "support", "office", "careers", "dev",
];

/// Name extraction engine. Patterns are compiled once at construction and
/// shared behind an `Arc` in `AppState`.
pub struct NameExtractor {
    /// Firstname [M.] Lastname+ with lowercase tails, full line.
    full_name: Regex,
    /// Explicit "Name: X" label.
    name_label: Regex,
    /// A line written entirely in capitals.
    all_caps_line: Regex,
    /// Two to four capitalized words, full line.
    capitalized_line: Regex,
    /// Capitalized name shape anchored at start of line only.
    capitalized_start: Regex,
    /// Email address with the local part captured.
    email: Regex,
    /// Structured-resume section headers that a name tends to follow.
    section_header: Regex,
    /// Filename shapes, tried in order (see `filename.rs`).
    pub(crate) filename_shapes: Vec<Regex>,
}

impl NameExtractor {
    pub fn new() -> Self {
        Self {
            full_name: compile(r"^([A-Z][a-z]+(?:\s+[A-Z]\.?)?(?:\s+[A-Z][a-z]+)+)\s*$"),
            name_label: compile(r"(?i)^name\s*[:\-]\s*(.+)$"),
            all_caps_line: compile(r"^([A-Z][A-Z\s.'\-]+)$"),
            capitalized_line: compile(r"^([A-Z][A-Za-z'.\-]+(?:\s+[A-Z][A-Za-z'.\-]+){1,3})\s*$"),
            capitalized_start: compile(r"^([A-Z][a-z]+(?:\s+[A-Z]\.?)?(?:\s+[A-Z][a-z]+)+)"),
            email: compile(r"([A-Za-z0-9._%+\-]+)@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}"),
            section_header: compile(r"(?i)^\s*(?:personal\s+information|candidate|applicant)\b"),
            filename_shapes: filename::compile_shapes(),
        }
    }

    /// Extracts the best-effort candidate display name from resume text.
    /// Total function: yields `UNKNOWN_CANDIDATE` when nothing validates.
    pub fn extract_name(&self, text: &str) -> String {
        self.explicit_pattern(text)
            .or_else(|| self.first_lines_heuristic(text))
            .or_else(|| self.email_local_part(text))
            .or_else(|| self.capitalized_prefix(text))
            .or_else(|| self.section_pattern(text))
            .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string())
    }

    /// Strategy 1: explicit name patterns over the first 5 non-empty lines.
    fn explicit_pattern(&self, text: &str) -> Option<String> {
        for line in non_empty_lines(text).take(5) {
            if let Some(caps) = self.name_label.captures(line) {
                if let Some(name) = caps.get(1).and_then(|m| format_name(m.as_str())) {
                    return Some(name);
                }
            }
            if let Some(caps) = self.full_name.captures(line) {
                if let Some(name) = caps.get(1).and_then(|m| format_name(m.as_str())) {
                    return Some(name);
                }
            }
            if self.all_caps_line.is_match(line) && line.split_whitespace().count() >= 2 {
                if let Some(name) = format_name(line) {
                    return Some(name);
                }
            }
            if let Some(caps) = self.capitalized_line.captures(line) {
                if let Some(name) = caps.get(1).and_then(|m| format_name(m.as_str())) {
                    return Some(name);
                }
            }
        }
        None
    }

    /// Strategy 2: first 7 non-empty lines, skipping header-ish lines,
    /// accepting a 2-4 word line where every word passes the name-word test.
    fn first_lines_heuristic(&self, text: &str) -> Option<String> {
        for line in non_empty_lines(text).take(7) {
            if is_headerish_line(line) {
                continue;
            }
            let words: Vec<&str> = line.split_whitespace().collect();
            if (2..=4).contains(&words.len()) && words.iter().all(|w| is_likely_name_word(w)) {
                if let Some(name) = format_name(line) {
                    return Some(name);
                }
            }
        }
        None
    }

    /// Strategy 3: reconstruct a name from an email local part
    /// (john.smith@example.com -> "John Smith").
    fn email_local_part(&self, text: &str) -> Option<String> {
        let caps = self.email.captures(text)?;
        let local = caps.get(1)?.as_str();

        let segments: Vec<String> = local
            .split(['.', '_', '-'])
            .filter(|s| {
                s.chars().count() > 1
                    && s.chars().all(char::is_alphabetic)
                    && !NON_NAME_SEGMENTS.contains(&s.to_lowercase().as_str())
                    && !is_placeholder_token(&s.to_lowercase())
            })
            .take(3)
            .map(capitalize)
            .collect();

        format_name(&segments.join(" "))
    }

    /// Strategy 4: capitalized name shape anchored at start of line, scanned
    /// over the first 10 non-empty lines.
    fn capitalized_prefix(&self, text: &str) -> Option<String> {
        for line in non_empty_lines(text).take(10) {
            if let Some(caps) = self.capitalized_start.captures(line) {
                if let Some(name) = caps.get(1).and_then(|m| format_name(m.as_str())) {
                    return Some(name);
                }
            }
        }
        None
    }

    /// Strategy 5: structured-resume sections. A name following a
    /// PERSONAL INFORMATION / CANDIDATE / APPLICANT header, or a long
    /// ALL-CAPS header line (10-30 chars) that is itself the name.
    fn section_pattern(&self, text: &str) -> Option<String> {
        let lines: Vec<&str> = non_empty_lines(text).collect();
        for (i, line) in lines.iter().enumerate() {
            if self.section_header.is_match(line) {
                if let Some(next) = lines.get(i + 1) {
                    if let Some(name) = format_name(next) {
                        return Some(name);
                    }
                }
                continue;
            }
            let len = line.chars().count();
            if (10..=30).contains(&len)
                && self.all_caps_line.is_match(line)
                && (2..=4).contains(&line.split_whitespace().count())
            {
                if let Some(name) = format_name(line) {
                    return Some(name);
                }
            }
        }
        None
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(pattern: &str) -> Regex {
    // Patterns are static and hand-checked; a failure here is a programming
    // error caught by the module tests.
    Regex::new(pattern).expect("invalid name-extraction pattern")
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
