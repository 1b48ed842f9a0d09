//! Word- and name-level validity checks shared by every extraction strategy.
//!
//! Resume headers, section titles, and placeholder documents look a lot like
//! names to a line scanner. These tables are the reject list that keeps
//! "CURRICULUM VITAE" and "Sample Resume Template" out of candidate records.

/// Resume boilerplate, contact-block vocabulary, and common job-title words
/// that can never be part of a candidate name.
const SKIP_WORDS: &[&str] = &[
    "resume",
    "curriculum",
    "vitae",
    "profile",
    "contact",
    "email",
    "phone",
    "mobile",
    "address",
    "objective",
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "references",
    "linkedin",
    "github",
    "portfolio",
    "page",
    "confidential",
    "template",
    "document",
    "untitled",
    "final",
    "copy",
    "version",
    "updated",
    "admin",
    "user",
    "candidate",
    "applicant",
    "software",
    "senior",
    "junior",
    "lead",
    "engineer",
    "developer",
    "analyst",
    "manager",
    "consultant",
    "specialist",
    "coordinator",
    "director",
    "executive",
    "intern",
    "estate",
    "agent",
];

/// Multi-word phrases that mark a line as a section header or a placeholder
/// document rather than a person. Matched against the lowercased full name.
const BOILERPLATE_PHRASES: &[&str] = &[
    "resume objective",
    "real estate",
    "test case",
    "curriculum vitae",
    "cover letter",
    "personal information",
    "work experience",
    "sample resume",
    "professional summary",
    "career objective",
];

/// Words that only ever appear in placeholder/test documents. A "name" built
/// entirely from these is a header, not a person.
const PLACEHOLDER_WORDS: &[&str] = &["real", "test", "sample", "draft", "template", "document"];

/// Stems that stay placeholders with trailing digits attached
/// (test, test1, test42, sample2, ...).
const PLACEHOLDER_STEMS: &[&str] = &["real", "test", "sample", "temp", "draft"];

/// Keywords that disqualify an entire line from the first-lines heuristic.
pub(crate) const LINE_SKIP_KEYWORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "profile",
    "contact",
    "confidential",
    "draft",
    "page",
    "template",
    "objective",
    "summary",
    "email",
    "phone",
    "address",
    "http",
    "www",
    "@",
];

/// Whether a single word is plausible as part of a person's name.
///
/// Length 2-20, no digits, uppercase first character, tail restricted to
/// letters / apostrophe / hyphen / period, and not in the skip tables.
pub fn is_likely_name_word(word: &str) -> bool {
    let len = word.chars().count();
    if !(2..=20).contains(&len) {
        return false;
    }
    if word.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let lower = word.to_lowercase();
    let lower_trimmed = lower.trim_end_matches(['.', '\'', '-']);
    if SKIP_WORDS.contains(&lower_trimmed) || is_placeholder_token(lower_trimmed) {
        return false;
    }

    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    chars.all(|c| c.is_alphabetic() || matches!(c, '\'' | '-' | '.'))
}

/// Whether a full candidate string holds up as a display name:
/// 2-4 words, every word individually valid, no boilerplate phrase, and not
/// composed entirely of placeholder vocabulary.
pub fn is_valid_name(name: &str) -> bool {
    let words: Vec<&str> = name.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    if !words.iter().all(|w| is_likely_name_word(w)) {
        return false;
    }

    let lower = name.to_lowercase();
    if BOILERPLATE_PHRASES.iter().any(|p| lower.contains(p)) {
        return false;
    }

    !words
        .iter()
        .all(|w| PLACEHOLDER_WORDS.contains(&w.to_lowercase().as_str()))
}

/// Placeholder detection with trailing digits stripped: "test", "test3",
/// "sample12" are all placeholders.
pub(crate) fn is_placeholder_token(lower: &str) -> bool {
    let stem = lower.trim_end_matches(|c: char| c.is_ascii_digit());
    !stem.is_empty() && PLACEHOLDER_STEMS.contains(&stem)
}

/// Whether the line reads as a resume header rather than a name.
pub(crate) fn is_headerish_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    LINE_SKIP_KEYWORDS.iter().any(|k| lower.contains(k))
}
