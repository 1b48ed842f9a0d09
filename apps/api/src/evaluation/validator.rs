//! Response validation - turns the scoring model's free-form reply into a
//! bounded `EvaluationRecord`.
//!
//! Three-tier fallback, because the upstream is a non-deterministic text
//! generator and every candidate must still produce a well-formed record:
//!   1. structured success: locate the JSON object (fenced block or brace
//!      span), coerce field by field, clamp and recompute,
//!   2. salvage parse: regex score scraping over the raw text,
//!   3. hard default: the all-zero / all-sentinel record (reached by the
//!      orchestrator for transport and precondition failures; field-wise
//!      coercion makes an in-validator failure path unreachable).
//!
//! Total function: `validate_reply` never returns an error.

use serde_json::{Map, Value};
use tracing::warn;

use crate::evaluation::record::{
    default_interview_questions, has_recommendation_token, recommendation_for, weighted_overall,
    EvaluationRecord, ANALYSIS_UNAVAILABLE, DEFAULT_INTERVIEW_QUESTIONS, FILLER_STRENGTH,
    FILLER_WEAKNESS, INTERVIEW_QUESTIONS_LEN, STRENGTHS_LEN, WEAKNESSES_LEN,
};
use crate::evaluation::salvage::salvage_record;
use crate::naming::format::MAX_NAME_LEN;
use crate::naming::UNKNOWN_CANDIDATE;

/// Minimum upstream question count worth keeping; below this the default set
/// replaces the reply's questions wholesale.
const MIN_UPSTREAM_QUESTIONS: usize = 6;

/// Validates a raw scoring reply into a complete record.
pub fn validate_reply(raw: &str, fallback_name: &str) -> EvaluationRecord {
    let trimmed = raw.trim();
    match extract_json_object(trimmed) {
        Some(map) => build_record(&map, fallback_name),
        None => {
            warn!("scoring reply carried no parseable JSON object, salvaging");
            salvage_record(trimmed, fallback_name)
        }
    }
}

/// Locates and parses the reply's JSON object.
///
/// Prefers the first fenced code block (with or without a language tag);
/// falls back to the first top-level `{...}` span, greedy across newlines.
fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    if let Some(inner) = fenced_block(text) {
        if let Ok(Value::Object(map)) = serde_json::from_str(inner.trim()) {
            return Some(map);
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str(&text[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Content of the first ``` fence, if any. A language tag on the fence line
/// is dropped with the rest of that line.
fn fenced_block(text: &str) -> Option<&str> {
    let after_open = &text[text.find("```")? + 3..];
    let body = match after_open.find('\n') {
        Some(i) => &after_open[i + 1..],
        None => after_open,
    };
    let end = body.find("```")?;
    Some(&body[..end])
}

/// Field-wise coercion of a parsed reply. Every accessor is total; malformed
/// individual fields degrade to their sentinel without failing the record.
fn build_record(map: &Map<String, Value>, fallback_name: &str) -> EvaluationRecord {
    let skills_score = clamp_score(map.get("skills_score"));
    let experience_score = clamp_score(map.get("experience_score"));
    let education_score = clamp_score(map.get("education_score"));
    // Whatever overall the model asserted is ignored; the weighting is ours.
    let overall_score = weighted_overall(skills_score, experience_score, education_score);

    EvaluationRecord {
        candidate_name: clean_name(map.get("candidate_name"), fallback_name),
        skills_score,
        experience_score,
        education_score,
        overall_score,
        skills_analysis: clean_text(map.get("skills_analysis")),
        experience_analysis: clean_text(map.get("experience_analysis")),
        education_analysis: clean_text(map.get("education_analysis")),
        fit_assessment: clean_text(map.get("fit_assessment")),
        recommendation: normalize_recommendation(
            map.get("recommendations").or_else(|| map.get("recommendation")),
            overall_score,
        ),
        strengths: exactly_n(map.get("strengths"), STRENGTHS_LEN, FILLER_STRENGTH),
        weaknesses: exactly_n(map.get("weaknesses"), WEAKNESSES_LEN, FILLER_WEAKNESS),
        interview_questions: exactly_eight_questions(map.get("interview_questions")),
    }
}

/// Accepts numbers and numeric strings (with an optional trailing '%'),
/// clamps into [0, 100]. Anything else scores 0.
fn clamp_score(value: Option<&Value>) -> u8 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().trim_end_matches('%').parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    n.round().clamp(0.0, 100.0) as u8
}

/// Placeholder strings the model uses for "nothing here".
fn is_placeholder_text(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "" | "n/a" | "na" | "null" | "none" | "-" | "unknown"
    )
}

fn clean_text(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !is_placeholder_text(s) => s.trim().to_string(),
        _ => ANALYSIS_UNAVAILABLE.to_string(),
    }
}

/// Upstream name if usable (non-placeholder, within the display cap),
/// otherwise the caller's fallback, otherwise the sentinel.
fn clean_name(value: Option<&Value>, fallback_name: &str) -> String {
    if let Some(s) = value.and_then(Value::as_str) {
        if !is_placeholder_text(s) {
            let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
            if !collapsed.is_empty() && collapsed.chars().count() <= MAX_NAME_LEN {
                return collapsed;
            }
        }
    }
    let fallback = fallback_name.trim();
    if fallback.is_empty() {
        UNKNOWN_CANDIDATE.to_string()
    } else {
        fallback.to_string()
    }
}

/// Keeps the recommendation text when it carries a decision token; otherwise
/// derives the token from the overall score and prepends it.
fn normalize_recommendation(value: Option<&Value>, overall: f64) -> String {
    let text = value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !is_placeholder_text(s));

    match text {
        Some(t) if has_recommendation_token(t) => t.to_string(),
        Some(t) => format!("{} - {}", recommendation_for(overall), t),
        None => format!(
            "{} - based on an overall score of {:.1}/100",
            recommendation_for(overall),
            overall
        ),
    }
}

/// Exactly `n` non-blank entries: truncated when longer, padded with the
/// filler when shorter.
fn exactly_n(value: Option<&Value>, n: usize, filler: &str) -> Vec<String> {
    let mut items = string_items(value);
    items.truncate(n);
    while items.len() < n {
        items.push(filler.to_string());
    }
    items
}

/// Exactly 8 questions. Upstream questions are kept (and topped up from the
/// defaults) only when at least 6 were supplied; otherwise the default set
/// replaces them wholesale.
fn exactly_eight_questions(value: Option<&Value>) -> Vec<String> {
    let supplied = string_items(value);
    if supplied.len() < MIN_UPSTREAM_QUESTIONS {
        return default_interview_questions();
    }
    let mut questions = supplied;
    questions.truncate(INTERVIEW_QUESTIONS_LEN);
    for q in DEFAULT_INTERVIEW_QUESTIONS {
        if questions.len() == INTERVIEW_QUESTIONS_LEN {
            break;
        }
        questions.push(q.to_string());
    }
    questions
}

fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
