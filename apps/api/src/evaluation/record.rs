//! EvaluationRecord - the bounded, fully-populated output of one
//! resume-vs-job evaluation.
//!
//! ARCHITECTURAL RULE: downstream consumers (HTTP responses, report
//! renderers) may assume every record is structurally complete. No partially
//! populated record ever leaves this module's constructors or the validator.

use serde::{Deserialize, Serialize};

use crate::naming::UNKNOWN_CANDIDATE;

/// Sentinel for a missing or blank analysis field.
pub const ANALYSIS_UNAVAILABLE: &str = "Analysis not available";

/// Filler entries used to pad strengths/weaknesses up to their fixed length.
pub const FILLER_STRENGTH: &str = "No additional strengths identified";
pub const FILLER_WEAKNESS: &str = "No additional weaknesses identified";

/// Decision tokens a recommendation must contain, checked by substring.
pub const RECOMMENDATION_TOKENS: [&str; 5] =
    ["Strong Yes", "Conditional Yes", "Maybe", "Yes", "No"];

/// Scoring weights. These are also spelled out verbatim in the prompt so the
/// model and the validator agree on how `overall_score` is derived.
pub const SKILLS_WEIGHT: f64 = 0.5;
pub const EXPERIENCE_WEIGHT: f64 = 0.3;
pub const EDUCATION_WEIGHT: f64 = 0.2;

/// Fixed lengths enforced on every record.
pub const STRENGTHS_LEN: usize = 3;
pub const WEAKNESSES_LEN: usize = 3;
pub const INTERVIEW_QUESTIONS_LEN: usize = 8;

/// Fallback interview questions, used wholesale when the upstream reply
/// supplies fewer than 6 and as padding when it supplies 6 or 7.
pub const DEFAULT_INTERVIEW_QUESTIONS: [&str; 8] = [
    "Walk me through your most recent role and your main responsibilities.",
    "Which project are you most proud of, and what was your specific contribution?",
    "Describe a significant technical or professional challenge you overcame.",
    "Why are you interested in this position?",
    "How do you prioritize your work when handling multiple deadlines?",
    "Tell me about a time you had to learn a new skill quickly.",
    "How do you handle disagreements with colleagues or stakeholders?",
    "Where do you see your career heading over the next few years?",
];

/// The validated evaluation of one candidate against one job description.
/// Immutable after validation; holds no references to its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub candidate_name: String,
    pub skills_score: u8,
    pub experience_score: u8,
    pub education_score: u8,
    /// Derived field: always recomputed from the three sub-scores, never
    /// taken from upstream text.
    pub overall_score: f64,
    pub skills_analysis: String,
    pub experience_analysis: String,
    pub education_analysis: String,
    pub fit_assessment: String,
    pub recommendation: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub interview_questions: Vec<String>,
}

impl EvaluationRecord {
    /// The all-zero / all-sentinel record returned when analysis cannot be
    /// completed at all (blank inputs, fatal upstream errors, exhausted
    /// retries). Structurally indistinguishable from a validated record.
    pub fn hard_default(candidate_name: &str) -> Self {
        let name = candidate_name.trim();
        Self {
            candidate_name: if name.is_empty() {
                UNKNOWN_CANDIDATE.to_string()
            } else {
                name.to_string()
            },
            skills_score: 0,
            experience_score: 0,
            education_score: 0,
            overall_score: 0.0,
            skills_analysis: ANALYSIS_UNAVAILABLE.to_string(),
            experience_analysis: ANALYSIS_UNAVAILABLE.to_string(),
            education_analysis: ANALYSIS_UNAVAILABLE.to_string(),
            fit_assessment: ANALYSIS_UNAVAILABLE.to_string(),
            recommendation: "No - the evaluation could not be completed".to_string(),
            strengths: vec![FILLER_STRENGTH.to_string(); STRENGTHS_LEN],
            weaknesses: vec![FILLER_WEAKNESS.to_string(); WEAKNESSES_LEN],
            interview_questions: default_interview_questions(),
        }
    }
}

/// Weighted overall score, rounded to one decimal place.
pub fn weighted_overall(skills: u8, experience: u8, education: u8) -> f64 {
    let raw = f64::from(skills) * SKILLS_WEIGHT
        + f64::from(experience) * EXPERIENCE_WEIGHT
        + f64::from(education) * EDUCATION_WEIGHT;
    (raw * 10.0).round() / 10.0
}

/// Decision token derived from an overall score.
pub fn recommendation_for(overall: f64) -> &'static str {
    if overall >= 80.0 {
        "Strong Yes"
    } else if overall >= 70.0 {
        "Yes"
    } else if overall >= 60.0 {
        "Conditional Yes"
    } else if overall >= 45.0 {
        "Maybe"
    } else {
        "No"
    }
}

/// Whether the text already carries one of the recognized decision tokens.
pub fn has_recommendation_token(text: &str) -> bool {
    RECOMMENDATION_TOKENS.iter().any(|t| text.contains(t))
}

pub fn default_interview_questions() -> Vec<String> {
    DEFAULT_INTERVIEW_QUESTIONS
        .iter()
        .map(|q| (*q).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_overall_uses_fixed_weights() {
        // 90*0.5 + 80*0.3 + 70*0.2 = 45 + 24 + 14 = 83.0
        assert_eq!(weighted_overall(90, 80, 70), 83.0);
    }

    #[test]
    fn test_weighted_overall_rounds_to_one_decimal() {
        // 73*0.5 + 66*0.3 + 51*0.2 = 36.5 + 19.8 + 10.2 = 66.5
        assert_eq!(weighted_overall(73, 66, 51), 66.5);
        // 77*0.5 + 63*0.3 + 58*0.2 = 38.5 + 18.9 + 11.6 = 69.0
        assert_eq!(weighted_overall(77, 63, 58), 69.0);
        // 71*0.5 + 67*0.3 + 53*0.2 = 35.5 + 20.1 + 10.6 = 66.2
        assert_eq!(weighted_overall(71, 67, 53), 66.2);
    }

    #[test]
    fn test_weighted_overall_bounds() {
        assert_eq!(weighted_overall(0, 0, 0), 0.0);
        assert_eq!(weighted_overall(100, 100, 100), 100.0);
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert_eq!(recommendation_for(80.0), "Strong Yes");
        assert_eq!(recommendation_for(79.9), "Yes");
        assert_eq!(recommendation_for(70.0), "Yes");
        assert_eq!(recommendation_for(69.9), "Conditional Yes");
        assert_eq!(recommendation_for(60.0), "Conditional Yes");
        assert_eq!(recommendation_for(59.9), "Maybe");
        assert_eq!(recommendation_for(45.0), "Maybe");
        assert_eq!(recommendation_for(44.9), "No");
        assert_eq!(recommendation_for(0.0), "No");
    }

    #[test]
    fn test_token_detection_by_substring() {
        assert!(has_recommendation_token("Strong Yes - hire immediately"));
        assert!(has_recommendation_token("Leaning Maybe on this one"));
        assert!(!has_recommendation_token("Unable to assess"));
    }

    #[test]
    fn test_hard_default_is_structurally_complete() {
        let record = EvaluationRecord::hard_default("Jane Doe");
        assert_eq!(record.candidate_name, "Jane Doe");
        assert_eq!(record.skills_score, 0);
        assert_eq!(record.overall_score, 0.0);
        assert_eq!(record.skills_analysis, ANALYSIS_UNAVAILABLE);
        assert!(has_recommendation_token(&record.recommendation));
        assert_eq!(record.strengths.len(), STRENGTHS_LEN);
        assert_eq!(record.weaknesses.len(), WEAKNESSES_LEN);
        assert_eq!(record.interview_questions.len(), INTERVIEW_QUESTIONS_LEN);
    }

    #[test]
    fn test_hard_default_blank_name_falls_back_to_sentinel() {
        let record = EvaluationRecord::hard_default("   ");
        assert_eq!(record.candidate_name, crate::naming::UNKNOWN_CANDIDATE);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = EvaluationRecord::hard_default("Jane Doe");
        let json = serde_json::to_string(&record).expect("serializes");
        let recovered: EvaluationRecord = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(recovered, record);
    }
}
