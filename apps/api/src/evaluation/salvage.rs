//! Salvage parse - the degraded extraction path for replies that are not
//! parseable JSON at all.
//!
//! Scrapes the three sub-scores out of free text with label-proximity
//! regexes, defaults anything missing, and synthesizes the rest of the
//! record. The result is deliberately labeled as an automated estimate so a
//! reviewer can tell it apart from a structured evaluation.

use regex::Regex;
use tracing::warn;

use crate::evaluation::record::{
    default_interview_questions, weighted_overall, EvaluationRecord, FILLER_STRENGTH,
    FILLER_WEAKNESS, STRENGTHS_LEN, WEAKNESSES_LEN,
};
use crate::naming::UNKNOWN_CANDIDATE;

/// Score assumed for a dimension the reply never mentions numerically.
pub const SALVAGE_DEFAULT_SCORE: u8 = 65;

/// Builds a best-effort record from an unstructured reply.
pub fn salvage_record(raw: &str, fallback_name: &str) -> EvaluationRecord {
    let skills = scrape_score(raw, "skills").unwrap_or(SALVAGE_DEFAULT_SCORE);
    let experience = scrape_score(raw, "experience").unwrap_or(SALVAGE_DEFAULT_SCORE);
    let education = scrape_score(raw, "education").unwrap_or(SALVAGE_DEFAULT_SCORE);
    let overall = weighted_overall(skills, experience, education);

    warn!(
        "salvage parse produced scores {}/{}/{} (overall {:.1}) for {}",
        skills, experience, education, overall, fallback_name
    );

    let name = fallback_name.trim();
    EvaluationRecord {
        candidate_name: if name.is_empty() {
            UNKNOWN_CANDIDATE.to_string()
        } else {
            name.to_string()
        },
        skills_score: skills,
        experience_score: experience,
        education_score: education,
        overall_score: overall,
        skills_analysis: format!(
            "Skills appear to align with roughly {skills}% of the role requirements."
        ),
        experience_analysis: format!(
            "Experience indicators suggest approximately {experience}% alignment with the role."
        ),
        education_analysis: format!(
            "Educational background suggests approximately {education}% alignment with the role."
        ),
        fit_assessment: format!(
            "Automated estimate from an unstructured reply; weighted fit {overall:.1}/100."
        ),
        recommendation: format!(
            "Conditional Yes - the reply could not be fully parsed; estimated fit {overall:.1}/100 \
             warrants manual review."
        ),
        strengths: vec![FILLER_STRENGTH.to_string(); STRENGTHS_LEN],
        weaknesses: vec![FILLER_WEAKNESS.to_string(); WEAKNESSES_LEN],
        interview_questions: default_interview_questions(),
    }
}

/// First integer within 60 characters after a case-insensitive label match.
fn scrape_score(text: &str, label: &str) -> Option<u8> {
    let pattern = format!(r"(?is){label}[^0-9]{{0,60}}?(\d{{1,3}})");
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(text)?;
    let n: u32 = caps.get(1)?.as_str().parse().ok()?;
    Some(n.min(100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::record::{has_recommendation_token, INTERVIEW_QUESTIONS_LEN};

    #[test]
    fn test_scrapes_labeled_scores() {
        let raw = "Skills: 82 out of 100. Experience rating is 74. Education score - 61.";
        let record = salvage_record(raw, "Jane Doe");
        assert_eq!(record.skills_score, 82);
        assert_eq!(record.experience_score, 74);
        assert_eq!(record.education_score, 61);
        assert_eq!(record.overall_score, weighted_overall(82, 74, 61));
    }

    #[test]
    fn test_missing_labels_default_to_65() {
        let record = salvage_record("no numbers here at all", "Jane Doe");
        assert_eq!(record.skills_score, SALVAGE_DEFAULT_SCORE);
        assert_eq!(record.experience_score, SALVAGE_DEFAULT_SCORE);
        assert_eq!(record.education_score, SALVAGE_DEFAULT_SCORE);
        assert_eq!(record.overall_score, 65.0);
    }

    #[test]
    fn test_scraped_scores_are_capped_at_100() {
        let raw = "skills 250, experience 180, education 999";
        let record = salvage_record(raw, "Jane Doe");
        assert_eq!(record.skills_score, 100);
        assert_eq!(record.experience_score, 100);
        assert_eq!(record.education_score, 100);
    }

    #[test]
    fn test_labels_match_case_insensitively_across_lines() {
        let raw = "SKILLS ANALYSIS\nstrong match: 88\nEXPERIENCE\nsolid: 79\neducation\nok: 70";
        let record = salvage_record(raw, "Jane Doe");
        assert_eq!(record.skills_score, 88);
        assert_eq!(record.experience_score, 79);
        assert_eq!(record.education_score, 70);
    }

    #[test]
    fn test_salvage_record_is_structurally_complete() {
        let record = salvage_record("garbage", "Jane Doe");
        assert_eq!(record.candidate_name, "Jane Doe");
        assert!(has_recommendation_token(&record.recommendation));
        assert_eq!(record.strengths.len(), STRENGTHS_LEN);
        assert_eq!(record.weaknesses.len(), WEAKNESSES_LEN);
        assert_eq!(record.interview_questions.len(), INTERVIEW_QUESTIONS_LEN);
        assert!(record.skills_analysis.contains("65"));
    }

    #[test]
    fn test_blank_fallback_name_becomes_sentinel() {
        let record = salvage_record("garbage", "  ");
        assert_eq!(record.candidate_name, UNKNOWN_CANDIDATE);
    }
}
