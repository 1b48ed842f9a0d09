// All LLM prompt constants for the evaluation module.
// Cross-cutting fragments live in llm_client::prompts.

/// System prompt for candidate evaluation - enforces JSON-only output.
pub const EVALUATION_SYSTEM: &str =
    "You are an experienced technical recruiter evaluating a candidate's resume \
    against a specific job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Evaluation prompt template.
/// Replace `{candidate_name}`, `{job_description}`, `{resume_text}` before sending.
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the candidate below against the job description and return a scored assessment.

Return a JSON object with this EXACT schema (no extra fields):
{
  "candidate_name": "Jane Doe",
  "skills_score": 85,
  "experience_score": 75,
  "education_score": 65,
  "overall_score": 78.0,
  "skills_analysis": "Two to four sentences on how the candidate's skills map to the role.",
  "experience_analysis": "Two to four sentences on depth and relevance of experience.",
  "education_analysis": "One to three sentences on educational background fit.",
  "fit_assessment": "Two to four sentences of overall fit narrative.",
  "strengths": ["top strength", "second strength", "third strength"],
  "weaknesses": ["top gap", "second gap", "third gap"],
  "recommendations": "Strong Yes | Yes | Conditional Yes | Maybe | No - followed by one sentence of reasoning",
  "interview_questions": ["six to eight targeted questions probing the candidate's claimed experience and the role's requirements"]
}

Scoring rules:
- All three sub-scores are integers from 0 to 100.
- overall_score = skills_score * 0.5 + experience_score * 0.3 + education_score * 0.2
- Score against THIS job description, not against an ideal candidate in general.
- Be specific: cite technologies, durations, and accomplishments from the resume.
- strengths and weaknesses must each have exactly 3 entries.
- interview_questions must have between 6 and 8 entries.
- recommendations MUST begin with one of: Strong Yes, Yes, Conditional Yes, Maybe, No.

CANDIDATE NAME:
{candidate_name}

JOB DESCRIPTION:
{job_description}

RESUME:
{resume_text}"#;

/// Fills the evaluation template.
pub fn build_evaluation_prompt(
    candidate_name: &str,
    job_description: &str,
    resume_text: &str,
) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{candidate_name}", candidate_name)
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_placeholders_are_filled() {
        let prompt = build_evaluation_prompt("Jane Doe", "Rust engineer role", "ten years of Rust");
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("Rust engineer role"));
        assert!(prompt.contains("ten years of Rust"));
        assert!(!prompt.contains("{candidate_name}"));
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_template_spells_out_the_weights() {
        assert!(EVALUATION_PROMPT_TEMPLATE.contains("0.5"));
        assert!(EVALUATION_PROMPT_TEMPLATE.contains("0.3"));
        assert!(EVALUATION_PROMPT_TEMPLATE.contains("0.2"));
    }
}
