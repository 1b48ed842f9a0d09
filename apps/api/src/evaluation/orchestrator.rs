//! Evaluation orchestration - sequences one candidate through the full
//! pipeline.
//!
//! Flow: precondition check -> candidate naming (text, then filename) ->
//!       prompt construction -> scoring call with bounded retry ->
//!       response validation -> record.
//!
//! Total: every path ends in a structurally complete `EvaluationRecord`.
//! The retry loop is a small state machine over the structured error kind:
//! a fatal (quota) failure ends the candidate immediately, a retryable
//! failure sleeps and tries again, exhaustion degrades to the hard default.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::evaluation::prompts::{build_evaluation_prompt, EVALUATION_SYSTEM};
use crate::evaluation::record::EvaluationRecord;
use crate::evaluation::validator::validate_reply;
use crate::llm_client::ScoringClient;
use crate::naming::confidence::name_confidence;
use crate::naming::{NameExtractor, UNKNOWN_CANDIDATE};

/// Attempts per candidate before degrading to the hard default.
pub const MAX_ATTEMPTS: u32 = 2;

/// Fixed pause between attempts, sized for upstream rate limits.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Evaluates one candidate's resume against a job description.
pub async fn evaluate(
    scoring: &dyn ScoringClient,
    naming: &NameExtractor,
    resume_text: &str,
    job_description: &str,
    filename: &str,
) -> EvaluationRecord {
    let candidate_name = candidate_name(naming, resume_text, filename);

    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        warn!(
            "blank resume text or job description for {}, returning hard default",
            display_label(&candidate_name, filename)
        );
        return EvaluationRecord::hard_default(&candidate_name);
    }

    info!("evaluating {}", display_label(&candidate_name, filename));
    debug!(
        "extracted name {:?} (confidence {:.2})",
        candidate_name,
        name_confidence(&candidate_name, resume_text)
    );
    let prompt = build_evaluation_prompt(&candidate_name, job_description, resume_text);

    for attempt in 1..=MAX_ATTEMPTS {
        match scoring.generate(&prompt, EVALUATION_SYSTEM).await {
            Ok(reply) => {
                // The first structurally returned reply is accepted:
                // validation is total, so post-validation quality gating
                // would be a behavior change, not a fix.
                return validate_reply(&reply, &candidate_name);
            }
            Err(e) if e.is_fatal() => {
                warn!(
                    "scoring call for {} failed fatally on attempt {}: {}",
                    candidate_name, attempt, e
                );
                return EvaluationRecord::hard_default(&candidate_name);
            }
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!(
                    "scoring call for {} failed on attempt {}/{}: {}; retrying in {}s",
                    candidate_name,
                    attempt,
                    MAX_ATTEMPTS,
                    e,
                    RETRY_DELAY.as_secs()
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                warn!(
                    "scoring call for {} failed on final attempt {}/{}: {}",
                    candidate_name, attempt, MAX_ATTEMPTS, e
                );
            }
        }
    }

    EvaluationRecord::hard_default(&candidate_name)
}

/// Resume text first; filename shape as the fallback.
fn candidate_name(naming: &NameExtractor, resume_text: &str, filename: &str) -> String {
    let from_text = naming.extract_name(resume_text);
    if from_text != UNKNOWN_CANDIDATE {
        return from_text;
    }
    naming.extract_name_from_filename(filename)
}

fn display_label<'a>(candidate_name: &'a str, filename: &'a str) -> &'a str {
    if candidate_name != UNKNOWN_CANDIDATE || filename.is_empty() {
        candidate_name
    } else {
        filename
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::llm_client::LlmError;

    const JD: &str = "Senior Rust engineer building network services.";
    const RESUME: &str = "John Smith\n10 years of Rust, Tokio, and Axum.";

    /// Scripted stub: pops one pre-programmed outcome per call.
    struct ScriptedClient {
        calls: AtomicUsize,
        script: Mutex<Vec<Result<String, LlmError>>>,
    }

    impl ScriptedClient {
        fn new(script: Vec<Result<String, LlmError>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                script: Mutex::new(script),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ScoringClient for ScriptedClient {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .expect("script lock")
                .remove(0)
        }
    }

    fn good_reply() -> String {
        json!({
            "candidate_name": "John Smith",
            "skills_score": 90,
            "experience_score": 80,
            "education_score": 70,
            "skills_analysis": "Excellent Rust depth.",
            "experience_analysis": "Long systems background.",
            "education_analysis": "Relevant degree.",
            "fit_assessment": "Strong match.",
            "strengths": ["Rust", "Tokio", "Axum"],
            "weaknesses": ["No frontend", "One stack", "No management"],
            "recommendations": "Strong Yes - interview soon",
            "interview_questions": ["a?", "b?", "c?", "d?", "e?", "f?", "g?", "h?"]
        })
        .to_string()
    }

    fn quota_error() -> LlmError {
        LlmError::Quota {
            status: 429,
            message: "quota exceeded".to_string(),
        }
    }

    fn transient_error() -> LlmError {
        LlmError::Api {
            status: 503,
            message: "upstream briefly unavailable".to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_attempt_success() {
        let client = ScriptedClient::new(vec![Ok(good_reply())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, RESUME, JD, "John_Smith_Resume.pdf").await;

        assert_eq!(client.calls(), 1);
        assert_eq!(record.candidate_name, "John Smith");
        assert_eq!(record.overall_score, 83.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_is_retried_then_succeeds() {
        let client = ScriptedClient::new(vec![Err(transient_error()), Ok(good_reply())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, RESUME, JD, "resume.pdf").await;

        assert_eq!(client.calls(), 2);
        assert_eq!(record.skills_score, 90);
    }

    #[tokio::test]
    async fn test_quota_failure_short_circuits_retries() {
        // A second scripted outcome is present; it must never be consumed.
        let client = ScriptedClient::new(vec![Err(quota_error()), Ok(good_reply())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, RESUME, JD, "resume.pdf").await;

        assert_eq!(client.calls(), 1);
        assert_eq!(record.overall_score, 0.0);
        assert_eq!(record.candidate_name, "John Smith");
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_retries_degrade_to_hard_default() {
        let client = ScriptedClient::new(vec![Err(transient_error()), Err(transient_error())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, RESUME, JD, "resume.pdf").await;

        assert_eq!(client.calls(), MAX_ATTEMPTS as usize);
        assert_eq!(record.overall_score, 0.0);
        assert_eq!(record.skills_score, 0);
    }

    #[tokio::test]
    async fn test_blank_resume_short_circuits_without_calling_upstream() {
        let client = ScriptedClient::new(vec![Ok(good_reply())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, "   ", JD, "John_Smith_Resume.pdf").await;

        assert_eq!(client.calls(), 0);
        assert_eq!(record.overall_score, 0.0);
        // the filename still identifies the candidate
        assert_eq!(record.candidate_name, "John Smith");
    }

    #[tokio::test]
    async fn test_blank_job_description_short_circuits() {
        let client = ScriptedClient::new(vec![Ok(good_reply())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, RESUME, "", "resume.pdf").await;

        assert_eq!(client.calls(), 0);
        assert_eq!(record.overall_score, 0.0);
    }

    #[tokio::test]
    async fn test_garbage_reply_still_yields_a_record() {
        let client = ScriptedClient::new(vec![Ok("the model rambled instead".to_string())]);
        let naming = NameExtractor::new();

        let record = evaluate(&client, &naming, RESUME, JD, "resume.pdf").await;

        assert_eq!(client.calls(), 1);
        // salvage defaults
        assert_eq!(record.skills_score, 65);
        assert_eq!(record.candidate_name, "John Smith");
    }
}
