//! Batch coordination - applies the orchestrator to a bounded candidate
//! list, strictly sequentially.
//!
//! Sequential by design: the upstream is rate-limited, and a fixed
//! inter-candidate pause is more predictable than a concurrency-aware
//! limiter at this scale (at most 5 candidates per run).

use std::time::Duration;

use tracing::{info, warn};

use crate::evaluation::orchestrator::evaluate;
use crate::evaluation::record::EvaluationRecord;
use crate::llm_client::ScoringClient;
use crate::naming::NameExtractor;

/// Hard cap on candidates per batch, chosen to stay within upstream
/// rate/cost limits. Larger batches are refused outright.
pub const MAX_BATCH_SIZE: usize = 5;

/// Pause between candidates. Longer than the orchestrator's retry delay so
/// a retried candidate never runs back-to-back with the next one's first call.
pub const INTER_CANDIDATE_DELAY: Duration = Duration::from_secs(8);

/// Progress notification emitted after each candidate completes.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
    /// Label of the candidate that just finished (its filename).
    pub current: String,
}

impl BatchProgress {
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

/// Progress sink injected by the caller; no ambient global state.
pub type ProgressFn<'a> = dyn Fn(BatchProgress) + Send + Sync + 'a;

/// Evaluates up to `MAX_BATCH_SIZE` candidates (filename, resume text)
/// against one job description, in order.
///
/// The orchestrator is total, so every accepted candidate yields a record;
/// order of the output matches the input. An oversized batch yields an
/// empty list.
pub async fn evaluate_batch(
    scoring: &dyn ScoringClient,
    naming: &NameExtractor,
    candidates: &[(String, String)],
    job_description: &str,
    progress: &ProgressFn<'_>,
) -> Vec<EvaluationRecord> {
    if candidates.len() > MAX_BATCH_SIZE {
        warn!(
            "batch of {} exceeds the {}-candidate limit, refusing",
            candidates.len(),
            MAX_BATCH_SIZE
        );
        return Vec::new();
    }

    let total = candidates.len();
    let mut records = Vec::with_capacity(total);

    for (i, (filename, resume_text)) in candidates.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(INTER_CANDIDATE_DELAY).await;
        }
        info!("batch candidate {}/{}: {}", i + 1, total, filename);

        let record = evaluate(scoring, naming, resume_text, job_description, filename).await;
        records.push(record);

        progress(BatchProgress {
            completed: i + 1,
            total,
            current: filename.clone(),
        });
    }

    records
}
