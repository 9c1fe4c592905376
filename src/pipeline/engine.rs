use rayon::prelude::*;

use crate::model::policy::ScoringPolicy;
use crate::model::report::FrameworkReport;
use crate::pipeline::stage3_frameworks::FrameworkScorer;
use crate::pipeline::{BatchError, ScoreError};

/// Scores a batch of framework reports in place.
///
/// A failing framework does not stop the batch; every failure is returned
/// together once all frameworks have been processed.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    scorer: FrameworkScorer,
    jobs: usize,
}

impl ScoreEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            scorer: FrameworkScorer::new(policy),
            jobs: 1,
        }
    }

    /// More than one job scores frameworks on a dedicated rayon pool.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.scorer.policy()
    }

    pub fn calculate(&self, frameworks: &mut [FrameworkReport]) -> Result<(), BatchError> {
        tracing::debug!(
            "scoring {} framework(s) with {} job(s)",
            frameworks.len(),
            self.jobs
        );
        let failures = if self.jobs > 1 && frameworks.len() > 1 {
            self.score_parallel(frameworks)
        } else {
            self.score_sequential(frameworks)
        };

        if failures.is_empty() {
            Ok(())
        } else {
            Err(BatchError { failures })
        }
    }

    fn score_sequential(&self, frameworks: &mut [FrameworkReport]) -> Vec<ScoreError> {
        frameworks
            .iter_mut()
            .filter_map(|f| self.scorer.score_framework(f).err())
            .collect()
    }

    fn score_parallel(&self, frameworks: &mut [FrameworkReport]) -> Vec<ScoreError> {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
        {
            Ok(pool) => pool.install(|| {
                frameworks
                    .par_iter_mut()
                    .filter_map(|f| self.scorer.score_framework(f).err())
                    .collect()
            }),
            Err(err) => {
                tracing::warn!(
                    "could not start {} scoring threads ({err}); scoring sequentially",
                    self.jobs
                );
                self.score_sequential(frameworks)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/engine.rs"]
mod tests;
