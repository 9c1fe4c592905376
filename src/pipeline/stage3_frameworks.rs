use crate::model::policy::ScoringPolicy;
use crate::model::report::FrameworkReport;
use crate::pipeline::ScoreError;
use crate::pipeline::stage1_weights::WeightCalculator;
use crate::pipeline::stage2_controls::ControlScorer;

#[derive(Debug, Clone, Copy)]
pub struct FrameworkScorer {
    weights: WeightCalculator,
}

impl FrameworkScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            weights: WeightCalculator::new(policy),
        }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.weights.policy()
    }

    /// Rolls every control into the framework and normalizes to a percentage.
    ///
    /// Previous outputs are cleared first, so scoring the same report twice gives
    /// the same result. A framework without any weighted resource ends with
    /// `score == 0` and is reported as an error.
    pub fn score_framework(&self, framework: &mut FrameworkReport) -> Result<(), ScoreError> {
        framework.reset_scores();
        let scorer = ControlScorer::new(&self.weights);

        for control in framework.control_reports.iter_mut() {
            let contribution = scorer.score(control, &framework.name);
            framework.wcs_score += contribution.wcs;
            framework.score += contribution.unnormalized;
            framework.improvement_score += control.improvement_score;
        }

        if framework.wcs_score == 0.0 {
            framework.score = 0.0;
            framework.improvement_score = 0.0;
            let err = ScoreError::DegenerateFramework {
                framework: framework.name.clone(),
            };
            tracing::warn!("{err}");
            return Err(err);
        }

        framework.score = framework.score * 100.0 / framework.wcs_score;
        framework.improvement_score = framework.improvement_score * 100.0 / framework.wcs_score;

        tracing::info!(
            "framework {}: score {:.2}, improvement {:.2} over {} control(s)",
            framework.name,
            framework.score,
            framework.improvement_score,
            framework.control_reports.len()
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_frameworks.rs"]
mod tests;
