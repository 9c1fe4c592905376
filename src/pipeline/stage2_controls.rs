use crate::input::hierarchy::resources_per_control;
use crate::model::report::ControlReport;
use crate::pipeline::stage1_weights::WeightCalculator;

/// Contribution of one control to its framework's totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlScore {
    /// `base_score * Σ weight(all)`: the penalty if every evaluated resource had failed.
    pub wcs: f32,
    /// `base_score * Σ weight(failed)`.
    pub unnormalized: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct ControlScorer<'a> {
    weights: &'a WeightCalculator,
}

impl<'a> ControlScorer<'a> {
    pub fn new(weights: &'a WeightCalculator) -> Self {
        Self { weights }
    }

    /// Sets `score`, `improvement_score` and `resource_counters` on the control.
    pub fn score(&self, control: &mut ControlReport, framework_name: &str) -> ControlScore {
        let resources = resources_per_control(control);
        let unnormalized = control.base_score * self.weights.total(&resources.failed);
        let wcs = control.base_score * self.weights.total(&resources.all);
        let counters = resources.counters();

        control.resource_counters = counters;
        control.improvement_score = unnormalized * control.improvement_ratio;
        if wcs > 0.0 {
            control.score = unnormalized / wcs;
        } else {
            control.score = unnormalized;
            tracing::warn!(
                "control {} in framework {}: worst case score is 0, no resources were evaluated; score is not available",
                control.control_id,
                framework_name
            );
        }

        tracing::debug!(
            "control {} in framework {}: failed {}/{} resources, wcs={}, unnormalized={}, score={}",
            control.control_id,
            framework_name,
            counters.failed,
            counters.all,
            wcs,
            unnormalized,
            control.score
        );

        ControlScore { wcs, unnormalized }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_controls.rs"]
mod tests;
