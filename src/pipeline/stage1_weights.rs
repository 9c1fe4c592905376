use serde_json::Value;

use crate::input::workload::{Workload, daemonset_status};
use crate::model::policy::ScoringPolicy;

/// Importance of a single resource, scaled by its blast radius.
///
/// daemonset: node fan-out (`status.desiredNumberScheduled`)
/// workloads: `replicas * replica_factor` when replicas > 1, else 1
/// ignore-listed kinds: 0 while the ignore policy is on
#[derive(Debug, Clone, Copy)]
pub struct WeightCalculator {
    policy: ScoringPolicy,
}

impl WeightCalculator {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn weight(&self, resource: &Value) -> f32 {
        let Some(workload) = Workload::from_value(resource) else {
            return 0.0;
        };
        let kind = workload.kind().to_ascii_lowercase();
        if self.policy.ignores(&kind) {
            tracing::trace!("ignoring {} {}", kind, workload.name());
            return 0.0;
        }

        let mut weight = 1.0f32;
        let replicas = workload.replicas();
        if replicas > 1 {
            weight *= replicas as f32 * self.policy.replica_factor;
        }

        if kind == "daemonset"
            && let Some(status) = daemonset_status(workload.raw())
            && status.desired_number_scheduled > 0
        {
            weight *= status.desired_number_scheduled as f32;
        }

        weight
    }

    pub fn total(&self, resources: &[&Value]) -> f32 {
        resources.iter().map(|r| self.weight(r)).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_weights.rs"]
mod tests;
