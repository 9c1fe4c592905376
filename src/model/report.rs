//! Scan report hierarchy: framework -> control -> rule -> resource.
//!
//! Resources stay raw JSON objects; only the scoring fields are typed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkReport {
    pub name: String,
    #[serde(default)]
    pub control_reports: Vec<ControlReport>,
    /// Percentage in [0, 100] once scored.
    #[serde(default)]
    pub score: f32,
    /// Normalization denominator; zero means the framework could not be scored.
    #[serde(default)]
    pub wcs_score: f32,
    #[serde(default)]
    pub improvement_score: f32,
}

impl FrameworkReport {
    pub fn reset_scores(&mut self) {
        self.score = 0.0;
        self.wcs_score = 0.0;
        self.improvement_score = 0.0;
        for control in &mut self.control_reports {
            control.reset_scores();
        }
    }

    pub fn is_scored(&self) -> bool {
        self.wcs_score > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlReport {
    #[serde(rename = "controlID", default)]
    pub control_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub base_score: f32,
    /// Improvement potential supplied by the scan; 0 when absent, never overwritten.
    #[serde(default, alias = "ARMOImprovement")]
    pub improvement_ratio: f32,
    #[serde(default)]
    pub rule_reports: Vec<RuleReport>,
    /// Failed/worst-case ratio in [0, 1], or the raw penalty when nothing was evaluated.
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub improvement_score: f32,
    #[serde(default)]
    pub resource_counters: ResourceCounters,
}

impl Default for ControlReport {
    fn default() -> Self {
        Self {
            control_id: String::new(),
            name: String::new(),
            base_score: 0.0,
            improvement_ratio: 0.0,
            rule_reports: Vec::new(),
            score: 0.0,
            improvement_score: 0.0,
            resource_counters: ResourceCounters::default(),
        }
    }
}

impl ControlReport {
    pub fn reset_scores(&mut self) {
        self.score = 0.0;
        self.improvement_score = 0.0;
        self.resource_counters = ResourceCounters::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleReport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub list_input_resources: Vec<Value>,
    #[serde(default)]
    pub rule_responses: Vec<RuleResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleResponse {
    #[serde(default)]
    pub alert_message: String,
    #[serde(default)]
    pub alert_object: AlertObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertObject {
    #[serde(rename = "k8sApiObjects", default)]
    pub k8s_api_objects: Vec<Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounters {
    pub all: usize,
    pub passed: usize,
    pub failed: usize,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/report.rs"]
mod tests;
