use std::collections::HashSet;

use serde_json::Value;

use crate::model::report::{ControlReport, ResourceCounters};

#[derive(Debug, Clone, Default)]
pub struct ControlResources<'a> {
    pub all: Vec<&'a Value>,
    pub passed: Vec<&'a Value>,
    pub failed: Vec<&'a Value>,
}

impl ControlResources<'_> {
    pub fn counters(&self) -> ResourceCounters {
        ResourceCounters {
            all: self.all.len(),
            passed: self.passed.len(),
            failed: self.failed.len(),
        }
    }
}

/// Splits a control's rule results into evaluated, passed and failed resources.
///
/// `all` is the deduplicated union of every rule's input resources, `failed` the
/// deduplicated union of every alert object. A failed object that was never
/// listed as input is appended to `all`, so `failed` is always a subset of `all`.
pub fn resources_per_control(control: &ControlReport) -> ControlResources<'_> {
    let mut all = Vec::new();
    let mut seen = HashSet::new();
    for rule in &control.rule_reports {
        for resource in &rule.list_input_resources {
            if seen.insert(resource_id(resource)) {
                all.push(resource);
            }
        }
    }

    let mut failed = Vec::new();
    let mut failed_ids = HashSet::new();
    for rule in &control.rule_reports {
        for response in &rule.rule_responses {
            for resource in &response.alert_object.k8s_api_objects {
                if failed_ids.insert(resource_id(resource)) {
                    failed.push(resource);
                }
            }
        }
    }

    let mut unlisted = 0usize;
    for resource in &failed {
        if seen.insert(resource_id(resource)) {
            all.push(*resource);
            unlisted += 1;
        }
    }
    if unlisted > 0 {
        tracing::warn!(
            "control {}: {} failed resource(s) missing from the rule inputs; counting them as evaluated",
            control.control_id,
            unlisted
        );
    }

    let passed = all
        .iter()
        .copied()
        .filter(|r| !failed_ids.contains(&resource_id(r)))
        .collect();

    ControlResources {
        all,
        passed,
        failed,
    }
}

/// `apiVersion/kind/namespace/name`, or the compact JSON text for unnamed objects.
pub fn resource_id(resource: &Value) -> String {
    let field = |ptr: &str| resource.pointer(ptr).and_then(Value::as_str).unwrap_or("");
    let name = field("/metadata/name");
    if name.is_empty() {
        return resource.to_string();
    }
    format!(
        "{}/{}/{}/{}",
        field("/apiVersion"),
        field("/kind"),
        field("/metadata/namespace"),
        name
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/hierarchy.rs"]
mod tests;
