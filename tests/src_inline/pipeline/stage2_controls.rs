use super::*;
use crate::model::policy::ScoringPolicy;
use crate::model::report::{AlertObject, ResourceCounters, RuleReport, RuleResponse};
use serde_json::{Value, json};

fn pod(name: &str) -> Value {
    json!({"apiVersion": "v1", "kind": "Pod", "metadata": {"name": name}})
}

fn daemonset(name: &str, nodes: i32) -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "DaemonSet",
        "metadata": {"name": name},
        "status": {"desiredNumberScheduled": nodes}
    })
}

fn control(base_score: f32, inputs: Vec<Value>, failed: Vec<Value>) -> ControlReport {
    ControlReport {
        control_id: "C-0001".to_string(),
        base_score,
        rule_reports: vec![RuleReport {
            name: "rule".to_string(),
            list_input_resources: inputs,
            rule_responses: vec![RuleResponse {
                alert_message: String::new(),
                alert_object: AlertObject {
                    k8s_api_objects: failed,
                },
            }],
        }],
        ..Default::default()
    }
}

#[test]
fn test_control_score_ratio() {
    let weights = WeightCalculator::new(ScoringPolicy::default_v1());
    let scorer = ControlScorer::new(&weights);
    let mut ctrl = control(2.0, vec![pod("a"), daemonset("b", 3)], vec![pod("a")]);

    let out = scorer.score(&mut ctrl, "NSA");
    assert_eq!(out.wcs, 8.0);
    assert_eq!(out.unnormalized, 2.0);
    assert_eq!(ctrl.score, 0.25);
    assert_eq!(
        ctrl.resource_counters,
        ResourceCounters {
            all: 2,
            passed: 1,
            failed: 1
        }
    );
}

#[test]
fn test_improvement_scaled_by_contribution() {
    let weights = WeightCalculator::new(ScoringPolicy::default_v1());
    let scorer = ControlScorer::new(&weights);
    let mut ctrl = control(2.0, vec![pod("a"), pod("b")], vec![pod("a")]);
    ctrl.improvement_ratio = 0.5;

    let out = scorer.score(&mut ctrl, "NSA");
    assert_eq!(out.unnormalized, 2.0);
    assert_eq!(ctrl.improvement_score, 1.0);
    assert_eq!(ctrl.improvement_ratio, 0.5);
}

#[test]
fn test_all_failed_scores_one() {
    let weights = WeightCalculator::new(ScoringPolicy::default_v1());
    let scorer = ControlScorer::new(&weights);
    let mut ctrl = control(5.0, vec![pod("a"), pod("b")], vec![pod("a"), pod("b")]);
    scorer.score(&mut ctrl, "NSA");
    assert_eq!(ctrl.score, 1.0);
}

#[test]
fn test_no_resources_keeps_raw_score() {
    let weights = WeightCalculator::new(ScoringPolicy::default_v1());
    let scorer = ControlScorer::new(&weights);
    let mut ctrl = control(3.0, vec![], vec![]);

    let out = scorer.score(&mut ctrl, "NSA");
    assert_eq!(out, ControlScore::default());
    assert_eq!(ctrl.score, 0.0);
    assert_eq!(ctrl.improvement_score, 0.0);
}

#[test]
fn test_only_ignored_kinds_is_degenerate() {
    let weights = WeightCalculator::new(ScoringPolicy::from_flag(Some("true")));
    let scorer = ControlScorer::new(&weights);
    let role = json!({"kind": "Role", "metadata": {"name": "r"}});
    let mut ctrl = control(4.0, vec![role.clone()], vec![role]);

    let out = scorer.score(&mut ctrl, "NSA");
    assert_eq!(out.wcs, 0.0);
    assert_eq!(out.unnormalized, 0.0);
    assert_eq!(ctrl.score, 0.0);
    assert_eq!(ctrl.resource_counters.all, 1);
}
