use crate::model::policy::ScoringPolicy;
use crate::model::report::{ControlReport, FrameworkReport};
use crate::report::{format_ratio, format_score};

pub fn render_summary(reports: &[FrameworkReport], policy: &ScoringPolicy) -> String {
    let mut out = String::new();

    out.push_str("Posture Score Report\n");
    out.push_str("====================\n\n");
    out.push_str(&format!(
        "Ignore transitional kinds: {}\n",
        if policy.ignore_transitional_kinds {
            "on"
        } else {
            "off"
        }
    ));
    out.push_str(&format!(
        "Replica factor: {}\n",
        format_score(policy.replica_factor)
    ));
    out.push_str(&format!(
        "Frameworks scored: {}/{}\n",
        reports.iter().filter(|r| r.is_scored()).count(),
        reports.len()
    ));

    for report in reports {
        out.push('\n');
        render_framework(&mut out, report);
    }

    out
}

fn render_framework(out: &mut String, report: &FrameworkReport) {
    out.push_str(&format!("Framework: {}\n", report.name));
    if report.is_scored() {
        out.push_str(&format!("Score: {}\n", format_score(report.score)));
        out.push_str(&format!(
            "Improvement: {}\n",
            format_score(report.improvement_score)
        ));
    } else {
        out.push_str("Score: n/a (no scorable resources)\n");
    }
    out.push_str(&format!("Controls: {}\n", report.control_reports.len()));
    for control in &report.control_reports {
        out.push_str(&control_line(control));
    }
}

fn control_line(control: &ControlReport) -> String {
    let score = if control.resource_counters.all > 0 {
        format_ratio(control.score)
    } else {
        "n/a".to_string()
    };
    let label = if control.name.is_empty() {
        control.control_id.clone()
    } else {
        format!("{} {}", control.control_id, control.name)
    };
    format!(
        "  {}: score={} failed={}/{} passed={}\n",
        label,
        score,
        control.resource_counters.failed,
        control.resource_counters.all,
        control.resource_counters.passed
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
