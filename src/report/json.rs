use crate::model::report::FrameworkReport;

pub fn render_reports(reports: &[FrameworkReport]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(reports)?;
    out.push('\n');
    Ok(out)
}
