use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::model::policy::ScoringPolicy;
use crate::model::report::FrameworkReport;

pub mod json;
pub mod text;

pub const SCORED_REPORTS_FILE: &str = "scored_reports.json";
pub const SUMMARY_FILE: &str = "summary.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Both,
}

impl ReportFormat {
    fn wants_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }

    fn wants_text(self) -> bool {
        matches!(self, ReportFormat::Text | ReportFormat::Both)
    }
}

pub fn format_score(v: f32) -> String {
    format!("{:.2}", v)
}

pub fn format_ratio(v: f32) -> String {
    format!("{:.4}", v)
}

/// Writes the requested outputs into `out_dir` and returns the paths written.
pub fn write_reports(
    reports: &[FrameworkReport],
    policy: &ScoringPolicy,
    out_dir: &Path,
    format: ReportFormat,
) -> std::io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    if format.wants_json() {
        let path = out_dir.join(SCORED_REPORTS_FILE);
        fs::write(&path, json::render_reports(reports)?)?;
        written.push(path);
    }

    if format.wants_text() {
        let path = out_dir.join(SUMMARY_FILE);
        fs::write(&path, text::render_summary(reports, policy))?;
        written.push(path);
    }

    for path in &written {
        tracing::info!("wrote {}", path.display());
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
