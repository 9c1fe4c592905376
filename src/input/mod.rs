use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::model::report::FrameworkReport;

pub mod hierarchy;
pub mod workload;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid report document {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("report document {} contains no frameworks", .0.display())]
    Empty(PathBuf),
}

/// A scan document holds either a list of framework reports or a single one.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReportDocument {
    Many(Vec<FrameworkReport>),
    One(FrameworkReport),
}

pub fn load_reports(path: &Path) -> Result<Vec<FrameworkReport>, InputError> {
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reports = parse_reports(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if reports.is_empty() {
        return Err(InputError::Empty(path.to_path_buf()));
    }

    let n_controls: usize = reports.iter().map(|r| r.control_reports.len()).sum();
    tracing::info!(
        "loaded {} framework report(s) with {} control(s) from {}",
        reports.len(),
        n_controls,
        path.display()
    );
    Ok(reports)
}

pub fn parse_reports(text: &str) -> serde_json::Result<Vec<FrameworkReport>> {
    Ok(match serde_json::from_str::<ReportDocument>(text)? {
        ReportDocument::Many(reports) => reports,
        ReportDocument::One(report) => vec![report],
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
