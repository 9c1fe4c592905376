pub mod engine;
pub mod stage1_weights;
pub mod stage2_controls;
pub mod stage3_frameworks;

use thiserror::Error;

pub use engine::ScoreEngine;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("unable to calculate score for framework {framework} due to bad wcs score")]
    DegenerateFramework { framework: String },
}

/// Every framework that failed in one pass, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} framework(s) could not be scored: {}", .failures.len(), join_messages(.failures))]
pub struct BatchError {
    pub failures: Vec<ScoreError>,
}

fn join_messages(failures: &[ScoreError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
