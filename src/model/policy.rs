use thiserror::Error;

/// Multiplier applied together with the replica count of multi-replica workloads.
pub const REPLICA_FACTOR: f32 = 1.1;

/// Environment toggle for the transitional RBAC carve-out.
pub const IGNORE_ENV_VAR: &str = "IGNORE_ENABLED";

/// Kinds zeroed while the ignore policy is on. Compared lower-cased.
pub const IGNORED_KINDS: &[&str] = &["role", "rolebinding", "clusterrole", "clusterrolebinding"];

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid replica factor {0} (expected a finite value > 0)")]
    InvalidReplicaFactor(f32),
}

/// Settings captured once per scoring pass and shared read-only by every scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub ignore_transitional_kinds: bool,
    pub replica_factor: f32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ScoringPolicy {
    pub fn default_v1() -> Self {
        Self {
            ignore_transitional_kinds: false,
            replica_factor: REPLICA_FACTOR,
        }
    }

    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(IGNORE_ENV_VAR).ok().as_deref())
    }

    pub fn from_flag(value: Option<&str>) -> Self {
        let mut base = Self::default_v1();
        base.ignore_transitional_kinds = value
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        base
    }

    pub fn with_replica_factor(mut self, factor: f32) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::InvalidReplicaFactor(factor));
        }
        self.replica_factor = factor;
        Ok(self)
    }

    /// `kind` must already be lower-cased.
    pub fn ignores(&self, kind: &str) -> bool {
        self.ignore_transitional_kinds && IGNORED_KINDS.contains(&kind)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/policy.rs"]
mod tests;
