use serde::Deserialize;
use serde_json::Value;

/// Read-only view over a raw resource object that declares a kind.
#[derive(Debug, Clone, Copy)]
pub struct Workload<'a> {
    raw: &'a Value,
    kind: &'a str,
}

impl<'a> Workload<'a> {
    /// `None` for anything that is not an object with a non-empty string `kind`.
    pub fn from_value(raw: &'a Value) -> Option<Self> {
        let kind = raw.as_object()?.get("kind")?.as_str()?;
        if kind.is_empty() {
            return None;
        }
        Some(Self { raw, kind })
    }

    pub fn kind(&self) -> &'a str {
        self.kind
    }

    pub fn name(&self) -> &'a str {
        self.raw
            .pointer("/metadata/name")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// `spec.replicas`, 0 when absent or not integral (`3.0` reads as 3).
    pub fn replicas(&self) -> i64 {
        let Some(value) = self.raw.pointer("/spec/replicas") else {
            return 0;
        };
        value
            .as_i64()
            .or_else(|| {
                value
                    .as_f64()
                    .filter(|v| v.is_finite() && v.fract() == 0.0)
                    .map(|v| v as i64)
            })
            .unwrap_or(0)
    }

    pub fn raw(&self) -> &'a Value {
        self.raw
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DaemonSet {
    #[serde(default)]
    status: DaemonSetStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaemonSetStatus {
    #[serde(default)]
    pub desired_number_scheduled: i32,
}

/// Re-reads a raw object as a daemonset; `None` when the status does not fit the typed shape.
pub fn daemonset_status(raw: &Value) -> Option<DaemonSetStatus> {
    DaemonSet::deserialize(raw).ok().map(|ds| ds.status)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/workload.rs"]
mod tests;
