//! Per-machine configuration.

use serde::{Deserialize, Serialize};

/// Settings for a [`StateMachine`](super::StateMachine).
///
/// Missing fields fall back to their defaults when deserialized, so a host
/// can embed a partial table in its own settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name attached to every log event from this machine.
    pub label: String,

    /// Whether `late_tick()` forwards to the current state's late hook.
    /// Machines driven without a late phase turn this off.
    pub late_tick: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            label: "state-machine".to_string(),
            late_tick: true,
        }
    }
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_late_tick(mut self, enabled: bool) -> Self {
        self.late_tick = enabled;
        self
    }
}
