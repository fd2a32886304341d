use std::fmt;

use serde::{Deserialize, Serialize};

/// Agent identifier. Unique ids are expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(pub String);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Operational mode of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AgentMode {
    #[default]
    Healthy,
    Aligned,
    /// Excluded from consensus until it shows sustained recovery.
    Grey,
    /// Permanently excluded; never transitions.
    Adversarial,
}

impl AgentMode {
    /// Whether agents in this mode contribute to and follow the consensus.
    pub fn participates(self) -> bool {
        matches!(self, AgentMode::Healthy | AgentMode::Aligned)
    }
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentMode::Healthy => "healthy",
            AgentMode::Aligned => "aligned",
            AgentMode::Grey => "grey",
            AgentMode::Adversarial => "adversarial",
        };
        f.write_str(s)
    }
}
