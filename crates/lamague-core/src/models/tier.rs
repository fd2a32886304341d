use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{FOUNDATION_MIN_PRESSURE, MIDDLE_MIN_PRESSURE};

/// Pyramid tier, ordered from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Π >= 1.5
    Foundation,
    /// 1.2 <= Π < 1.5
    Middle,
    /// Π < 1.2
    Edge,
}

impl Tier {
    /// Classify a truth pressure value against the fixed tier thresholds.
    pub fn for_pressure(pressure: f64) -> Self {
        if pressure >= FOUNDATION_MIN_PRESSURE {
            Tier::Foundation
        } else if pressure >= MIDDLE_MIN_PRESSURE {
            Tier::Middle
        } else {
            Tier::Edge
        }
    }

    /// Upper-case name used in reports and logs.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Foundation => "FOUNDATION",
            Tier::Middle => "MIDDLE",
            Tier::Edge => "EDGE",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
