use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single piece of supporting evidence for a knowledge block.
///
/// Immutable once created: fields are read through accessors only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    content: String,
    source: String,
    /// Expected in [0.0, 1.0]; not clamped.
    quality_weight: f64,
    date: DateTime<Utc>,
}

impl Evidence {
    /// Evidence item. `quality_weight` is stored as given.
    pub fn new(
        content: impl Into<String>,
        source: impl Into<String>,
        quality_weight: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            quality_weight,
            date,
        }
    }

    /// Text of the evidence.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Where the evidence came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Quality weight, nominally in [0, 1].
    pub fn quality_weight(&self) -> f64 {
        self.quality_weight
    }

    /// When the evidence was dated.
    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }
}
