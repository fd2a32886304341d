use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::models::{Evidence, Tier};
use crate::stats;

/// Unit of knowledge held by the pyramid.
///
/// All derived metrics are recomputed from the current evidence and
/// dependencies on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBlock {
    pub content: String,
    /// Ordered as attached.
    pub evidence: Vec<Evidence>,
    pub dependencies: BTreeSet<String>,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

/// Snapshot of a block's derived metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockMetrics {
    pub power: f64,
    pub evidence_score: f64,
    pub entropy: f64,
    pub truth_pressure: f64,
    pub tier: Tier,
}

impl KnowledgeBlock {
    /// New block with no evidence or dependencies, timestamped now.
    pub fn new(content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            content: content.into(),
            evidence: Vec::new(),
            dependencies: BTreeSet::new(),
            created: now,
            last_updated: now,
        }
    }

    /// Rebuild a block from stored fields without touching timestamps.
    pub fn from_parts(
        content: impl Into<String>,
        evidence: Vec<Evidence>,
        dependencies: BTreeSet<String>,
        created: DateTime<Utc>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            content: content.into(),
            evidence,
            dependencies,
            created,
            last_updated,
        }
    }

    /// Builder form of `add_evidence`; leaves `last_updated` alone.
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    /// Add a dependency. Duplicates collapse.
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.insert(dependency.into());
        self
    }

    /// Override the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Attach evidence and bump `last_updated`.
    pub fn add_evidence(&mut self, evidence: Evidence) {
        self.evidence.push(evidence);
        self.last_updated = Utc::now();
    }

    /// Add a dependency label and bump `last_updated`. Returns false if it was already present.
    pub fn add_dependency(&mut self, dependency: impl Into<String>) -> bool {
        let inserted = self.dependencies.insert(dependency.into());
        if inserted {
            self.last_updated = Utc::now();
        }
        inserted
    }

    /// Structural impact: number of dependencies.
    pub fn power(&self) -> f64 {
        self.dependencies.len() as f64
    }

    /// Sum of evidence quality weights.
    pub fn evidence_score(&self) -> f64 {
        self.evidence.iter().map(Evidence::quality_weight).sum()
    }

    /// Coefficient of variation of the quality weights, 1.0 without evidence.
    ///
    /// ```text
    /// entropy = stddev_pop(w) / (mean(w) + ε)
    /// ```
    pub fn entropy(&self) -> f64 {
        let weights = self.quality_weights();
        match (stats::mean(&weights), stats::population_std_dev(&weights)) {
            (Some(mean), Some(std_dev)) => std_dev / (mean + EPSILON),
            _ => 1.0,
        }
    }

    /// Truth pressure Π = (evidence_score × power) / (entropy + ε).
    pub fn truth_pressure(&self) -> f64 {
        (self.evidence_score() * self.power()) / (self.entropy() + EPSILON)
    }

    /// Tier this block classifies into by truth pressure.
    pub fn tier(&self) -> Tier {
        Tier::for_pressure(self.truth_pressure())
    }

    /// Power, evidence score, entropy and truth pressure in one pass.
    pub fn metrics(&self) -> BlockMetrics {
        let power = self.power();
        let evidence_score = self.evidence_score();
        let entropy = self.entropy();
        let truth_pressure = (evidence_score * power) / (entropy + EPSILON);
        BlockMetrics {
            power,
            evidence_score,
            entropy,
            truth_pressure,
            tier: Tier::for_pressure(truth_pressure),
        }
    }

    fn quality_weights(&self) -> Vec<f64> {
        self.evidence.iter().map(Evidence::quality_weight).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(weight: f64) -> Evidence {
        Evidence::new("e", "test", weight, Utc::now())
    }

    #[test]
    fn metrics_recompute_after_mutation() {
        let mut block = KnowledgeBlock::new("b").with_dependency("x");
        assert_eq!(block.truth_pressure(), 0.0);

        block.add_evidence(evidence(0.3));
        block.add_evidence(evidence(0.9));
        assert!((block.evidence_score() - 1.2).abs() < 1e-12);
        assert!((block.entropy() - 0.5).abs() < 1e-5);
        assert!((block.truth_pressure() - 2.4).abs() < 1e-4);

        assert!(block.add_dependency("y"));
        assert!(!block.add_dependency("y"));
        assert!((block.truth_pressure() - 4.8).abs() < 1e-4);
    }

    #[test]
    fn metrics_snapshot_matches_accessors() {
        let block = KnowledgeBlock::new("b")
            .with_dependency("a")
            .with_evidence(evidence(0.5))
            .with_evidence(evidence(0.9));
        let m = block.metrics();
        assert_eq!(m.power, block.power());
        assert_eq!(m.entropy, block.entropy());
        assert_eq!(m.truth_pressure, block.truth_pressure());
        assert_eq!(m.tier, Tier::Foundation);
    }
}
