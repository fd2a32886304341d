use serde_json::json;
use tracing::{debug, instrument};

use lamague_core::constants::{CASCADE_EPSILON, CASCADE_OPERATION};
use lamague_core::errors::{LamagueResult, PyramidError};
use lamague_core::models::{KnowledgeBlock, Tier};
use lamague_core::tracing::events;
use lamague_ledger::{AuditReport, EnergyLedger, LedgerContext};

use crate::compression::compress_block;

/// Result of a successful cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeOutcome {
    /// Reorganization energy logged to the ledger.
    pub energy: f64,
    /// Foundation blocks compressed into the middle tier.
    pub demoted: usize,
    pub entropy_before: f64,
    pub entropy_after: f64,
}

/// Three-tier knowledge store.
///
/// Tier membership is positional: a block belongs to whichever sequence
/// holds it. Blocks only ever move downward, from foundation to middle,
/// and only during a cascade.
#[derive(Debug, Clone, Default)]
pub struct PyramidCascade {
    foundation: Vec<KnowledgeBlock>,
    middle: Vec<KnowledgeBlock>,
    edge: Vec<KnowledgeBlock>,
    ledger: EnergyLedger,
    previous_entropy: f64,
}

impl PyramidCascade {
    /// Empty pyramid with a default ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an existing (possibly configured) ledger for cascade bookkeeping.
    pub fn with_ledger(ledger: EnergyLedger) -> Self {
        Self {
            ledger,
            ..Self::default()
        }
    }

    /// Foundation tier, in insertion order.
    pub fn foundation(&self) -> &[KnowledgeBlock] {
        &self.foundation
    }

    /// Middle tier, including compressed demotions.
    pub fn middle(&self) -> &[KnowledgeBlock] {
        &self.middle
    }

    /// Edge tier.
    pub fn edge(&self) -> &[KnowledgeBlock] {
        &self.edge
    }

    /// Ledger holding one entry per cascade attempt.
    pub fn ledger(&self) -> &EnergyLedger {
        &self.ledger
    }

    /// Audit of the cascade ledger.
    pub fn audit(&self) -> AuditReport {
        self.ledger.audit()
    }

    /// Total entropy snapshotted by the most recent cascade attempt.
    pub fn previous_entropy(&self) -> f64 {
        self.previous_entropy
    }

    /// Blocks across all three tiers.
    pub fn len(&self) -> usize {
        self.foundation.len() + self.middle.len() + self.edge.len()
    }

    /// True when no tier holds a block.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify a truth pressure without touching the store.
    pub fn get_layer_for_pressure(pressure: f64) -> Tier {
        Tier::for_pressure(pressure)
    }

    /// Place `block` by truth pressure, cascading when it dominates the foundation.
    ///
    /// Returns the tier the block landed in. Middle and edge blocks are never
    /// promoted later. A cascade rejected for raising entropy stores nothing;
    /// the block comes back inside [`PyramidError::EntropyNotReduced`].
    pub fn add_block(&mut self, block: KnowledgeBlock) -> LamagueResult<Tier> {
        let pressure = block.truth_pressure();
        let tier = Tier::for_pressure(pressure);
        events::block_placed(&block.content, tier, pressure);

        match tier {
            Tier::Foundation => {
                if self.should_cascade(&block) {
                    self.execute_cascade(block)?;
                } else {
                    self.foundation.push(block);
                }
            }
            Tier::Middle => self.middle.push(block),
            Tier::Edge => self.edge.push(block),
        }
        Ok(tier)
    }

    /// Lowest truth pressure in the foundation, `None` when it is empty.
    pub fn min_foundation_pressure(&self) -> Option<f64> {
        self.foundation
            .iter()
            .map(KnowledgeBlock::truth_pressure)
            .reduce(f64::min)
    }

    /// True iff the foundation is non-empty and `new_block` beats its weakest
    /// member by more than the cascade margin.
    pub fn should_cascade(&self, new_block: &KnowledgeBlock) -> bool {
        match self.min_foundation_pressure() {
            Some(min) => new_block.truth_pressure() > min + CASCADE_EPSILON,
            None => false,
        }
    }

    /// Demote the whole foundation and install `new_block` as its only member.
    ///
    /// 1. energy = (Π_new − Π_min) × |foundation|, logged to the ledger
    /// 2. snapshot total entropy
    /// 3. compress every foundation block into the middle tier
    /// 4. foundation = [new_block]
    /// 5. total entropy must have strictly decreased
    ///
    /// If step 5 fails the tiers are restored and
    /// [`PyramidError::EntropyNotReduced`] is returned with `new_block` inside
    /// it; the ledger entry stays.
    #[instrument(skip(self, new_block), fields(content = %new_block.content))]
    pub fn execute_cascade(&mut self, new_block: KnowledgeBlock) -> LamagueResult<CascadeOutcome> {
        let min_pressure = self
            .min_foundation_pressure()
            .ok_or(PyramidError::EmptyFoundation)?;
        let new_pressure = new_block.truth_pressure();
        let delta = new_pressure - min_pressure;
        let foundation_size = self.foundation.len();
        let energy = delta * foundation_size as f64;

        let mut context = LedgerContext::new();
        context.insert("new_block".to_string(), json!(new_block.content));
        context.insert("old_foundation_size".to_string(), json!(foundation_size));
        context.insert("pi_increase".to_string(), json!(delta));
        self.ledger.spend(energy, CASCADE_OPERATION, context);

        let entropy_before = self.total_entropy();
        self.previous_entropy = entropy_before;

        let old_foundation = std::mem::take(&mut self.foundation);
        let middle_len = self.middle.len();
        self.middle.extend(old_foundation.iter().map(compress_block));

        // Foundation is empty here, so this is the total with `new_block` as its only member.
        let entropy_after = self.total_entropy() + new_block.entropy();
        debug!(entropy_before, entropy_after, "cascade entropy check");

        // Negated comparison so a NaN entropy also fails the check.
        if !(entropy_after < entropy_before) {
            self.middle.truncate(middle_len);
            self.foundation = old_foundation;
            events::cascade_rejected(&new_block.content, entropy_before, entropy_after);
            return Err(PyramidError::EntropyNotReduced {
                before: entropy_before,
                after: entropy_after,
                rejected: Box::new(new_block),
            }
            .into());
        }

        events::cascade_executed(&new_block.content, foundation_size, entropy_before, entropy_after);
        self.foundation = vec![new_block];
        Ok(CascadeOutcome {
            energy,
            demoted: foundation_size,
            entropy_before,
            entropy_after,
        })
    }

    /// Sum of block entropies across all three tiers.
    pub fn total_entropy(&self) -> f64 {
        self.foundation
            .iter()
            .chain(&self.middle)
            .chain(&self.edge)
            .map(KnowledgeBlock::entropy)
            .sum()
    }
}
