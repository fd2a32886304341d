/// Multi-agent consensus errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsensusError {
    /// No Healthy or Aligned agent is available to form a consensus.
    #[error("no healthy agents for consensus")]
    NoEligibleAgents,

    /// An agent's vectors do not match the dimension of the network.
    #[error("agent {agent} has dimension {actual}, network expects {expected}")]
    DimensionMismatch {
        agent: String,
        expected: usize,
        actual: usize,
    },
}
