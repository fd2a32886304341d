mod agent;
mod evidence;
mod knowledge_block;
pub mod symbol;
mod tier;

pub use agent::{AgentId, AgentMode};
pub use evidence::Evidence;
pub use knowledge_block::{BlockMetrics, KnowledgeBlock};
pub use symbol::{Symbol, SymbolClass};
pub use tier::Tier;
