use crate::models::KnowledgeBlock;

/// Pyramid cascade errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PyramidError {
    /// Cascade math requires at least one foundation block.
    #[error("foundation tier is empty")]
    EmptyFoundation,

    /// A cascade must strictly reduce total entropy. Fatal.
    ///
    /// Carries the newcomer that triggered the cascade; it was not stored.
    #[error("cascade increased entropy: {before:.6} -> {after:.6}")]
    EntropyNotReduced {
        before: f64,
        after: f64,
        rejected: Box<KnowledgeBlock>,
    },
}
