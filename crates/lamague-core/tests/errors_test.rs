use lamague_core::errors::*;
use lamague_core::models::KnowledgeBlock;

#[test]
fn subsystem_errors_convert_into_top_level() {
    let numeric: LamagueError = NumericError::EmptyVector.into();
    assert!(matches!(numeric, LamagueError::Numeric(NumericError::EmptyVector)));

    let consensus: LamagueError = ConsensusError::NoEligibleAgents.into();
    assert!(matches!(
        consensus,
        LamagueError::Consensus(ConsensusError::NoEligibleAgents)
    ));
}

#[test]
fn only_entropy_violation_is_fatal() {
    let fatal: LamagueError = PyramidError::EntropyNotReduced {
        before: 1.0,
        after: 2.0,
        rejected: Box::new(KnowledgeBlock::new("lopsided")),
    }
    .into();
    assert!(fatal.is_fatal());

    let recoverable: LamagueError = PyramidError::EmptyFoundation.into();
    assert!(!recoverable.is_fatal());
    let recoverable: LamagueError = ConsensusError::NoEligibleAgents.into();
    assert!(!recoverable.is_fatal());
}

#[test]
fn messages_carry_context() {
    let err = NumericError::ZeroNorm {
        context: "ascent".to_string(),
    };
    assert!(err.to_string().contains("ascent"));

    let err: LamagueError = PyramidError::EntropyNotReduced {
        before: 0.5,
        after: 0.75,
        rejected: Box::new(KnowledgeBlock::new("lopsided")),
    }
    .into();
    assert!(err.to_string().contains("0.500000 -> 0.750000"));
}
