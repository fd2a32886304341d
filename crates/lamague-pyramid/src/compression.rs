use chrono::Utc;

use lamague_core::constants::{COMPRESSED_EVIDENCE_LIMIT, COMPRESSED_PREFIX};
use lamague_core::models::KnowledgeBlock;

/// Compressed copy of `block` for demotion.
///
/// Keeps the first three evidence entries in their original order,
/// dependencies and `created` unchanged, relabels the content, and stamps
/// `last_updated` with the current time. The input is not modified.
pub fn compress_block(block: &KnowledgeBlock) -> KnowledgeBlock {
    let evidence = block
        .evidence
        .iter()
        .take(COMPRESSED_EVIDENCE_LIMIT)
        .cloned()
        .collect();

    KnowledgeBlock::from_parts(
        format!("{} {}", COMPRESSED_PREFIX, block.content),
        evidence,
        block.dependencies.clone(),
        block.created,
        Utc::now(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lamague_core::models::Evidence;

    #[test]
    fn keeps_first_three_evidence_in_order() {
        let created = Utc.with_ymd_and_hms(1687, 7, 5, 0, 0, 0).unwrap();
        let mut block = KnowledgeBlock::new("Classical mechanics")
            .with_dependency("physics")
            .with_created(created);
        for (i, w) in [0.2, 1.0, 0.4, 0.9, 0.8].iter().enumerate() {
            block = block.with_evidence(Evidence::new(format!("e{i}"), "src", *w, created));
        }
        let original = block.clone();

        let compressed = compress_block(&block);

        assert_eq!(compressed.content, "[Compressed] Classical mechanics");
        let kept: Vec<&str> = compressed.evidence.iter().map(|e| e.content()).collect();
        assert_eq!(kept, vec!["e0", "e1", "e2"]);
        assert_eq!(compressed.dependencies, block.dependencies);
        assert_eq!(compressed.created, created);
        assert!(compressed.last_updated >= block.last_updated);
        assert_eq!(block, original);
    }

    #[test]
    fn short_evidence_lists_are_kept_whole() {
        let block = KnowledgeBlock::new("short")
            .with_evidence(Evidence::new("only", "src", 0.5, Utc::now()));
        assert_eq!(compress_block(&block).evidence.len(), 1);
    }
}
