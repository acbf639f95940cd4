use thiserror::Error;

/// Programmer errors: malformed input that should never occur in a correct
/// caller. These indicate a defect, not a runtime condition (spec §7 item 2).
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("node id must be of the form `type:normalized-label`, got {0:?}")]
    MalformedNodeId(String),

    #[error("mention_count must be >= 1, got {0}")]
    NonPositiveMentionCount(i64),

    #[error("first_seen ({first_seen_ms}) must be <= last_seen ({last_seen_ms})")]
    SeenOrderViolation {
        first_seen_ms: i64,
        last_seen_ms: i64,
    },

    #[error("node {0:?} has an empty source set")]
    EmptySourceSet(String),
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
