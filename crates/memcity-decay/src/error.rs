use memcity_model::ModelError;
use thiserror::Error;

/// Programmer errors surfaced while building a [`memcity_model::Snapshot`]:
/// an invariant violation caught at the re-check gate `spec.md` §4.4/§7
/// requires before publication.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecayError {
    #[error("snapshot invariant violated before publication: {0}")]
    InvariantViolation(#[from] ModelError),

    #[error("edge {source_id:?}-{target_id:?} has no corresponding node in the snapshot")]
    DanglingEdgeEndpoint { source_id: String, target_id: String },
}

pub type DecayResult<T> = std::result::Result<T, DecayError>;
