use thiserror::Error;

/// Failures surfaced by [`crate::project`]. Per spec §7's "programmer
/// errors" class: these indicate a malformed snapshot was handed to a pure
/// function, not a runtime condition the caller should retry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("edge references node id {0:?} which is absent from the snapshot")]
    DanglingEdgeEndpoint(String),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
