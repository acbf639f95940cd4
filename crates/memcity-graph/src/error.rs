use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("malformed node id {0:?}: expected \"type:normalized_label\"")]
    MalformedNodeId(String),

    #[error("edge endpoint {0:?} has no corresponding node")]
    DanglingEdgeEndpoint(String),
}

pub type GraphResult<T> = std::result::Result<T, GraphError>;
