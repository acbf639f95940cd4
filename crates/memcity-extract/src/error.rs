use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("document {0:?} has no content to extract from")]
    EmptyContent(String),
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
