use std::path::PathBuf;

/// A single watched-path change, translated from a raw `notify` event
/// (spec §4.4, §5's watcher task).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEvent {
    Changed(PathBuf),
    Removed(PathBuf),
}

impl PathEvent {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Changed(p) | Self::Removed(p) => p,
        }
    }
}

/// Forwarded by the debouncer once a path's 500 ms quiet window has elapsed
/// (spec §4.4 step 2/3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub path: PathBuf,
    pub removed: bool,
}

/// What the graph owner task receives: always "full rebuild with these
/// documents" (spec §5). The reader has already performed the blocking I/O;
/// `documents` is the currently watched set's content, read fresh.
#[derive(Debug, Clone)]
pub struct RebuildMessage {
    pub documents: Vec<(PathBuf, String)>,
}
