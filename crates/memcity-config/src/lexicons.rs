//! Default lexicons for the ticker extractor (spec §4.1). Both lists are
//! overridable via `MEMCITY_TICKER_WHITELIST` / `MEMCITY_TICKER_STOPLIST`
//! (comma-delimited, spec §6); these are the built-in defaults.

/// Re-exported from `memcity-model`, which is the single source of truth:
/// `memcity-extract` builds its own built-in stoplist from the same
/// constant, so there is exactly one ~100-entry list in the workspace
/// instead of two that can drift apart.
pub use memcity_model::DEFAULT_TICKER_STOPLIST;
