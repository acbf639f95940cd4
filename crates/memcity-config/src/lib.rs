//! Configuration surface for the memory knowledge-graph pipeline: process
//! environment variables layered over literal defaults, with an optional
//! TOML file for the district and lexicon tables (spec §6).

mod config;
mod districts;
mod error;
mod lexicons;

pub use config::Config;
pub use districts::{DistrictDef, DistrictDefinitions};
pub use error::{ConfigError, ConfigResult};
pub use lexicons::DEFAULT_TICKER_STOPLIST;
