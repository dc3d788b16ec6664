pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use crate::core::{parser::parse, report::Report};
pub use domain::model::{Duration, DurationForm};
pub use utils::error::{ConfigError, DurationError, ErrorKind, Result};
