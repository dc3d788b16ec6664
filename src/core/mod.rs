pub mod convert;
pub mod formatter;
pub mod parser;
pub mod report;

pub use crate::domain::model::{Duration, DurationForm};
pub use crate::utils::error::Result;
