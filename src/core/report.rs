use crate::domain::model::{Duration, DurationForm};
use crate::utils::error::DurationError;
use serde::Serialize;

/// One line of CLI output: either the parsed value and its fixed-length span,
/// or the reason the input was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanoseconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn from_input(input: &str) -> Self {
        match Duration::from_string(input) {
            Ok(duration) => Self::success(input, &duration),
            Err(e) => Self::failure(input, &e),
        }
    }

    pub fn success(input: &str, duration: &Duration) -> Self {
        let delta = duration.to_duration();
        let total_seconds =
            delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1_000_000_000.0;

        Self {
            input: input.to_string(),
            canonical: Some(duration.to_string()),
            form: Some(match duration.form() {
                DurationForm::Weeks(_) => "weeks",
                DurationForm::Calendar { .. } => "calendar",
            }),
            total_seconds: Some(total_seconds),
            nanoseconds: delta.num_nanoseconds(),
            error: None,
        }
    }

    pub fn failure(input: &str, error: &DurationError) -> Self {
        Self {
            input: input.to_string(),
            canonical: None,
            form: None,
            total_seconds: None,
            nanoseconds: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn render_text(&self) -> String {
        match (&self.error, &self.canonical, self.total_seconds) {
            (Some(error), _, _) => format!("{}\terror: {}", self.input, error),
            (None, Some(canonical), Some(seconds)) => {
                format!("{}\t{}\t{}s", self.input, canonical, seconds)
            }
            _ => self.input.clone(),
        }
    }
}
