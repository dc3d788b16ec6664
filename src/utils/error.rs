use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("Bad duration format: {input:?}")]
    BadFormat { input: String },

    #[error("Month durations are not supported: {input:?}")]
    NoMonth { input: String },
}

/// Field-less discriminant of [`DurationError`], handy for matching on the
/// failure kind without caring about the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadFormat,
    NoMonth,
}

impl DurationError {
    pub fn bad_format(input: &str) -> Self {
        Self::BadFormat {
            input: input.to_string(),
        }
    }

    pub fn no_month(input: &str) -> Self {
        Self::NoMonth {
            input: input.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadFormat { .. } => ErrorKind::BadFormat,
            Self::NoMonth { .. } => ErrorKind::NoMonth,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            Self::BadFormat { input } | Self::NoMonth { input } => input,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::BadFormat { .. } => {
                "Use the ISO-8601 form P[nY][nD][T[nH][nM][nS]] or P[n]W, e.g. P1Y2DT3H4M5S"
            }
            Self::NoMonth { .. } => {
                "Months have no fixed length; express the span in days or weeks instead"
            }
        }
    }
}

/// Problems with command-line configuration, kept apart from parse failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration: {field}")]
    Missing { field: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DurationError>;
