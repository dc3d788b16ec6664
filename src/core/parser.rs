use crate::domain::model::Duration;
use crate::utils::error::{DurationError, Result};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

// 單一正規表達式：週格式 (P1W) 或 年/月/日 + 時間 組合
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^P(?:",
        r"(?P<weeks>[0-9]+)W",
        r"|",
        r"(?:(?P<years>[0-9]+)Y)?",
        r"(?:(?P<months>[0-9]+)M)?",
        r"(?:(?P<days>[0-9]+)D)?",
        r"(?P<time>T",
        r"(?:(?P<hours>[0-9]+)H)?",
        r"(?:(?P<minutes>[0-9]+)M)?",
        r"(?:(?P<seconds>[0-9]+(?:[.,][0-9]+)?)S)?",
        r")?",
        r")$",
    ))
    .expect("duration pattern is a valid regex")
});

/// Parse an ISO-8601 duration.
///
/// The whole input must match; months are rejected with
/// [`DurationError::NoMonth`] and anything else that does not fit the grammar
/// with [`DurationError::BadFormat`].
pub fn parse(text: &str) -> Result<Duration> {
    let result = parse_captures(text);

    match &result {
        Ok(duration) => tracing::trace!(input = text, ?duration, "parsed duration"),
        Err(e) => tracing::debug!(input = text, kind = ?e.kind(), "rejected duration"),
    }

    result
}

fn parse_captures(text: &str) -> Result<Duration> {
    let caps = DURATION_PATTERN
        .captures(text)
        .ok_or_else(|| DurationError::bad_format(text))?;

    if caps.name("months").is_some() {
        return Err(DurationError::no_month(text));
    }

    // "T" 之後至少需要一個時間欄位
    if caps.name("time").is_some()
        && caps.name("hours").is_none()
        && caps.name("minutes").is_none()
        && caps.name("seconds").is_none()
    {
        return Err(DurationError::bad_format(text));
    }

    Ok(Duration {
        years: integer_field(&caps, "years", text)?,
        weeks: integer_field(&caps, "weeks", text)?,
        days: integer_field(&caps, "days", text)?,
        hours: integer_field(&caps, "hours", text)?,
        minutes: integer_field(&caps, "minutes", text)?,
        seconds: seconds_field(&caps, text)?,
    })
}

fn integer_field(caps: &Captures<'_>, name: &str, text: &str) -> Result<u32> {
    match caps.name(name) {
        Some(m) => m
            .as_str()
            .parse::<u32>()
            .map_err(|_| DurationError::bad_format(text)),
        None => Ok(0),
    }
}

fn seconds_field(caps: &Captures<'_>, text: &str) -> Result<f64> {
    let Some(m) = caps.name("seconds") else {
        return Ok(0.0);
    };

    let seconds = m
        .as_str()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| DurationError::bad_format(text))?;

    if seconds.is_finite() {
        Ok(seconds)
    } else {
        Err(DurationError::bad_format(text))
    }
}

impl Duration {
    pub fn from_string(text: &str) -> Result<Self> {
        parse(text)
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}
