use crate::domain::model::{
    Duration, DAYS_PER_WEEK, DAYS_PER_YEAR, NANOS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR,
    SECONDS_PER_MINUTE,
};
use chrono::TimeDelta;

impl Duration {
    /// Convert to an absolute span using fixed lengths: a year is 365 days,
    /// a week 7 days and a day 24 hours.
    ///
    /// Fractional seconds are rounded to the nearest nanosecond. The result
    /// saturates at [`TimeDelta::MAX`] / [`TimeDelta::MIN`] rather than
    /// overflowing. Not suitable where calendar-accurate spans are needed.
    pub fn to_duration(&self) -> TimeDelta {
        let days = i128::from(self.years) * DAYS_PER_YEAR
            + i128::from(self.weeks) * DAYS_PER_WEEK
            + i128::from(self.days);

        let whole_seconds = days * SECONDS_PER_DAY
            + i128::from(self.hours) * SECONDS_PER_HOUR
            + i128::from(self.minutes) * SECONDS_PER_MINUTE;

        let nanos = whole_seconds
            .saturating_mul(NANOS_PER_SECOND)
            .saturating_add(seconds_to_nanos(self.seconds));

        delta_from_nanos(nanos)
    }

    /// Same as [`Duration::to_duration`], clamped to zero when the span is
    /// negative (only possible with hand-built negative seconds).
    pub fn to_std(&self) -> std::time::Duration {
        self.to_duration()
            .to_std()
            .unwrap_or(std::time::Duration::ZERO)
    }
}

impl From<Duration> for TimeDelta {
    fn from(value: Duration) -> Self {
        value.to_duration()
    }
}

fn seconds_to_nanos(seconds: f64) -> i128 {
    if seconds.is_nan() {
        return 0;
    }
    // float -> int `as` saturates, which covers the infinities
    (seconds * NANOS_PER_SECOND as f64).round() as i128
}

fn delta_from_nanos(nanos: i128) -> TimeDelta {
    let saturated = if nanos < 0 {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    };

    let secs = nanos.div_euclid(NANOS_PER_SECOND);
    let subsec = nanos.rem_euclid(NANOS_PER_SECOND);

    match (i64::try_from(secs), u32::try_from(subsec)) {
        (Ok(secs), Ok(subsec)) => TimeDelta::new(secs, subsec).unwrap_or(saturated),
        _ => saturated,
    }
}
