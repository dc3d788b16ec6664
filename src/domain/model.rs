/// Fixed-length approximations used when turning calendar components into an
/// absolute span. No leap years, no daylight saving.
pub const DAYS_PER_YEAR: i128 = 365;
pub const DAYS_PER_WEEK: i128 = 7;
pub const SECONDS_PER_DAY: i128 = 86_400;
pub const SECONDS_PER_HOUR: i128 = 3_600;
pub const SECONDS_PER_MINUTE: i128 = 60;
pub const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// An ISO-8601 duration such as `P1Y2DT3H4M5S` or `P2W`.
///
/// There is deliberately no month field: a month has no fixed length and the
/// parser rejects it. Fields are stored as given and never normalized, so
/// `minutes: 90` stays 90 minutes rather than becoming `1H30M`.
///
/// A value is either in week form (only `weeks` set) or calendar form (any
/// mix of the other fields). Hand-built values may set both; see
/// [`Duration::form`] for how that is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Duration {
    pub years: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// The two shapes an ISO-8601 duration can take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationForm {
    Weeks(u32),
    Calendar {
        years: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: f64,
    },
}

impl Duration {
    pub fn from_weeks(weeks: u32) -> Self {
        Self {
            weeks,
            ..Self::default()
        }
    }

    /// Week form wins whenever `weeks` is non-zero; the remaining fields are
    /// then ignored, matching what the formatter emits.
    pub fn form(&self) -> DurationForm {
        if self.weeks != 0 {
            DurationForm::Weeks(self.weeks)
        } else {
            DurationForm::Calendar {
                years: self.years,
                days: self.days,
                hours: self.hours,
                minutes: self.minutes,
                seconds: self.seconds,
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }

    pub(crate) fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0.0
    }
}

impl From<DurationForm> for Duration {
    fn from(form: DurationForm) -> Self {
        match form {
            DurationForm::Weeks(weeks) => Self::from_weeks(weeks),
            DurationForm::Calendar {
                years,
                days,
                hours,
                minutes,
                seconds,
            } => Self {
                years,
                weeks: 0,
                days,
                hours,
                minutes,
                seconds,
            },
        }
    }
}
