use crate::domain::model::{Duration, DurationForm};
use std::fmt;

/// Canonical ISO-8601 text. Zero fields are omitted, so the zero value is
/// just `P`. A non-zero `weeks` switches to week form and hides the rest.
impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("P")?;

        match self.form() {
            DurationForm::Weeks(weeks) => write!(f, "{}W", weeks),
            DurationForm::Calendar {
                years,
                days,
                hours,
                minutes,
                seconds,
            } => {
                if years != 0 {
                    write!(f, "{}Y", years)?;
                }
                if days != 0 {
                    write!(f, "{}D", days)?;
                }

                if !self.has_time() {
                    return Ok(());
                }

                f.write_str("T")?;
                if hours != 0 {
                    write!(f, "{}H", hours)?;
                }
                if minutes != 0 {
                    write!(f, "{}M", minutes)?;
                }
                if seconds != 0.0 {
                    write!(f, "{}S", seconds)?;
                }
                Ok(())
            }
        }
    }
}
