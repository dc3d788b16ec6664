use crate::domain::model::Duration;
use serde::{de, Deserialize, Serialize};
use std::fmt;

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DurationVisitor)
    }
}

struct DurationVisitor;

impl de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "an ISO-8601 duration string or a non-negative number of seconds"
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.parse::<Duration>().map_err(de::Error::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(from_seconds(v as f64))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v < 0 {
            return Err(de::Error::invalid_value(
                de::Unexpected::Signed(v),
                &"a non-negative number of seconds",
            ));
        }
        Ok(from_seconds(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if !v.is_finite() || v < 0.0 {
            return Err(de::Error::invalid_value(
                de::Unexpected::Float(v),
                &"a non-negative number of seconds",
            ));
        }
        Ok(from_seconds(v))
    }
}

fn from_seconds(seconds: f64) -> Duration {
    Duration {
        seconds,
        ..Duration::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_canonical_string() {
        let d = Duration {
            years: 1,
            days: 2,
            hours: 3,
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"P1Y2DT3H\"");
    }

    #[test]
    fn test_deserialize_string() {
        let d: Duration = serde_json::from_str("\"P1W\"").unwrap();
        assert_eq!(d, Duration::from_weeks(1));
    }

    #[test]
    fn test_deserialize_rejects_month() {
        let err = serde_json::from_str::<Duration>("\"P1M\"").unwrap_err();
        assert!(err.to_string().contains("Month durations are not supported"));
    }

    #[test]
    fn test_deserialize_seconds() {
        let d: Duration = serde_json::from_str("90").unwrap();
        assert_eq!(d.seconds, 90.0);
        assert_eq!(d.to_string(), "PT90S");

        let d: Duration = serde_json::from_str("1.25").unwrap();
        assert_eq!(d.seconds, 1.25);

        assert!(serde_json::from_str::<Duration>("-1").is_err());
        assert!(serde_json::from_str::<Duration>("-0.5").is_err());
    }
}
