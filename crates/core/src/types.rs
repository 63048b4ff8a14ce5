/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Date-times carried by entities are local (zone-less), encoded as
/// `YYYY-MM-DDTHH:MM:SS` on the wire and `TIMESTAMP` in the database.
///
/// Deserialize fields of this type with [`strict_timestamp`].
pub type LocalTimestamp = chrono::NaiveDateTime;

/// Serde `deserialize_with` helper for [`LocalTimestamp`] fields.
///
/// Rejects second `60`, which chrono's parser accepts as a leap second.
pub mod strict_timestamp {
    use chrono::Timelike;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use super::LocalTimestamp;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<LocalTimestamp, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = LocalTimestamp::deserialize(deserializer)?;
        if value.nanosecond() >= 1_000_000_000 {
            return Err(D::Error::custom(format!(
                "invalid date-time {value}: second must be in 0..=59"
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(deserialize_with = "strict_timestamp::deserialize")]
        at: LocalTimestamp,
    }

    fn parse(at: &str) -> Result<Stamped, serde_json::Error> {
        serde_json::from_value(serde_json::json!({ "at": at }))
    }

    #[test]
    fn accepts_iso_local_date_time() {
        let stamped = parse("2025-12-23T10:00:59").unwrap();
        assert_eq!(stamped.at.to_string(), "2025-12-23 10:00:59");
    }

    #[test]
    fn accepts_fractional_seconds() {
        assert!(parse("2025-12-23T10:00:00.250").is_ok());
    }

    #[test]
    fn rejects_leap_second() {
        let err = parse("2025-12-23T10:00:60").unwrap_err();
        assert!(err.to_string().contains("second must be in 0..=59"), "{err}");
    }

    #[test]
    fn rejects_date_without_time() {
        assert!(parse("2025-12-23").is_err());
    }
}
