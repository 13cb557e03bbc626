pub mod date_time {
    use core::fmt;

    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{
        de::{self, Unexpected, Visitor},
        Deserializer, Serializer,
    };

    /// Serializes a timestamp as ISO-8601 in UTC with second precision,
    /// e.g. `2023-11-16T18:15:00Z`.
    pub fn serialize_utc<S>(
        date_time: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date_time.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Deserializes an ISO-8601 timestamp. A zone designator is required;
    /// offsets other than `Z` are normalised to UTC.
    pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DateTimeVisitor;

        impl<'de> Visitor<'de> for DateTimeVisitor {
            type Value = DateTime<Utc>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO-8601 timestamp with a zone designator")
            }

            fn visit_str<E>(self, value: &str) -> Result<DateTime<Utc>, E>
            where
                E: de::Error,
            {
                DateTime::parse_from_rfc3339(value)
                    .map(|date_time| date_time.with_timezone(&Utc))
                    .map_err(|_| de::Error::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }
}
