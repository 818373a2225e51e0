/// Serde adaptor for the RFC 3339 timestamps the event stream carries.
pub mod dt {
    use std::fmt;

    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserializer, Serialize, Serializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        struct Visitor;
        impl<'a> serde::de::Visitor<'a> for Visitor {
            type Value = DateTime<Utc>;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.pad("an RFC 3339 timestamp")
            }
            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                DateTime::parse_from_rfc3339(s)
                    .map(|d| d.into())
                    .map_err(E::custom)
            }
        }

        d.deserialize_str(Visitor)
    }

    pub fn serialize<S: Serializer>(d: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        d.to_rfc3339_opts(SecondsFormat::Millis, true).serialize(s)
    }
}
