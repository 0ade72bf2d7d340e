use chrono::{DateTime, NaiveDateTime};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a local date-time, or an RFC 3339 one reduced to its local wall-clock time.
pub fn parse(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_local()))
}

struct NaiveDateTimeVisitor;

impl<'de> Visitor<'de> for NaiveDateTimeVisitor {
    type Value = NaiveDateTime;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a date and time string or a TOML datetime")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        parse(v).ok_or_else(|| E::custom(format!("invalid date and time '{}'", v)))
    }

    // TOML datetimes reach serde as a single-entry map
    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let datetime =
            toml::value::Datetime::deserialize(de::value::MapAccessDeserializer::new(map))?;
        self.visit_str(&datetime.to_string())
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NaiveDateTimeVisitor)
}

pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "super::deserialize")] NaiveDateTime);

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<Wrapper>::deserialize(deserializer)?;
        Ok(opt.map(|Wrapper(dt)| dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_formats() {
        let expected = parse("2024-01-20T19:30:00").unwrap();
        assert_eq!(expected.hour(), 19);
        assert_eq!(parse("2024-01-20 19:30:00"), Some(expected));
        assert_eq!(parse("2024-01-20T19:30:00+11:00"), Some(expected));
        assert_eq!(parse("2024-01-20"), None);
        assert_eq!(parse("not a date"), None);
    }
}
