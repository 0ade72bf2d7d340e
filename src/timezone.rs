use chrono_tz::Tz;
use std::collections::HashSet;

/// Answers whether a timezone name is recognized.
pub trait TimezoneRegistry: Send + Sync {
    fn contains(&self, name: &str) -> bool;
}

/// The IANA tz database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTimezones;

impl TimezoneRegistry for IanaTimezones {
    fn contains(&self, name: &str) -> bool {
        name.parse::<Tz>().is_ok()
    }
}

/// A fixed set of accepted names, for deployments that restrict zones and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTimezones {
    names: HashSet<String>,
}

impl StaticTimezones {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl TimezoneRegistry for StaticTimezones {
    fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
