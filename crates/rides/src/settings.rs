use std::env;

use chrono_tz::Tz;

/// The zone dates and times are shown in. Trips are grouped by the calendar
/// day in this zone as well, so headers and groups always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub zone: Tz,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            zone: chrono_tz::America::New_York,
        }
    }
}

impl DisplaySettings {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Reads the IANA zone name from `RIDES_TIMEZONE`.
    pub fn env() -> Self {
        Self::from_var(env::var("RIDES_TIMEZONE").ok().as_deref())
    }

    /// Unset or unknown zone names fall back to the default zone.
    pub fn from_var(name: Option<&str>) -> Self {
        match name {
            Some(name) => Self::parse(name).unwrap_or_else(|| {
                log::warn!("unknown RIDES_TIMEZONE '{name}', using the default zone");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        name.trim().parse::<Tz>().ok().map(Self::new)
    }
}
