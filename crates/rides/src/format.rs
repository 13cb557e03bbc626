//! Display strings for trips and trip groups. Every function here is pure.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use model::{DateTimeRange, Waypoint};

/// `2000` cents become `"$20.00"`.
pub fn currency(cents: i64) -> String {
    format!("${:.2}", cents as f64 / 100.0)
}

/// Clock time with a single lowercase meridiem letter, e.g. `"1:15p"`.
pub fn time<Tz: TimeZone>(at: &DateTime<Utc>, zone: &Tz) -> String {
    let local = at.with_timezone(zone);
    let (is_pm, hour) = local.hour12();
    let meridiem = if is_pm { "p" } else { "a" };
    format!("{}:{:02}{}", hour, local.minute(), meridiem)
}

pub fn time_range<Tz: TimeZone>(range: &DateTimeRange<Utc>, zone: &Tz) -> String {
    format!("{} - {}", time(&range.first, zone), time(&range.last, zone))
}

/// The key trips are grouped by, e.g. `"2023-11-16"`.
pub fn date_key<Tz: TimeZone>(at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format("%Y-%m-%d").to_string()
}

/// Section header date, e.g. `"Thu 11/16"`.
pub fn date_label<Tz: TimeZone>(at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.with_timezone(zone).format("%a %m/%d").to_string()
}

/// `"(3 riders - 1 booster)"`, the booster part is left out when there are none.
pub fn riders(riders: usize, boosters: usize) -> String {
    let riders_text = match riders {
        1 => "1 rider".to_owned(),
        n => format!("{n} riders"),
    };
    let boosters_text = match boosters {
        1 => "1 booster".to_owned(),
        n => format!("{n} boosters"),
    };

    if boosters == 0 {
        format!("({riders_text})")
    } else {
        format!("({riders_text} - {boosters_text})")
    }
}

/// Shortens `"street, city, STATE ZIP, country"` to `"street, city ZIP"`.
///
/// With at least three comma separated segments, the last word of the second
/// to last segment is taken as zip code and appended to the third to last
/// segment, then the original second to last and the last segment are dropped.
/// Shorter addresses are returned as is. Addresses with a different shape
/// (no country, extra unit segments) come out garbled; callers rely on this
/// exact output, so it is left alone.
pub fn condensed_address(address: &str) -> String {
    let mut segments = address
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(str::trim)
        .collect::<Vec<_>>();

    let count = segments.len();
    if count < 3 {
        return segments.join(", ");
    }

    let zip = segments[count - 2]
        .split(' ')
        .filter(|word| !word.is_empty())
        .last()
        .unwrap_or("");
    let city_zip = format!("{} {}", segments[count - 3], zip);

    let mut condensed = segments.drain(..count - 3).map(str::to_owned).collect::<Vec<_>>();
    condensed.push(city_zip);
    condensed.join(", ")
}

/// One line per waypoint, numbered from 1: `"1. 101 Main St, Huntington Beach 92648"`.
pub fn numbered_addresses(waypoints: &[Waypoint]) -> Vec<String> {
    waypoints
        .iter()
        .enumerate()
        .map(|(index, waypoint)| {
            format!("{}. {}", index + 1, condensed_address(waypoint.address()))
        })
        .collect()
}
