use chrono::{DateTime, TimeZone, Utc};
use indexmap::IndexMap;
use model::{DateTimeRange, Trip};

use crate::format;

/// Trips starting on the same calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct TripGroup {
    pub date_key: String,
    /// in feed order
    pub trips: Vec<Trip>,
    pub total_estimated_earnings: i64,
    /// start of the first trip, which is only the earliest one if the feed is sorted.
    pub starts_at: DateTime<Utc>,
    /// end of the last trip, see `starts_at`.
    pub ends_at: DateTime<Utc>,
}

impl TripGroup {
    /// Returns `None` for an empty trip list, a group always holds at least one trip.
    pub fn new(date_key: String, trips: Vec<Trip>) -> Option<Self> {
        let starts_at = trips.first()?.planned_route.starts_at;
        let ends_at = trips.last()?.planned_route.ends_at;
        let total_estimated_earnings = trips.iter().map(|trip| trip.estimated_earnings).sum();

        Some(Self {
            date_key,
            trips,
            total_estimated_earnings,
            starts_at,
            ends_at,
        })
    }

    pub fn span(&self) -> DateTimeRange<Utc> {
        DateTimeRange::new(self.starts_at, self.ends_at)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

/// Partitions trips by the calendar day their route starts on in `zone`.
///
/// Groups come out in ascending date order. Within a group the feed order is
/// kept, trips are not sorted by start time.
pub fn group_trips<Tz>(trips: Vec<Trip>, zone: &Tz) -> Vec<TripGroup>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut by_date: IndexMap<String, Vec<Trip>> = IndexMap::new();
    for trip in trips {
        let key = format::date_key(&trip.planned_route.starts_at, zone);
        by_date.entry(key).or_default().push(trip);
    }
    by_date.sort_keys();

    by_date
        .into_iter()
        .filter_map(|(date_key, trips)| TripGroup::new(date_key, trips))
        .collect()
}
