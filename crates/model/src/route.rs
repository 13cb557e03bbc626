use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use utility::{id::Id, serde::date_time};

use crate::{DateTimeRange, Waypoint};

/// One directed segment between two waypoints of the same trip. The ids are
/// not checked against the trip's waypoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// 1-based order within the route.
    pub position: i64,
    pub start_waypoint_id: Id<Waypoint>,
    pub end_waypoint_id: Id<Waypoint>,
}

impl Leg {
    pub fn new(position: i64, start_waypoint_id: i64, end_waypoint_id: i64) -> Self {
        Self {
            position,
            start_waypoint_id: Id::new(start_waypoint_id),
            end_waypoint_id: Id::new(end_waypoint_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoute {
    /// minutes
    pub total_time: f64,
    /// meters
    pub total_distance: i64,
    #[serde(
        serialize_with = "date_time::serialize_utc",
        deserialize_with = "date_time::deserialize_utc"
    )]
    pub starts_at: DateTime<Utc>,
    #[serde(
        serialize_with = "date_time::serialize_utc",
        deserialize_with = "date_time::deserialize_utc"
    )]
    pub ends_at: DateTime<Utc>,
    pub legs: Vec<Leg>,
}

impl PlannedRoute {
    pub fn span(&self) -> DateTimeRange<Utc> {
        DateTimeRange::new(self.starts_at, self.ends_at)
    }
}

pub(crate) fn example_route(
    total_time: f64,
    total_distance: i64,
    starts_at: (u32, u32, u32, u32),
    ends_at: (u32, u32, u32, u32),
    legs: &[(i64, i64)],
) -> PlannedRoute {
    let at = |(day, hour, minute, second): (u32, u32, u32, u32)| {
        Utc.with_ymd_and_hms(2023, 11, day, hour, minute, second)
            .single()
            .unwrap_or_default()
    };
    PlannedRoute {
        total_time,
        total_distance,
        starts_at: at(starts_at),
        ends_at: at(ends_at),
        legs: legs
            .iter()
            .enumerate()
            .map(|(index, (start, end))| Leg::new(index as i64 + 1, *start, *end))
            .collect(),
    }
}
