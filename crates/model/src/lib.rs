use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

pub mod location;
pub mod passenger;
pub mod route;
pub mod trip;
pub mod waypoint;

pub use location::Location;
pub use passenger::Passenger;
pub use route::{Leg, PlannedRoute};
pub use trip::Trip;
pub use waypoint::Waypoint;

pub trait ExampleData {
    fn example_data() -> Self;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeRange<Tz>
where
    Tz: TimeZone,
{
    pub first: DateTime<Tz>,
    pub last: DateTime<Tz>,
}

impl<Tz: TimeZone> DateTimeRange<Tz> {
    pub fn new(first: DateTime<Tz>, last: DateTime<Tz>) -> Self {
        Self { first, last }
    }
}

/// The envelope the trip feed is delivered in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trips {
    pub trips: Vec<Trip>,
}

impl Trips {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl ExampleData for Trips {
    fn example_data() -> Self {
        Self {
            trips: trip::example_trips(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    const FEED_WITH_MISSING_FIELDS: &str = r#"{
      "trips": [
        {
          "estimated_earnings": 2914,
          "slug": "af05ab6c6d0964",
          "time_anchor": "pick_up",
          "passengers": [{ "booster_seat": false }],
          "planned_route": {
            "total_time": 63.5,
            "total_distance": 46924,
            "starts_at": "2023-11-17T17:00:00Z",
            "ends_at": "2023-11-17T18:03:30Z",
            "legs": [
              { "position": 1, "start_waypoint_id": 1239662, "end_waypoint_id": 1239663 }
            ]
          },
          "waypoints": [
            {
              "id": 1239662,
              "location": {
                "address": "7 Pepper Tree Ln, Rolling Hills Estates, CA 90274, USA",
                "lat": 33.7611392,
                "lng": -118.3921106
              },
              "passengers": []
            },
            {
              "id": 1239663,
              "location": {
                "address": "1321 Cortez St, Los Angeles, CA 90026, USA",
                "lat": 34.066333,
                "lng": -118.2559734
              },
              "passengers": [
                { "uuid": "ee7d9d26-1441-41a3-b392-162a6977bad5", "booster_seat": false }
              ],
              "extra": "ignored"
            }
          ]
        }
      ]
    }"#;

    #[test]
    fn decodes_feed_with_missing_optional_fields() {
        let trips = Trips::from_json(FEED_WITH_MISSING_FIELDS).unwrap().trips;
        assert_eq!(trips.len(), 1);

        let trip = &trips[0];
        assert_eq!(trip.estimated_earnings, 2914);
        assert_eq!(trip.slug.raw_ref::<str>(), "af05ab6c6d0964");
        assert_eq!(trip.time_anchor, "pick_up");
        assert_eq!(trip.in_series, None);
        assert_eq!(trip.passengers.len(), 1);
        assert_eq!(trip.passengers[0].uuid, None);
        assert!(!trip.passengers[0].booster_seat);
        assert_eq!(
            trip.planned_route.starts_at,
            Utc.with_ymd_and_hms(2023, 11, 17, 17, 0, 0).unwrap()
        );
        assert_eq!(
            trip.waypoints[1].passengers[0].uuid.as_ref().map(|id| id.raw()),
            Some("ee7d9d26-1441-41a3-b392-162a6977bad5".to_owned())
        );
    }

    #[test]
    fn absent_fields_stay_absent_when_encoded_again() {
        let trips = Trips::from_json(FEED_WITH_MISSING_FIELDS).unwrap();
        let encoded = serde_json::to_value(&trips).unwrap();

        let trip = &encoded["trips"][0];
        assert!(trip.get("in_series").is_none());
        assert!(trip["passengers"][0].get("uuid").is_none());
        assert_eq!(trip["planned_route"]["starts_at"], "2023-11-17T17:00:00Z");

        let decoded: Trips = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded.trips[0].in_series, None);
        assert_eq!(decoded.trips[0].passengers, trips.trips[0].passengers);
    }

    #[test]
    fn missing_required_field_fails_the_whole_feed() {
        let broken = FEED_WITH_MISSING_FIELDS.replace("\"slug\": \"af05ab6c6d0964\",", "");
        assert!(Trips::from_json(&broken).is_err());
    }

    #[test]
    fn example_feed_survives_encoding() {
        let trips = Trips::example_data();
        let json = serde_json::to_string(&trips).unwrap();
        let decoded = Trips::from_json(&json).unwrap();

        assert_eq!(decoded.trips.len(), 3);
        for (decoded, original) in decoded.trips.iter().zip(&trips.trips) {
            assert_eq!(decoded.slug, original.slug);
            assert_eq!(decoded.in_series, original.in_series);
            assert_eq!(decoded.passengers, original.passengers);
            assert_eq!(decoded.planned_route.legs, original.planned_route.legs);
            assert_eq!(decoded.planned_route.span(), original.planned_route.span());
        }
    }
}
