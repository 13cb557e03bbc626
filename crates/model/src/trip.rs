use chrono::Utc;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{
    passenger::example_passengers,
    route::example_route,
    waypoint::example_waypoints,
    DateTimeRange, ExampleData, Passenger, PlannedRoute, Waypoint,
};

/// A scheduled ride as delivered by the trip feed.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// cents
    pub estimated_earnings: i64,
    pub slug: Id<Trip>,
    /// opaque tag such as `pick_up`, never parsed.
    pub time_anchor: String,
    pub in_series: Option<bool>,
    pub passengers: Vec<Passenger>,
    pub planned_route: PlannedRoute,
    pub waypoints: Vec<Waypoint>,
}

impl Trip {
    pub fn span(&self) -> DateTimeRange<Utc> {
        self.planned_route.span()
    }

    pub fn rider_count(&self) -> usize {
        self.passengers.len()
    }

    pub fn booster_count(&self) -> usize {
        self.passengers
            .iter()
            .filter(|passenger| passenger.booster_seat)
            .count()
    }
}

impl HasId for Trip {
    type IdType = String;
}

impl ExampleData for Trip {
    fn example_data() -> Self {
        example_trips().remove(0)
    }
}

pub(crate) fn example_trips() -> Vec<Trip> {
    let waypoints = example_waypoints();
    let pick = |indices: &[usize]| {
        indices
            .iter()
            .map(|index| waypoints[*index].clone())
            .collect::<Vec<_>>()
    };

    vec![
        Trip {
            estimated_earnings: 2000,
            slug: Id::new("trip1".to_owned()),
            time_anchor: "2023-11-16T18:15:00Z".to_owned(),
            in_series: Some(true),
            passengers: example_passengers(1),
            planned_route: example_route(
                25.9,
                15781,
                (16, 18, 15, 0),
                (16, 18, 40, 55),
                &[
                    (1_252_826, 1_252_827),
                    (1_252_827, 1_252_828),
                    (1_252_828, 1_252_829),
                    (1_252_829, 1_252_830),
                ],
            ),
            waypoints: pick(&[0, 1, 2, 3, 4]),
        },
        Trip {
            estimated_earnings: 2500,
            slug: Id::new("trip2".to_owned()),
            time_anchor: "2023-11-17T08:00:00Z".to_owned(),
            in_series: Some(true),
            passengers: example_passengers(2),
            planned_route: example_route(
                30.0,
                20000,
                (17, 8, 0, 0),
                (17, 8, 30, 0),
                &[
                    (1_252_829, 1_252_830),
                    (1_252_830, 1_252_828),
                    (1_252_828, 1_252_827),
                ],
            ),
            waypoints: pick(&[3, 4, 2]),
        },
        Trip {
            estimated_earnings: 1800,
            slug: Id::new("trip3".to_owned()),
            time_anchor: "2023-11-18T14:00:00Z".to_owned(),
            in_series: Some(true),
            passengers: example_passengers(3),
            planned_route: example_route(
                15.5,
                12000,
                (18, 14, 0, 0),
                (18, 14, 15, 30),
                &[
                    (1_252_830, 1_252_829),
                    (1_252_829, 1_252_827),
                    (1_252_827, 1_252_826),
                ],
            ),
            waypoints: pick(&[4, 3, 1, 0]),
        },
    ]
}
