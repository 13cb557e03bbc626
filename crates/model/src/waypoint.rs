use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::{
    location::example_locations, passenger::example_passengers, Location, Passenger,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: Id<Waypoint>,
    pub location: Location,
    pub passengers: Vec<Passenger>,
}

impl Waypoint {
    pub fn address(&self) -> &str {
        &self.location.address
    }
}

impl HasId for Waypoint {
    type IdType = i64;
}

pub(crate) fn example_waypoints() -> Vec<Waypoint> {
    let passenger_groups = [1, 1, 1, 2, 3];
    example_locations()
        .into_iter()
        .zip(passenger_groups)
        .enumerate()
        .map(|(index, (location, group))| Waypoint {
            id: Id::new(1_252_826 + index as i64),
            location,
            passengers: example_passengers(group),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_waypoint() {
        let json = r#"{
            "id": 1252826,
            "location": {
                "address": "101 Main St, Huntington Beach, CA 92648, USA",
                "lat": 33.6577394,
                "lng": -118.0018199
            },
            "passengers": []
        }"#;
        let waypoint: Waypoint = serde_json::from_str(json).unwrap();
        assert_eq!(waypoint.id.raw(), 1_252_826);
        assert_eq!(waypoint.address(), "101 Main St, Huntington Beach, CA 92648, USA");
        assert!(waypoint.passengers.is_empty());
    }
}
