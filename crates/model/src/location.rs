use serde::{Deserialize, Serialize};

use crate::ExampleData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new<S: Into<String>>(address: S, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
        }
    }
}

impl ExampleData for Location {
    fn example_data() -> Self {
        example_locations()[0].clone()
    }
}

pub(crate) fn example_locations() -> [Location; 5] {
    [
        Location::new(
            "101 Main St, Huntington Beach, CA 92648, USA",
            33.6577394,
            -118.0018199,
        ),
        Location::new("981 CA-1, Seal Beach, CA 90740, USA", 33.744308, -118.101178),
        Location::new(
            "6255 2nd St, Long Beach, CA 90803, USA",
            33.7585003,
            -118.1128225,
        ),
        Location::new(
            "102 Main St, Huntington Beach, CA 92648, USA",
            33.6577395,
            -118.00182,
        ),
        Location::new("982 CA-1, Seal Beach, CA 90740, USA", 33.744309, -118.101179),
    ]
}
