use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ExampleData;

/// A rider. The uuid is missing for anonymized or not yet assigned passengers.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub uuid: Option<Id<Passenger>>,
    pub booster_seat: bool,
}

impl Passenger {
    pub fn new(uuid: Option<&str>, booster_seat: bool) -> Self {
        Self {
            uuid: uuid.map(|uuid| Id::new(uuid.to_owned())),
            booster_seat,
        }
    }
}

impl HasId for Passenger {
    type IdType = String;
}

impl ExampleData for Passenger {
    fn example_data() -> Self {
        Self::new(Some("8f30452d-b5c2-4047-b8be-4f9e8570c321"), false)
    }
}

/// Three riders, the second of which needs a booster seat.
pub(crate) fn example_passengers(group: u8) -> Vec<Passenger> {
    (1..=3)
        .map(|n| Passenger::new(Some(format!("passenger{group}-{n}").as_str()), n == 2))
        .collect()
}
