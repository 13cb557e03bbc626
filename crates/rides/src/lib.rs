//! Everything the ride list needs from the trip feed: grouping by day,
//! display strings and the load cycle.

pub mod format;
pub mod group;
pub mod loader;
pub mod schedule;
pub mod settings;

pub use group::{group_trips, TripGroup};
pub use loader::{LoadOutcome, LoadState, RidesLoader};
pub use schedule::{IndexPath, RideSchedule, ScheduleError, ScheduleResult};
pub use settings::DisplaySettings;
