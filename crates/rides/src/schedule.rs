use std::{error, fmt};

use chrono_tz::Tz;
use model::Trip;

use crate::{format, group::group_trips, DisplaySettings, TripGroup};

/// A row within a section of the ride list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    SectionOutOfRange { section: usize, sections: usize },
    RowOutOfRange { index: IndexPath, rows: usize },
}

impl error::Error for ScheduleError {}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScheduleError::SectionOutOfRange { section, sections } => {
                write!(f, "section {section} out of range ({sections} sections)")
            }
            ScheduleError::RowOutOfRange { index, rows } => write!(
                f,
                "row {} out of range in section {} ({rows} rows)",
                index.row, index.section
            ),
        }
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Trips of one successful fetch, grouped by day, with the strings the ride
/// list shows per section and per row.
#[derive(Debug, Clone, PartialEq)]
pub struct RideSchedule {
    groups: Vec<TripGroup>,
    zone: Tz,
}

impl RideSchedule {
    pub fn new(trips: Vec<Trip>, settings: &DisplaySettings) -> Self {
        Self {
            groups: group_trips(trips, &settings.zone),
            zone: settings.zone,
        }
    }

    pub fn groups(&self) -> &[TripGroup] {
        &self.groups
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn number_of_sections(&self) -> usize {
        self.groups.len()
    }

    pub fn number_of_rows(&self, section: usize) -> ScheduleResult<usize> {
        self.trip_group(section).map(TripGroup::len)
    }

    pub fn trip_group(&self, section: usize) -> ScheduleResult<&TripGroup> {
        self.groups
            .get(section)
            .ok_or(ScheduleError::SectionOutOfRange {
                section,
                sections: self.groups.len(),
            })
    }

    pub fn trip(&self, index: IndexPath) -> ScheduleResult<&Trip> {
        let group = self.trip_group(index.section)?;
        group.trips.get(index.row).ok_or(ScheduleError::RowOutOfRange {
            index,
            rows: group.len(),
        })
    }

    // section header

    pub fn trip_date(&self, section: usize) -> ScheduleResult<String> {
        let group = self.trip_group(section)?;
        Ok(format::date_label(&group.starts_at, &self.zone))
    }

    pub fn section_time(&self, section: usize) -> ScheduleResult<String> {
        let group = self.trip_group(section)?;
        Ok(format::time_range(&group.span(), &self.zone))
    }

    pub fn total_estimated_earnings(&self, section: usize) -> ScheduleResult<String> {
        let group = self.trip_group(section)?;
        Ok(format::currency(group.total_estimated_earnings))
    }

    // rows

    pub fn trip_time(&self, index: IndexPath) -> ScheduleResult<String> {
        let trip = self.trip(index)?;
        Ok(format::time_range(&trip.span(), &self.zone))
    }

    pub fn trip_riders(&self, index: IndexPath) -> ScheduleResult<String> {
        let trip = self.trip(index)?;
        Ok(format::riders(trip.rider_count(), trip.booster_count()))
    }

    pub fn estimated_earnings(&self, index: IndexPath) -> ScheduleResult<String> {
        Ok(format::currency(self.trip(index)?.estimated_earnings))
    }

    pub fn trip_addresses(&self, index: IndexPath) -> ScheduleResult<Vec<String>> {
        Ok(format::numbered_addresses(&self.trip(index)?.waypoints))
    }
}
