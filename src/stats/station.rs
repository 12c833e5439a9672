use super::mode;
use crate::data::model::TripTable;
use crate::error::{Error, Result};

/// A value together with how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counted<T> {
    pub value: T,
    pub count: usize,
}

/// The most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Counted<String>,
    pub end_station: Counted<String>,
    /// Most frequent `(start, end)` combination.
    pub trip: Counted<(String, String)>,
}

pub fn station_stats(table: &TripTable) -> Result<StationStats> {
    let (start, start_count) = mode(table.trips.iter().map(|t| t.start_station.as_str()))
        .ok_or(Error::EmptySelection)?;
    let (end, end_count) = mode(table.trips.iter().map(|t| t.end_station.as_str()))
        .ok_or(Error::EmptySelection)?;
    let ((from, to), trip_count) = mode(
        table
            .trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )
    .ok_or(Error::EmptySelection)?;

    Ok(StationStats {
        start_station: Counted {
            value: start.to_string(),
            count: start_count,
        },
        end_station: Counted {
            value: end.to_string(),
            count: end_count,
        },
        trip: Counted {
            value: (from.to_string(), to.to_string()),
            count: trip_count,
        },
    })
}
