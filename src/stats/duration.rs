use chrono::Duration;

use crate::data::model::{Trip, TripTable};
use crate::error::{Error, Result};

/// Total and average travel time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationStats {
    pub total: Duration,
    pub trips: usize,
}

impl DurationStats {
    pub fn total_seconds(&self) -> f64 {
        seconds_f64(self.total)
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds() / 3600.0
    }

    pub fn mean_seconds(&self) -> f64 {
        self.total_seconds() / self.trips as f64
    }

    /// Mean travel time, rounded to the millisecond.
    pub fn mean(&self) -> Duration {
        Duration::milliseconds((self.mean_seconds() * 1000.0).round() as i64)
    }
}

/// Travel time of a single trip: `End Time - Start Time`.
pub fn travel_time(trip: &Trip) -> Duration {
    trip.end_time - trip.start_time
}

pub fn duration_stats(table: &TripTable) -> Result<DurationStats> {
    if table.is_empty() {
        return Err(Error::EmptySelection);
    }
    let total = table
        .trips
        .iter()
        .map(travel_time)
        .fold(Duration::zero(), |acc, d| acc + d);

    Ok(DurationStats {
        total,
        trips: table.len(),
    })
}

fn seconds_f64(d: Duration) -> f64 {
    let whole = d.num_seconds();
    let nanos = (d - Duration::seconds(whole)).num_nanoseconds().unwrap_or(0);
    whole as f64 + nanos as f64 / 1e9
}

/// Render like `3 days 04:05:06`, with microseconds when present.
pub fn format_duration(d: Duration) -> String {
    let (sign, d) = if d < Duration::zero() {
        ("-", -d)
    } else {
        ("", d)
    };
    let days = d.num_days();
    let secs = d.num_seconds() - days * 86_400;
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);
    let micros = (d - Duration::seconds(d.num_seconds()))
        .num_microseconds()
        .unwrap_or(0);

    if micros > 0 {
        format!("{sign}{days} days {h:02}:{m:02}:{s:02}.{micros:06}")
    } else {
        format!("{sign}{days} days {h:02}:{m:02}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_city;
    use crate::data::loader::tests::chicago_fixture;
    use tempfile::TempDir;

    #[test]
    fn sums_travel_time_over_all_trips() {
        let dir = TempDir::new().unwrap();
        let table = load_city(&chicago_fixture(dir.path())).unwrap();
        let stats = duration_stats(&table).unwrap();

        assert_eq!(stats.total, Duration::seconds(7890));
        assert_eq!(stats.total_seconds(), 7890.0);
        assert!((stats.total_hours() - 7890.0 / 3600.0).abs() < 1e-9);
        assert_eq!(stats.mean(), Duration::seconds(1315));
        assert_eq!(format_duration(stats.total), "0 days 02:11:30");
    }

    #[test]
    fn formats_days_and_fractions() {
        let d = Duration::days(2) + Duration::seconds(3661) + Duration::milliseconds(250);
        assert_eq!(format_duration(d), "2 days 01:01:01.250000");
        assert_eq!(format_duration(-Duration::seconds(90)), "-0 days 00:01:30");
    }

    #[test]
    fn empty_table_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut table = load_city(&chicago_fixture(dir.path())).unwrap();
        table.trips.clear();
        assert!(matches!(duration_stats(&table), Err(Error::EmptySelection)));
    }
}
