use chrono::Weekday;

use super::mode;
use crate::data::model::{day_name, TripTable, WEEKDAYS};
use crate::error::{Error, Result};

/// The most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number, 1–12.
    pub month: u32,
    pub day: Weekday,
    /// Start hour, 0–23.
    pub hour: u32,
}

pub fn time_stats(table: &TripTable) -> Result<TimeStats> {
    let (month, _) = mode(table.trips.iter().map(|t| t.month)).ok_or(Error::EmptySelection)?;
    // Ties between weekdays go to the alphabetically first name.
    let (name, _) =
        mode(table.trips.iter().map(|t| day_name(t.day))).ok_or(Error::EmptySelection)?;
    let day = WEEKDAYS
        .into_iter()
        .find(|d| day_name(*d) == name)
        .ok_or(Error::EmptySelection)?;
    let (hour, _) = mode(table.trips.iter().map(|t| t.hour)).ok_or(Error::EmptySelection)?;

    Ok(TimeStats {
        month,
        day,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::apply_selection;
    use crate::data::loader::load_city;
    use crate::data::loader::tests::chicago_fixture;
    use crate::data::model::{City, Month, Selection};
    use tempfile::TempDir;

    fn chicago() -> TripTable {
        let dir = TempDir::new().unwrap();
        load_city(&chicago_fixture(dir.path())).unwrap()
    }

    #[test]
    fn reports_most_frequent_month_day_and_hour() {
        let stats = time_stats(&chicago()).unwrap();
        assert_eq!(stats.month, 3);
        assert_eq!(stats.day, Weekday::Fri);
        assert_eq!(stats.hour, 8);
    }

    #[test]
    fn month_filter_pins_the_month_mode() {
        let selection = Selection {
            city: City::Chicago,
            month: Some(Month::January),
            day: None,
        };
        let stats = time_stats(&apply_selection(chicago(), &selection)).unwrap();
        assert_eq!(stats.month, 1);
        // One Monday and one Friday trip in January: "Friday" sorts first.
        assert_eq!(stats.day, Weekday::Fri);
    }

    #[test]
    fn empty_table_is_an_error() {
        let mut table = chicago();
        table.trips.clear();
        assert!(matches!(time_stats(&table), Err(Error::EmptySelection)));
    }
}
