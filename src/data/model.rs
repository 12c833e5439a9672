use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Weekday};
use csv::StringRecord;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// City – which dataset to load
// ---------------------------------------------------------------------------

/// City key → dataset file name. Fixed for the lifetime of the process.
pub const CITY_DATA: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Look up a city by its (case-insensitive) key.
    pub fn from_key(key: &str) -> Result<City> {
        let key = key.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or(Error::UnknownCity(key))
    }

    pub fn key(self) -> &'static str {
        CITY_DATA[self as usize].0
    }

    pub fn file_name(self) -> &'static str {
        CITY_DATA[self as usize].1
    }

    /// Dataset path inside `data_dir`.
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Month / day filters
// ---------------------------------------------------------------------------

/// The months covered by the datasets, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number.
    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }

    pub fn from_name(name: &str) -> Result<Month> {
        let name = name.trim().to_lowercase();
        Month::ALL
            .into_iter()
            .find(|m| m.name() == name)
            .ok_or(Error::UnknownMonth(name))
    }
}

/// Parse a month filter; `all` means no filter.
pub fn parse_month_filter(input: &str) -> Result<Option<Month>> {
    if input.trim().eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Month::from_name(input).map(Some)
}

/// Parse a weekday filter; `all` means no filter.
pub fn parse_day_filter(input: &str) -> Result<Option<Weekday>> {
    let name = input.trim().to_lowercase();
    if name == "all" {
        return Ok(None);
    }
    WEEKDAYS
        .into_iter()
        .find(|d| day_name(*d).eq_ignore_ascii_case(&name))
        .map(Some)
        .ok_or(Error::UnknownDay(name))
}

/// Monday-first, matching the order the prompt lists them in.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Title-cased weekday name, e.g. `Monday`.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One iteration's choice of city and optional month/day filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.map_or("all", Month::name);
        let day = self.day.map_or("all", day_name);
        write!(f, "city={}, month={month}, day={day}", self.city)
    }
}

// ---------------------------------------------------------------------------
// Trip – one row of a city dataset
// ---------------------------------------------------------------------------

/// A single trip with its calendar fields derived from `start_time`.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    /// Missing cells are `None`.
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// Derived: calendar month, 1–12.
    pub month: u32,
    /// Derived: day of week.
    pub day: Weekday,
    /// Derived: hour of day, 0–23.
    pub hour: u32,
    /// The untouched CSV cells, for raw display.
    pub raw: StringRecord,
}

// ---------------------------------------------------------------------------
// TripTable – a loaded (and possibly filtered) dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TripTable {
    /// Header row exactly as found in the file.
    pub columns: Vec<String>,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn new(columns: Vec<String>, trips: Vec<Trip>) -> Self {
        TripTable { columns, trips }
    }

    /// Whether the dataset provides the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Rows `[offset, offset + count)`, clamped to the table; past the end
    /// this is an empty slice.
    pub fn page(&self, offset: usize, count: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(count).min(self.trips.len());
        &self.trips[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_lookup_is_case_insensitive() {
        assert_eq!(City::from_key("New York City").unwrap(), City::NewYorkCity);
        assert_eq!(City::Washington.file_name(), "washington.csv");
        assert!(matches!(City::from_key("boston"), Err(Error::UnknownCity(k)) if k == "boston"));
    }

    #[test]
    fn month_numbers_follow_calendar_order() {
        let numbers: Vec<u32> = Month::ALL.iter().map(|m| m.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(parse_month_filter("March").unwrap(), Some(Month::March));
        assert_eq!(parse_month_filter("ALL").unwrap(), None);
        assert!(parse_month_filter("july").is_err());
    }

    #[test]
    fn day_filter_parses_full_names() {
        assert_eq!(parse_day_filter("friday").unwrap(), Some(Weekday::Fri));
        assert_eq!(parse_day_filter("all").unwrap(), None);
        assert!(parse_day_filter("fri").is_err());
        assert_eq!(day_name(Weekday::Fri), "Friday");
    }
}
