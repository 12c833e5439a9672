use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use csv::StringRecord;
use log::{debug, info};
use serde::Deserialize;

use super::filter::apply_selection;
use super::model::{parse_day_filter, parse_month_filter, City, Selection, Trip, TripTable};
use crate::error::{Error, Result};

/// Columns every city dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "End Time",
    "Start Station",
    "End Station",
    "User Type",
];

/// Accepted timestamp layouts. `%.f` also matches a missing fraction.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset for `city` from `data_dir` and apply the month and day
/// filters (`"all"` disables a filter).
///
/// Fails with [`Error::UnknownCity`] when `city` is not a known key.
pub fn load(data_dir: &Path, city: &str, month: &str, day: &str) -> Result<TripTable> {
    let selection = Selection {
        city: City::from_key(city)?,
        month: parse_month_filter(month)?,
        day: parse_day_filter(day)?,
    };
    load_selection(data_dir, &selection)
}

/// Typed variant of [`load`].
pub fn load_selection(data_dir: &Path, selection: &Selection) -> Result<TripTable> {
    let table = load_city(&selection.city.path_in(data_dir))?;
    let before = table.len();
    let filtered = apply_selection(table, selection);
    info!("{selection}: kept {} of {before} rows", filtered.len());
    Ok(filtered)
}

/// Read a whole city CSV and derive `month`, `day` and `hour` for every row.
pub fn load_city(path: &Path) -> Result<TripTable> {
    debug!("reading {}", path.display());
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut trips = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let raw = result?;
        trips.push(parse_trip(&headers, raw, row_no)?);
    }

    let columns = headers.iter().map(|h| h.to_string()).collect();
    debug!("{}: {} rows", path.display(), trips.len());
    Ok(TripTable::new(columns, trips))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Typed view of the columns the reports use. Unknown columns are ignored;
/// optional columns default to `None` when the file lacks them.
#[derive(Debug, Deserialize)]
struct TripRecord {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

fn parse_trip(headers: &StringRecord, raw: StringRecord, row_no: usize) -> Result<Trip> {
    let record: TripRecord = raw.deserialize(Some(headers))?;
    let start_time = parse_timestamp(&record.start_time, row_no, "Start Time")?;
    let end_time = parse_timestamp(&record.end_time, row_no, "End Time")?;

    Ok(Trip {
        month: start_time.month(),
        day: start_time.weekday(),
        hour: start_time.hour(),
        start_time,
        end_time,
        start_station: record.start_station,
        end_station: record.end_station,
        user_type: non_empty(record.user_type),
        gender: non_empty(record.gender),
        birth_year: record.birth_year.filter(|y| !y.is_nan()),
        raw,
    })
}

pub fn parse_timestamp(value: &str, row: usize, column: &'static str) -> Result<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| Error::Timestamp {
            row,
            column,
            value: value.to_string(),
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
