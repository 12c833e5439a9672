use super::{mode, ranked_counts};
use crate::data::model::TripTable;
use crate::error::Result;

pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Result for an optional column: some city datasets do not carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnReport<T> {
    /// The dataset has no such column.
    Absent,
    Present(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Counts per user type, most frequent first.
    pub user_types: Vec<(String, usize)>,
    pub genders: ColumnReport<Vec<(String, usize)>>,
    /// `Present(None)` when the column exists but every value is missing.
    pub birth_years: ColumnReport<Option<BirthYears>>,
}

pub fn user_stats(table: &TripTable) -> Result<UserStats> {
    let user_types = owned(ranked_counts(
        table.trips.iter().filter_map(|t| t.user_type.as_deref()),
    ));

    let genders = if table.has_column(GENDER_COLUMN) {
        ColumnReport::Present(owned(ranked_counts(
            table.trips.iter().filter_map(|t| t.gender.as_deref()),
        )))
    } else {
        ColumnReport::Absent
    };

    let birth_years = if table.has_column(BIRTH_YEAR_COLUMN) {
        let years: Vec<i64> = table
            .trips
            .iter()
            .filter_map(|t| t.birth_year)
            .map(|y| y.trunc() as i64)
            .collect();
        ColumnReport::Present(summarise_years(&years))
    } else {
        ColumnReport::Absent
    };

    Ok(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

fn summarise_years(years: &[i64]) -> Option<BirthYears> {
    let (most_common, _) = mode(years.iter().copied())?;
    Some(BirthYears {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common,
    })
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}
