use chrono::Weekday;

use super::model::{Month, Selection, Trip, TripTable};

// ---------------------------------------------------------------------------
// Row filters: month first, then day of week
// ---------------------------------------------------------------------------

/// Whether a trip started in `month` (`None` = any month).
pub fn matches_month(trip: &Trip, month: Option<Month>) -> bool {
    month.map_or(true, |m| trip.month == m.number())
}

/// Whether a trip started on `day` (`None` = any day).
pub fn matches_day(trip: &Trip, day: Option<Weekday>) -> bool {
    day.map_or(true, |d| trip.day == d)
}

/// Keep only the rows passing the selection's month and day filters.
/// Row order is preserved and rows are never modified.
pub fn apply_selection(mut table: TripTable, selection: &Selection) -> TripTable {
    table.trips.retain(|t| matches_month(t, selection.month));
    table.trips.retain(|t| matches_day(t, selection.day));
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_city;
    use crate::data::loader::tests::chicago_fixture;
    use crate::data::model::{day_name, City};
    use tempfile::TempDir;

    fn chicago() -> TripTable {
        let dir = TempDir::new().unwrap();
        load_city(&chicago_fixture(dir.path())).unwrap()
    }

    fn select(month: Option<Month>, day: Option<Weekday>) -> Selection {
        Selection {
            city: City::Chicago,
            month,
            day,
        }
    }

    #[test]
    fn month_filter_keeps_only_that_month() {
        let table = apply_selection(chicago(), &select(Some(Month::March), None));
        assert_eq!(table.len(), 3);
        assert!(table.trips.iter().all(|t| t.month == 3));
    }

    #[test]
    fn day_filter_matches_title_cased_name() {
        let table = apply_selection(chicago(), &select(None, Some(Weekday::Mon)));
        assert_eq!(table.len(), 2);
        assert!(table.trips.iter().all(|t| day_name(t.day) == "Monday"));
    }

    #[test]
    fn no_filters_keep_every_month() {
        let raw = chicago();
        let n = raw.len();
        let table = apply_selection(raw, &select(None, None));
        assert_eq!(table.len(), n);
        let mut months: Vec<u32> = table.trips.iter().map(|t| t.month).collect();
        months.dedup();
        assert_eq!(months, vec![1, 3, 6]);
    }

    #[test]
    fn combined_filters_can_empty_the_table() {
        let table = apply_selection(chicago(), &select(Some(Month::June), Some(Weekday::Mon)));
        assert!(table.is_empty());
        assert!(table.has_column("Gender"));
    }
}
