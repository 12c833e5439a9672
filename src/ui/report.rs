use std::io::Write;
use std::time::Instant;

use log::debug;

use crate::data::model::{day_name, TripTable};
use crate::error::Result;
use crate::stats::duration::{duration_stats, format_duration, DurationStats};
use crate::stats::station::{station_stats, StationStats};
use crate::stats::time::{time_stats, TimeStats};
use crate::stats::user::{user_stats, BirthYears, ColumnReport, UserStats};

pub const SEPARATOR: &str = "----------------------------------------";

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Print all four reports for a non-empty table.
pub fn write_reports<W: Write>(out: &mut W, table: &TripTable) -> Result<()> {
    section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        || time_stats(table),
        write_time_stats,
    )?;
    section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        || station_stats(table),
        write_station_stats,
    )?;
    section(
        out,
        "Calculating Trip Duration...",
        || duration_stats(table),
        write_duration_stats,
    )?;
    section(
        out,
        "Calculating User Stats...",
        || user_stats(table),
        write_user_stats,
    )
}

/// Header, timed computation, body, timing line and separator.
fn section<W, T, C, R>(out: &mut W, title: &str, compute: C, render: R) -> Result<()>
where
    W: Write,
    C: FnOnce() -> Result<T>,
    R: FnOnce(&mut W, &T) -> Result<()>,
{
    writeln!(out, "\n{title}\n")?;
    let started = Instant::now();
    let stats = compute()?;
    render(out, &stats)?;
    let elapsed = started.elapsed().as_secs_f64();
    debug!("{title} took {elapsed:.6}s");
    writeln!(out, "\nThis took {elapsed:.6} seconds.")?;
    writeln!(out, "{SEPARATOR}")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

pub fn write_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> Result<()> {
    writeln!(out, "Most common month: {}", stats.month)?;
    writeln!(out, "Most common day of week: {}", day_name(stats.day))?;
    writeln!(out, "Most common start hour: {}", stats.hour)?;
    Ok(())
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> Result<()> {
    writeln!(
        out,
        "Most commonly used start station: {} ({} trips)",
        stats.start_station.value, stats.start_station.count
    )?;
    writeln!(
        out,
        "Most commonly used end station: {} ({} trips)",
        stats.end_station.value, stats.end_station.count
    )?;
    let (from, to) = &stats.trip.value;
    writeln!(
        out,
        "Most frequent trip: {from} -> {to} ({} trips)",
        stats.trip.count
    )?;
    Ok(())
}

pub fn write_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> Result<()> {
    writeln!(out, "Total travel time: {}", format_duration(stats.total))?;
    writeln!(out, "Total travel time (seconds): {:.1}", stats.total_seconds())?;
    writeln!(out, "Total travel time (hours): {:.4}", stats.total_hours())?;
    writeln!(out, "Mean travel time: {}", format_duration(stats.mean()))?;
    Ok(())
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> Result<()> {
    writeln!(out, "User types:")?;
    write_counts(out, &stats.user_types)?;

    match &stats.genders {
        ColumnReport::Present(counts) => {
            writeln!(out, "\nGender counts:")?;
            write_counts(out, counts)?;
        }
        ColumnReport::Absent => writeln!(out, "\nNo Gender data available for this city.")?,
    }

    match &stats.birth_years {
        ColumnReport::Present(Some(BirthYears {
            earliest,
            most_recent,
            most_common,
        })) => {
            writeln!(out, "\nEarliest year: {earliest}")?;
            writeln!(out, "Most recent year: {most_recent}")?;
            writeln!(out, "Most common year: {most_common}")?;
        }
        ColumnReport::Present(None) => {
            writeln!(out, "\nNo Birth Year values in this selection.")?
        }
        ColumnReport::Absent => writeln!(out, "\nNo Birth Year data available for this city.")?,
    }
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> Result<()> {
    let width = counts.iter().map(|(v, _)| v.len()).max().unwrap_or(0);
    for (value, count) in counts {
        writeln!(out, "  {value:<width$}  {count}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_city;
    use crate::data::loader::tests::{chicago_fixture, washington_fixture};
    use crate::error::Error;
    use tempfile::TempDir;

    fn render(table: &TripTable) -> Result<String> {
        let mut out = Vec::new();
        write_reports(&mut out, table)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn chicago_report_has_every_section() {
        let dir = TempDir::new().unwrap();
        let text = render(&load_city(&chicago_fixture(dir.path())).unwrap()).unwrap();

        assert!(text.contains("Most common month: 3"));
        assert!(text.contains("Most common day of week: Friday"));
        assert!(text.contains("Most frequent trip: Clark St -> State St (2 trips)"));
        assert!(text.contains("Total travel time: 0 days 02:11:30"));
        assert!(text.contains("Total travel time (seconds): 7890.0\n"));
        assert!(text.contains("  Subscriber  4"));
        assert!(text.contains("Most common year: 1985"));
        assert_eq!(text.matches(SEPARATOR).count(), 4);
    }

    #[test]
    fn washington_report_explains_missing_columns() {
        let dir = TempDir::new().unwrap();
        let text = render(&load_city(&washington_fixture(dir.path())).unwrap()).unwrap();

        assert!(text.contains("No Gender data available for this city."));
        assert!(text.contains("No Birth Year data available for this city."));
        assert!(text.contains("Customer"));
    }

    #[test]
    fn empty_table_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let mut table = load_city(&chicago_fixture(dir.path())).unwrap();
        table.trips.clear();
        assert!(matches!(render(&table), Err(Error::EmptySelection)));
    }
}
