use std::io::Write;

use crate::data::model::{day_name, Trip};
use crate::error::Result;

/// Derived columns appended after the file's own columns.
pub const DERIVED_COLUMNS: [&str; 3] = ["month", "day", "hour"];

/// Print raw rows under the file's header plus the derived `month`, `day`
/// and `hour` columns, padded to the widest cell. An empty page prints the
/// header and a note.
pub fn write_page<W: Write>(out: &mut W, columns: &[String], rows: &[Trip]) -> Result<()> {
    let header: Vec<&str> = columns
        .iter()
        .map(String::as_str)
        .chain(DERIVED_COLUMNS)
        .collect();
    let cells: Vec<Vec<String>> = rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    write_line(out, header.into_iter(), &widths)?;
    if cells.is_empty() {
        writeln!(out, "(no more rows)")?;
        return Ok(());
    }
    for row in &cells {
        write_line(out, row.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn row_cells(trip: &Trip) -> Vec<String> {
    let mut cells: Vec<String> = trip.raw.iter().map(str::to_string).collect();
    cells.push(trip.month.to_string());
    cells.push(day_name(trip.day).to_string());
    cells.push(trip.hour.to_string());
    cells
}

fn write_line<'a, W, I>(out: &mut W, cells: I, widths: &[usize]) -> Result<()>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_city;
    use crate::data::loader::tests::washington_fixture;
    use tempfile::TempDir;

    #[test]
    fn aligns_cells_under_the_header() {
        let dir = TempDir::new().unwrap();
        let table = load_city(&washington_fixture(dir.path())).unwrap();
        let mut out = Vec::new();
        write_page(&mut out, &table.columns, table.page(0, 5)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Start Time"));
        assert!(lines[1].starts_with("0  2017-06-21 08:36:34"));
        let col = lines[0].find("Start Station").unwrap();
        assert_eq!(&lines[1][col..col + 14], "14th & Belmont");
    }

    #[test]
    fn derived_columns_follow_the_file_columns() {
        let dir = TempDir::new().unwrap();
        let table = load_city(&washington_fixture(dir.path())).unwrap();
        let mut out = Vec::new();
        write_page(&mut out, &table.columns, table.page(0, 5)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].ends_with("month  day        hour"));
        assert!(lines[1].ends_with("6      Wednesday  8"));
        assert!(lines[2].ends_with("3      Saturday   10"));
    }

    #[test]
    fn empty_page_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let table = load_city(&washington_fixture(dir.path())).unwrap();
        let mut out = Vec::new();
        write_page(&mut out, &table.columns, table.page(10, 5)).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("(no more rows)\n"));
    }
}
