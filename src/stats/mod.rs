/// Report generators over a filtered [`TripTable`](crate::data::model::TripTable).
///
/// Each report is a pure function `&TripTable -> Result<Stats>`; rendering
/// lives in `ui::report`.
///
/// Mode tie-break: when several values share the highest count, the
/// smallest value wins.
pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::BTreeMap;

/// Occurrence count of every distinct value, keyed in ascending order.
pub fn value_counts<T, I>(values: I) -> BTreeMap<T, usize>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Most frequent value and its count, `None` for no values.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    // Ascending iteration + strict `>` keeps the smallest of tied values.
    for (value, count) in value_counts(values) {
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((value, count));
        }
    }
    best
}

/// Counts ordered by descending frequency, ties by ascending value.
pub fn ranked_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut ranked: Vec<(T, usize)> = value_counts(values).into_iter().collect();
    // Stable sort keeps the ascending key order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_prefers_smallest_on_ties() {
        assert_eq!(mode([3, 1, 3, 1, 2]), Some((1, 2)));
        assert_eq!(mode(["b", "a", "b"]), Some(("b", 2)));
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn ranked_counts_orders_by_frequency() {
        let ranked = ranked_counts(["x", "y", "y", "z", "x", "y"]);
        assert_eq!(ranked, vec![("y", 3), ("x", 2), ("z", 1)]);
    }
}
