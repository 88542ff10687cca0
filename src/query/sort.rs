//! Insertion sorts
//!
//! Both helpers shift an element left only while its neighbour is strictly
//! out of order, so equal keys never swap and the sort is stable in either
//! direction.

use std::cmp::Ordering;
use std::fmt;

use crate::record::{Country, Field};

/// Requested sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parse a user token; anything not meaning "descending" is ascending
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "d" | "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sort `items` ascending in place
pub fn insertion_sort<T: PartialOrd>(items: &mut [T]) {
    insertion_sort_by(items, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Sort `items` in place so that `compare` never returns `Greater` for a
/// pair of neighbours
pub fn insertion_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Reorder `records` in place by `field`
pub fn sort_in_place(records: &mut [Country], field: Field, direction: SortDirection) {
    match direction {
        SortDirection::Ascending => insertion_sort_by(records, |a, b| field.compare(a, b)),
        SortDirection::Descending => insertion_sort_by(records, |a, b| field.compare(b, a)),
    }
}

/// Sorted copy of `records`
pub fn sort_by(records: &[Country], field: Field, direction: SortDirection) -> Vec<Country> {
    let mut sorted = records.to_vec();
    sort_in_place(&mut sorted, field, direction);
    sorted
}
