//! Query Module
//!
//! Stateless operations over a sequence of country records.
//!
//! ## Responsibilities
//! - Name search and continent / numeric-range filters
//! - Stable insertion sorts (ascending or descending, any field)
//! - Aggregates: population extremes, averages, counts per continent
//!
//! Every function borrows the records and returns matches in input order
//! unless it sorts. Record sets are small (one row per country), so the
//! O(n²) insertion sort is kept for its stability and simplicity.

mod search;
mod sort;
mod stats;

pub use search::{distinct_continents, filter_by_continent, filter_by_range, search_by_name};
pub use sort::{insertion_sort, insertion_sort_by, sort_by, sort_in_place, SortDirection};
pub use stats::{average, count_by_continent, extremes_by_population, Extremes};
