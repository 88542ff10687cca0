//! Response definitions
//!
//! Represents the result of an executed command.

use crate::query::SortDirection;
use crate::record::{Country, Field, NumericField};
use crate::storage::UpdateReport;

/// A reply to render for the user
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Country stored and file saved
    Added(Country),

    /// Per-field outcome of an update
    Updated(UpdateReport),

    /// Matching countries (list, search, filters), in store order
    Countries(Vec<Country>),

    /// Store reordered
    Sorted {
        field: Field,
        direction: SortDirection,
        countries: Vec<Country>,
    },

    /// Distinct continents, ascending
    Continents(Vec<String>),

    /// Most and least populated countries
    Extremes { max: Country, min: Country },

    /// Mean of a numeric field
    Average { field: NumericField, value: f64 },

    /// Countries per continent, in order of first appearance
    Counts(Vec<(String, usize)>),

    /// File rewritten with `count` records
    Saved { count: usize },

    /// Final save done, session over
    Closed { count: usize },
}

impl Response {
    /// Countries carried by the response, if any
    pub fn countries(&self) -> Option<&[Country]> {
        match self {
            Response::Countries(countries) | Response::Sorted { countries, .. } => Some(countries),
            _ => None,
        }
    }
}
