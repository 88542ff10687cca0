//! Command definitions
//!
//! Represents the operations a front end can request.

use crate::query::SortDirection;
use crate::record::{Country, Field, NumericField};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a validated country and save
    Add { country: Country },

    /// Overwrite population and/or area (raw text, validated by the store)
    Update {
        name: String,
        population: Option<String>,
        area: Option<String>,
    },

    /// Case-insensitive substring search on names
    Search { query: String },

    /// Countries of one continent
    FilterContinent { continent: String },

    /// Countries with a numeric field inside `[min, max]`
    FilterRange { field: NumericField, min: u64, max: u64 },

    /// Distinct continents, sorted
    Continents,

    /// Reorder the store by a field
    Sort { field: Field, direction: SortDirection },

    /// Most and least populated countries
    Extremes,

    /// Mean of a numeric field
    Average { field: NumericField },

    /// Number of countries per continent
    CountByContinent,

    /// Every country in store order
    List,

    /// Rewrite the data file
    Save,

    /// Save and end the session
    Quit,
}

impl Command {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Update { .. } => "update",
            Command::Search { .. } => "search",
            Command::FilterContinent { .. } => "filter-continent",
            Command::FilterRange { .. } => "filter-range",
            Command::Continents => "continents",
            Command::Sort { .. } => "sort",
            Command::Extremes => "extremes",
            Command::Average { .. } => "average",
            Command::CountByContinent => "count-by-continent",
            Command::List => "list",
            Command::Save => "save",
            Command::Quit => "quit",
        }
    }

    /// Whether the command only makes sense with at least one record
    pub fn needs_records(&self) -> bool {
        !matches!(
            self,
            Command::Add { .. } | Command::List | Command::Save | Command::Quit
        )
    }
}
