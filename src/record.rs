//! Country record
//!
//! Typed replacement for the per-country field mappings found in the file.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::validate::normalize_text;

/// Column names of the data file, in the order they are written
pub const HEADER: [&str; 4] = ["name", "population", "area", "continent"];

/// A single country record
///
/// Field order matches `HEADER`; rows are written through serde so the
/// struct layout is the file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Title-cased, unique (case-insensitively) within a store
    pub name: String,

    /// Inhabitants, always > 0
    pub population: u64,

    /// Surface in km², always > 0
    pub area: u64,

    /// Title-cased continent name
    pub continent: String,
}

impl Country {
    /// Build a validated record, normalizing name and continent
    pub fn new(
        name: impl AsRef<str>,
        population: u64,
        area: u64,
        continent: impl AsRef<str>,
    ) -> Result<Self> {
        let name = normalize_text(name.as_ref());
        let continent = normalize_text(continent.as_ref());

        if name.is_empty() {
            return Err(StoreError::Validation("country name cannot be empty".to_string()));
        }
        if continent.is_empty() {
            return Err(StoreError::Validation("continent cannot be empty".to_string()));
        }
        if population == 0 {
            return Err(StoreError::Validation("population must be a positive integer".to_string()));
        }
        if area == 0 {
            return Err(StoreError::Validation("area must be a positive integer".to_string()));
        }

        Ok(Self {
            name,
            population,
            area,
            continent,
        })
    }

    /// Case-insensitive name comparison used for lookups and uniqueness
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

// =============================================================================
// Field selectors
// =============================================================================

/// Any record field, used as a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Population,
    Area,
    Continent,
}

impl Field {
    /// Compare two records by this field
    ///
    /// Numeric fields compare by value, text fields by ordinal string order.
    pub fn compare(&self, a: &Country, b: &Country) -> Ordering {
        match self {
            Field::Name => a.name.cmp(&b.name),
            Field::Population => a.population.cmp(&b.population),
            Field::Area => a.area.cmp(&b.area),
            Field::Continent => a.continent.cmp(&b.continent),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Population => "population",
            Field::Area => "area",
            Field::Continent => "continent",
        }
    }
}

impl FromStr for Field {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "population" => Ok(Field::Population),
            "area" => Ok(Field::Area),
            "continent" => Ok(Field::Continent),
            other => Err(StoreError::Validation(format!("unknown field '{}'", other))),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric record field, used by range filters and averages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Population,
    Area,
}

impl NumericField {
    /// Read this field from a record
    pub fn value(&self, country: &Country) -> u64 {
        match self {
            NumericField::Population => country.population,
            NumericField::Area => country.area,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumericField::Population => "population",
            NumericField::Area => "area",
        }
    }
}

impl From<NumericField> for Field {
    fn from(field: NumericField) -> Self {
        match field {
            NumericField::Population => Field::Population,
            NumericField::Area => Field::Area,
        }
    }
}

impl FromStr for NumericField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "population" => Ok(NumericField::Population),
            "area" => Ok(NumericField::Area),
            other => Err(StoreError::Validation(format!("'{}' is not a numeric field", other))),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
