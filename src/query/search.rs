//! Search and filters

use crate::error::{Result, StoreError};
use crate::record::{Country, NumericField};
use crate::validate::normalize_text;

use super::sort::insertion_sort;

/// Case-insensitive substring search on country names
///
/// An empty (or blank) query is a validation error, distinct from a search
/// that simply matches nothing.
pub fn search_by_name(records: &[Country], query: &str) -> Result<Vec<Country>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(StoreError::Validation("search text cannot be empty".to_string()));
    }

    Ok(records
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Countries whose continent equals the title-cased query
pub fn filter_by_continent(records: &[Country], continent: &str) -> Vec<Country> {
    let wanted = normalize_text(continent);

    records
        .iter()
        .filter(|c| c.continent == wanted)
        .cloned()
        .collect()
}

/// Countries with `min <= field <= max`
pub fn filter_by_range(
    records: &[Country],
    field: NumericField,
    min: u64,
    max: u64,
) -> Result<Vec<Country>> {
    if max < min {
        return Err(StoreError::InvalidRange { min, max });
    }

    Ok(records
        .iter()
        .filter(|c| (min..=max).contains(&field.value(c)))
        .cloned()
        .collect())
}

/// Unique continent names in ascending ordinal order
pub fn distinct_continents(records: &[Country]) -> Vec<String> {
    let mut continents: Vec<String> = Vec::new();
    for country in records {
        if !continents.contains(&country.continent) {
            continents.push(country.continent.clone());
        }
    }

    insertion_sort(&mut continents);
    continents
}
