//! Aggregate statistics

use crate::record::{Country, NumericField};

/// Countries with the largest and smallest population
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes<'a> {
    pub max: &'a Country,
    pub min: &'a Country,
}

/// Find the most and least populated countries
///
/// Ties go to the first record in iteration order. A single record is both
/// extremes; an empty slice has none.
pub fn extremes_by_population(records: &[Country]) -> Option<Extremes<'_>> {
    let (first, rest) = records.split_first()?;
    let mut extremes = Extremes { max: first, min: first };

    for country in rest {
        if country.population > extremes.max.population {
            extremes.max = country;
        }
        if country.population < extremes.min.population {
            extremes.min = country;
        }
    }

    Some(extremes)
}

/// Arithmetic mean of `field`, or `None` for an empty slice
pub fn average(records: &[Country], field: NumericField) -> Option<f64> {
    if records.is_empty() {
        return None;
    }

    let total: u128 = records.iter().map(|c| u128::from(field.value(c))).sum();
    Some(total as f64 / records.len() as f64)
}

/// Number of countries per continent, in order of first appearance
pub fn count_by_continent(records: &[Country]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for country in records {
        match counts.iter_mut().find(|(continent, _)| *continent == country.continent) {
            Some((_, count)) => *count += 1,
            None => counts.push((country.continent.clone(), 1)),
        }
    }

    counts
}
