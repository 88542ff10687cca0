//! Tests for aggregate statistics
//!
//! These tests verify:
//! - Population extremes with first-occurrence tie breaking
//! - Averages, including the empty case
//! - Counts per continent in order of first appearance

use countrydb::query::{average, count_by_continent, extremes_by_population};
use countrydb::{Country, NumericField};

// =============================================================================
// Helper Functions
// =============================================================================

fn country(name: &str, population: u64, area: u64, continent: &str) -> Country {
    Country::new(name, population, area, continent).unwrap()
}

// =============================================================================
// Extremes Tests
// =============================================================================

#[test]
fn test_extremes_ties_go_to_first_occurrence() {
    let countries = vec![
        country("First", 5, 1, "X"),
        country("Second", 5, 1, "X"),
        country("Small", 3, 1, "X"),
    ];

    let extremes = extremes_by_population(&countries).unwrap();

    assert_eq!(extremes.max.name, "First");
    assert_eq!(extremes.min.name, "Small");
}

#[test]
fn test_extremes_min_tie_goes_to_first_occurrence() {
    let countries = vec![
        country("Big", 9, 1, "X"),
        country("Tiny", 1, 1, "X"),
        country("AlsoTiny", 1, 1, "X"),
    ];

    let extremes = extremes_by_population(&countries).unwrap();

    assert_eq!(extremes.max.name, "Big");
    assert_eq!(extremes.min.name, "Tiny");
}

#[test]
fn test_extremes_single_record_is_both() {
    let countries = vec![country("Alone", 42, 1, "X")];

    let extremes = extremes_by_population(&countries).unwrap();

    assert_eq!(extremes.max, &countries[0]);
    assert_eq!(extremes.min, &countries[0]);
}

#[test]
fn test_extremes_empty_is_none() {
    assert!(extremes_by_population(&[]).is_none());
}

// =============================================================================
// Average Tests
// =============================================================================

#[test]
fn test_average_population() {
    let countries = vec![country("A", 10, 1, "X"), country("B", 20, 1, "X")];

    assert_eq!(average(&countries, NumericField::Population), Some(15.0));
}

#[test]
fn test_average_area_fractional() {
    let countries = vec![
        country("A", 1, 1, "X"),
        country("B", 1, 2, "X"),
        country("C", 1, 2, "X"),
    ];

    let value = average(&countries, NumericField::Area).unwrap();

    assert!((value - 5.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_average_empty_is_none() {
    assert_eq!(average(&[], NumericField::Population), None);
    assert_eq!(average(&[], NumericField::Area), None);
}

#[test]
fn test_average_large_values_do_not_overflow() {
    let countries = vec![
        country("A", u64::MAX, 1, "X"),
        country("B", u64::MAX, 1, "X"),
    ];

    let value = average(&countries, NumericField::Population).unwrap();

    assert_eq!(value, u64::MAX as f64);
}

// =============================================================================
// Count By Continent Tests
// =============================================================================

#[test]
fn test_count_by_continent_first_appearance_order() {
    let countries = vec![
        country("Spain", 1, 1, "Europe"),
        country("Chile", 1, 1, "America"),
        country("France", 1, 1, "Europe"),
        country("Mali", 1, 1, "Africa"),
        country("Peru", 1, 1, "America"),
        country("Italy", 1, 1, "Europe"),
    ];

    assert_eq!(
        count_by_continent(&countries),
        vec![
            ("Europe".to_string(), 3),
            ("America".to_string(), 2),
            ("Africa".to_string(), 1),
        ]
    );
}

#[test]
fn test_count_by_continent_empty() {
    assert!(count_by_continent(&[]).is_empty());
}
