//! Tests for Display
//!
//! These tests verify:
//! - Thousands grouping and decimal comma formatting
//! - Country table layout
//! - Response rendering for the user-facing messages

use countrydb::config::Config;
use countrydb::protocol::Response;
use countrydb::query::SortDirection;
use countrydb::session::{format_decimal, format_thousands, Renderer};
use countrydb::storage::{FieldUpdate, UpdateReport};
use countrydb::{Country, Field, NumericField};

// =============================================================================
// Helper Functions
// =============================================================================

fn chile() -> Country {
    Country::new("Chile", 19_000_000, 756_102, "America").unwrap()
}

// =============================================================================
// Number Formatting Tests
// =============================================================================

#[test]
fn test_format_thousands() {
    assert_eq!(format_thousands(0, '.'), "0");
    assert_eq!(format_thousands(999, '.'), "999");
    assert_eq!(format_thousands(1_000, '.'), "1.000");
    assert_eq!(format_thousands(1_234_567, '.'), "1.234.567");
    assert_eq!(format_thousands(12_345, ','), "12,345");
}

#[test]
fn test_format_decimal() {
    assert_eq!(format_decimal(15.0, '.', ','), "15,00");
    assert_eq!(format_decimal(1_234_567.5, '.', ','), "1.234.567,50");
    assert_eq!(format_decimal(0.25, '.', ','), "0,25");
    assert_eq!(format_decimal(1_000.0, ',', '.'), "1,000.00");
}

#[test]
fn test_format_decimal_groups_beyond_u64() {
    assert_eq!(
        format_decimal(u64::MAX as f64, '.', ','),
        "18.446.744.073.709.551.616,00"
    );
}

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn test_table_layout() {
    let renderer = Renderer::default();

    let table = renderer.table(&[chile()]);

    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "-".repeat(75));
    assert_eq!(
        lines[1],
        format!("{:<20}{:<18}{:<20}{}", "Name", "Population", "Area (km²)", "Continent")
    );
    assert_eq!(
        lines[3],
        format!("{:<20}{:<18}{:<20}{}", "Chile", "19.000.000", "756.102", "America")
    );
}

#[test]
fn test_table_empty() {
    let renderer = Renderer::default();

    assert_eq!(renderer.table(&[]), "The country list to show is empty.\n");
}

#[test]
fn test_renderer_uses_config_separators() {
    let config = Config::builder()
        .thousands_separator(',')
        .decimal_separator('.')
        .build();
    let renderer = Renderer::from_config(&config);

    assert_eq!(renderer.number(1_500_000), "1,500,000");
    assert_eq!(renderer.decimal(2_500.5), "2,500.50");
}

// =============================================================================
// Response Rendering Tests
// =============================================================================

#[test]
fn test_render_added() {
    let text = Renderer::default().render(&Response::Added(chile()));

    assert!(text.contains("Country 'Chile' added."));
}

#[test]
fn test_render_update_with_rejected_field() {
    let report = UpdateReport {
        name: "Chile".into(),
        population: FieldUpdate::Rejected("abc".into()),
        area: FieldUpdate::Unchanged,
        saved: false,
    };

    let text = Renderer::default().render(&Response::Updated(report));

    assert!(text.contains("Invalid population value 'abc'. Previous value kept."));
    assert!(!text.contains("Area"));
    assert!(text.contains("No valid changes to save."));
}

#[test]
fn test_render_update_applied() {
    let report = UpdateReport {
        name: "Chile".into(),
        population: FieldUpdate::Unchanged,
        area: FieldUpdate::Applied(800_000),
        saved: true,
    };

    let text = Renderer::default().render(&Response::Updated(report));

    assert!(text.contains("Area updated to 800.000."));
    assert!(!text.contains("No valid changes"));
}

#[test]
fn test_render_countries() {
    let renderer = Renderer::default();

    assert!(renderer.render(&Response::Countries(vec![])).contains("No countries matched."));
    let text = renderer.render(&Response::Countries(vec![chile()]));
    assert!(text.contains("1 country(ies) found:"));
    assert!(text.contains("19.000.000"));
}

#[test]
fn test_render_sorted() {
    let text = Renderer::default().render(&Response::Sorted {
        field: Field::Population,
        direction: SortDirection::Descending,
        countries: vec![chile()],
    });

    assert!(text.contains("Countries sorted by 'population' (descending):"));
}

#[test]
fn test_render_statistics() {
    let renderer = Renderer::default();

    let extremes = renderer.render(&Response::Extremes {
        max: chile(),
        min: Country::new("Andorra", 80_000, 468, "Europe").unwrap(),
    });
    assert!(extremes.contains("Most populated country:  Chile (19.000.000 inhabitants)"));
    assert!(extremes.contains("Least populated country: Andorra (80.000 inhabitants)"));

    let average = renderer.render(&Response::Average {
        field: NumericField::Population,
        value: 1_234_567.5,
    });
    assert!(average.contains("Average population: 1.234.567,50 inhabitants"));

    let area = renderer.render(&Response::Average {
        field: NumericField::Area,
        value: 15.0,
    });
    assert!(area.contains("Average area: 15,00 km²"));

    let counts = renderer.render(&Response::Counts(vec![("Europe".into(), 3)]));
    assert!(counts.contains(" Europe  :  3 country(ies)"));
}

#[test]
fn test_render_continents() {
    let text = Renderer::default().render(&Response::Continents(vec!["Africa".into(), "Europe".into()]));

    assert_eq!(text, "Available continents: Africa, Europe\n");
}
