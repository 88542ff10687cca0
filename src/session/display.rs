//! Display
//!
//! Text rendering for records and responses.
//!
//! Numbers use a configurable thousands separator (`.` by default) and
//! averages a decimal comma with two decimals: `1234567.5` → `1.234.567,50`.

use crate::config::Config;
use crate::protocol::Response;
use crate::record::{Country, NumericField};
use crate::storage::FieldUpdate;

const RULE_WIDTH: usize = 75;

/// Group the digits of `value` in threes
pub fn format_thousands(value: u64, separator: char) -> String {
    group_digits(&value.to_string(), separator)
}

/// Render `value` with two decimals and grouped integer part
pub fn format_decimal(value: f64, thousands: char, decimal: char) -> String {
    let fixed = format!("{:.2}", value);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{}{}{}", group_digits(integer, thousands), decimal, fraction)
}

/// Insert `separator` every three digits from the right (ASCII digits only)
fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

/// Renders responses with the configured separators
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    thousands: char,
    decimal: char,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Renderer {
    pub fn from_config(config: &Config) -> Self {
        Self {
            thousands: config.thousands_separator,
            decimal: config.decimal_separator,
        }
    }

    pub fn number(&self, value: u64) -> String {
        format_thousands(value, self.thousands)
    }

    pub fn decimal(&self, value: f64) -> String {
        format_decimal(value, self.thousands, self.decimal)
    }

    /// Fixed-width table of countries
    pub fn table(&self, countries: &[Country]) -> String {
        if countries.is_empty() {
            return "The country list to show is empty.\n".to_string();
        }

        let rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!(
            "{:<20}{:<18}{:<20}{}\n",
            "Name", "Population", "Area (km²)", "Continent"
        ));
        out.push_str(&rule);
        out.push('\n');

        for country in countries {
            out.push_str(&format!(
                "{:<20}{:<18}{:<20}{}\n",
                country.name,
                self.number(country.population),
                self.number(country.area),
                country.continent
            ));
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }

    /// Full text for a response
    pub fn render(&self, response: &Response) -> String {
        match response {
            Response::Added(country) => format!("\n Country '{}' added.\n", country.name),
            Response::Updated(report) => {
                let mut out = String::new();
                out.push_str(&self.field_update("Population", &report.population));
                out.push_str(&self.field_update("Area", &report.area));
                out.push_str(&format!("\n Update of {} completed.\n", report.name));
                if !report.saved {
                    out.push_str(" No valid changes to save.\n");
                }
                out
            }
            Response::Countries(countries) => {
                if countries.is_empty() {
                    "\n No countries matched.\n".to_string()
                } else {
                    format!(
                        "\n {} country(ies) found:\n{}",
                        countries.len(),
                        self.table(countries)
                    )
                }
            }
            Response::Sorted {
                field,
                direction,
                countries,
            } => format!(
                "\n Countries sorted by '{}' ({}):\n{}",
                field,
                direction,
                self.table(countries)
            ),
            Response::Continents(continents) => {
                format!("Available continents: {}\n", continents.join(", "))
            }
            Response::Extremes { max, min } => format!(
                " Most populated country:  {} ({} inhabitants)\n Least populated country: {} ({} inhabitants)\n",
                max.name,
                self.number(max.population),
                min.name,
                self.number(min.population)
            ),
            Response::Average { field, value } => match field {
                NumericField::Population => {
                    format!(" Average population: {} inhabitants\n", self.decimal(*value))
                }
                NumericField::Area => format!(" Average area: {} km²\n", self.decimal(*value)),
            },
            Response::Counts(counts) => {
                let mut out = " Continent | Countries\n".to_string();
                for (continent, count) in counts {
                    out.push_str(&format!(" {}  :  {} country(ies)\n", continent, count));
                }
                out
            }
            Response::Saved { count } => format!("\n Data saved ({} countries).\n", count),
            Response::Closed { count } => {
                format!("\n Data saved ({} countries). Goodbye.\n", count)
            }
        }
    }

    fn field_update(&self, label: &str, update: &FieldUpdate) -> String {
        match update {
            FieldUpdate::Unchanged => String::new(),
            FieldUpdate::Applied(value) => format!(" {} updated to {}.\n", label, self.number(*value)),
            FieldUpdate::Rejected(text) => format!(
                " Invalid {} value '{}'. Previous value kept.\n",
                label.to_lowercase(),
                text
            ),
        }
    }
}
