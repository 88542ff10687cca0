//! Configuration for countrydb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Main configuration for a countrydb instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// CSV file holding every country record.
    /// Created with only a header row when missing.
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Digit grouping separator used when rendering numbers
    pub thousands_separator: char,

    /// Separator between integer and fractional part of averages
    pub decimal_separator: char,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("countries.csv"),
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration can be used to open a store
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(StoreError::Config("data file path is empty".to_string()));
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(StoreError::Config(format!(
                "thousands and decimal separators are both '{}'",
                self.decimal_separator
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the CSV data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the thousands separator for rendered numbers
    pub fn thousands_separator(mut self, separator: char) -> Self {
        self.config.thousands_separator = separator;
        self
    }

    /// Set the decimal separator for rendered averages
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.config.decimal_separator = separator;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
