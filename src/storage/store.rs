//! Country Store
//!
//! Owns the in-memory records and their backing CSV file.
//!
//! ## Responsibilities
//! - Create the data file (header only) when it does not exist
//! - Load rows, skipping and counting the malformed ones
//! - Enforce case-insensitive name uniqueness on add
//! - Rewrite the file on every save point (add, update with change, quit)

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::query::{sort_in_place, SortDirection};
use crate::record::{Country, Field, HEADER};
use crate::validate::{normalize_text, parse_file_integer};

use super::csv_file::{read_rows, write_records, Row};

/// Outcome of loading the data file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Rows turned into records
    pub accepted: usize,

    /// Rows skipped for missing fields or invalid values
    pub ignored: usize,

    /// Whether the file was missing and has been created with a header
    pub created: bool,
}

/// What happened to one field during an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// No value supplied, field kept
    Unchanged,

    /// Value accepted and stored
    Applied(u64),

    /// Value supplied but invalid; previous value kept
    Rejected(String),
}

impl FieldUpdate {
    pub fn is_applied(&self) -> bool {
        matches!(self, FieldUpdate::Applied(_))
    }
}

/// Result of `CountryStore::update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Stored name of the updated country
    pub name: String,
    pub population: FieldUpdate,
    pub area: FieldUpdate,

    /// Whether the file was rewritten
    pub saved: bool,
}

impl UpdateReport {
    /// Whether at least one field took a new value
    pub fn changed(&self) -> bool {
        self.population.is_applied() || self.area.is_applied()
    }
}

/// In-memory country records bound to a CSV file
///
/// Iteration order is insertion order until `sort` replaces it.
#[derive(Debug)]
pub struct CountryStore {
    /// Backing data file
    path: PathBuf,

    /// Records in store order
    records: Vec<Country>,
}

impl CountryStore {
    /// Open the data file at `path`, creating it if needed
    ///
    /// On open:
    /// 1. Missing file → write the header and start empty
    /// 2. Otherwise read every row as a field mapping
    /// 3. Keep valid rows in file order, count the rest as ignored
    pub fn open(path: impl AsRef<Path>) -> Result<(Self, LoadReport)> {
        let path = path.as_ref().to_path_buf();
        let mut report = LoadReport::default();

        if !path.exists() {
            info!(path = %path.display(), "data file not found, creating it with a header");
            write_records::<Country>(&path, &HEADER, &[])?;
            report.created = true;
            return Ok((Self { path, records: Vec::new() }, report));
        }

        let mut records: Vec<Country> = Vec::new();
        for (index, row) in read_rows(&path)?.iter().enumerate() {
            match Self::parse_row(row) {
                Some(country) => {
                    if records.iter().any(|c| c.has_name(&country.name)) {
                        warn!(row = index + 1, name = %country.name, "duplicate country name in data file");
                    }
                    records.push(country);
                }
                None => {
                    debug!(row = index + 1, "ignoring malformed row");
                    report.ignored += 1;
                }
            }
        }
        report.accepted = records.len();

        info!(
            path = %path.display(),
            accepted = report.accepted,
            ignored = report.ignored,
            "data file loaded"
        );
        if report.ignored > 0 {
            warn!(ignored = report.ignored, "rows ignored (missing fields or invalid values)");
        }

        Ok((Self { path, records }, report))
    }

    /// Create an unsaved store over `path` with the given records
    ///
    /// Used by tests and tools that build a record set before the first save.
    /// Duplicate names are rejected like `add` would.
    pub fn with_records(path: impl AsRef<Path>, records: Vec<Country>) -> Result<Self> {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            records: Vec::with_capacity(records.len()),
        };
        for country in records {
            if store.find(&country.name).is_some() {
                return Err(StoreError::DuplicateName(country.name));
            }
            store.records.push(country);
        }
        Ok(store)
    }

    /// Rewrite the data file from the current records
    ///
    /// A failed save leaves the in-memory records untouched.
    pub fn save(&self) -> Result<()> {
        write_records(&self.path, &HEADER, &self.records)?;
        info!(path = %self.path.display(), count = self.records.len(), "data file saved");
        Ok(())
    }

    /// Append a new country and save
    ///
    /// Fails with `DuplicateName` when a country with the same name
    /// (ignoring case) already exists; the store is left unchanged.
    pub fn add(&mut self, country: Country) -> Result<()> {
        if let Some(existing) = self.find(&country.name) {
            return Err(StoreError::DuplicateName(existing.name.clone()));
        }

        info!(name = %country.name, "country added");
        self.records.push(country);
        self.save()
    }

    /// Overwrite population and/or area of an existing country
    ///
    /// Each value is optional. An invalid value leaves its field unchanged
    /// and is reported as `FieldUpdate::Rejected`; the other field is still
    /// processed. The file is rewritten only when something changed.
    pub fn update(
        &mut self,
        name: &str,
        population: Option<&str>,
        area: Option<&str>,
    ) -> Result<UpdateReport> {
        let index = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(normalize_text(name)))?;

        let population = Self::apply_field(&mut self.records[index].population, "population", population);
        let area = Self::apply_field(&mut self.records[index].area, "area", area);

        let mut report = UpdateReport {
            name: self.records[index].name.clone(),
            population,
            area,
            saved: false,
        };

        if report.changed() {
            self.save()?;
            report.saved = true;
        } else {
            debug!(name = %report.name, "update left the record unchanged, skipping save");
        }

        Ok(report)
    }

    /// Reorder the records in place by `field`
    pub fn sort(&mut self, field: Field, direction: SortDirection) {
        sort_in_place(&mut self.records, field, direction);
    }

    /// Case-insensitive exact lookup
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.records.iter().find(|c| c.has_name(name))
    }

    /// Records in store order
    pub fn records(&self) -> &[Country] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|c| c.has_name(name))
    }

    /// Validate and normalize one file row
    ///
    /// `None` when a field is missing, a text field is blank, or a number
    /// is not a positive integer.
    fn parse_row(row: &Row) -> Option<Country> {
        if !row.has_all(&HEADER) {
            return None;
        }

        let name = normalize_text(row.get("name")?);
        let continent = normalize_text(row.get("continent")?);
        let population = parse_file_integer(row.get("population")?)?;
        let area = parse_file_integer(row.get("area")?)?;

        if name.is_empty() || continent.is_empty() {
            return None;
        }

        Some(Country {
            name,
            population,
            area,
            continent,
        })
    }

    fn apply_field(slot: &mut u64, field: &str, value: Option<&str>) -> FieldUpdate {
        let text = match value.map(str::trim) {
            None | Some("") => return FieldUpdate::Unchanged,
            Some(text) => text,
        };

        match parse_file_integer(text) {
            Some(value) => {
                *slot = value;
                FieldUpdate::Applied(value)
            }
            None => {
                warn!(field, value = text, "invalid update value, keeping previous value");
                FieldUpdate::Rejected(text.to_string())
            }
        }
    }
}
