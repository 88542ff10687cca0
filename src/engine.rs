//! Engine Module
//!
//! Coordinates the store and the query functions behind a single
//! `execute(Command)` entry point.
//!
//! ## Responsibilities
//! - Open the store from the configured data file and keep the load report
//! - Route every `Command` to the store or the query layer
//! - Reject data-dependent commands on an empty store
//! - Save on quit

use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::protocol::{Command, Response};
use crate::query;
use crate::storage::{CountryStore, LoadReport};

/// The main country engine
///
/// ## Ownership Model
///
/// The engine owns the only `CountryStore` of the process. Front ends hold
/// the engine by `&mut` and talk to it through `Command`s; there is no
/// shared or global state, and no locking (one session owns the store for
/// its whole lifetime).
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Records and their backing file
    store: CountryStore,

    /// What happened when the data file was read
    load_report: LoadReport,
}

impl Engine {
    /// Open or create an engine with the given config
    ///
    /// On startup:
    /// 1. Validate the configuration
    /// 2. Load the data file (created with a header when missing)
    /// 3. Ready to serve commands
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let (store, load_report) = CountryStore::open(&config.data_file)?;
        info!(
            accepted = load_report.accepted,
            ignored = load_report.ignored,
            created = load_report.created,
            "engine ready"
        );

        Ok(Self {
            config,
            store,
            load_report,
        })
    }

    /// Open with a data file path (convenience method)
    ///
    /// Uses default config with the specified file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        debug!(command = command.name(), records = self.store.len(), "executing command");

        if command.needs_records() && self.store.is_empty() {
            return Err(StoreError::EmptyCollection(command.name().to_string()));
        }

        match command {
            Command::Add { country } => {
                self.store.add(country.clone())?;
                Ok(Response::Added(country))
            }
            Command::Update {
                name,
                population,
                area,
            } => {
                let report = self
                    .store
                    .update(&name, population.as_deref(), area.as_deref())?;
                Ok(Response::Updated(report))
            }
            Command::Search { query } => {
                Ok(Response::Countries(query::search_by_name(self.store.records(), &query)?))
            }
            Command::FilterContinent { continent } => Ok(Response::Countries(
                query::filter_by_continent(self.store.records(), &continent),
            )),
            Command::FilterRange { field, min, max } => Ok(Response::Countries(
                query::filter_by_range(self.store.records(), field, min, max)?,
            )),
            Command::Continents => Ok(Response::Continents(query::distinct_continents(
                self.store.records(),
            ))),
            Command::Sort { field, direction } => {
                self.store.sort(field, direction);
                Ok(Response::Sorted {
                    field,
                    direction,
                    countries: self.store.records().to_vec(),
                })
            }
            Command::Extremes => {
                let extremes = query::extremes_by_population(self.store.records())
                    .ok_or_else(|| StoreError::EmptyCollection("extremes".to_string()))?;
                Ok(Response::Extremes {
                    max: extremes.max.clone(),
                    min: extremes.min.clone(),
                })
            }
            Command::Average { field } => {
                let value = query::average(self.store.records(), field)
                    .ok_or_else(|| StoreError::EmptyCollection("average".to_string()))?;
                Ok(Response::Average { field, value })
            }
            Command::CountByContinent => {
                Ok(Response::Counts(query::count_by_continent(self.store.records())))
            }
            Command::List => Ok(Response::Countries(self.store.records().to_vec())),
            Command::Save => {
                self.store.save()?;
                Ok(Response::Saved {
                    count: self.store.len(),
                })
            }
            Command::Quit => {
                self.store.save()?;
                info!(count = self.store.len(), "session closed");
                Ok(Response::Closed {
                    count: self.store.len(),
                })
            }
        }
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the store
    pub fn store(&self) -> &CountryStore {
        &self.store
    }

    /// Get the report produced when the data file was loaded
    pub fn load_report(&self) -> LoadReport {
        self.load_report
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
