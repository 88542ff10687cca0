//! Storage Module
//!
//! Persistent storage of country records in a single CSV file.
//!
//! ## Responsibilities
//! - Read every row of the data file as an ordered field mapping
//! - Validate and normalize rows, skipping and counting malformed ones
//! - Rewrite the whole file from the in-memory records on each save
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ name,population,area,continent          │  header (exact identifiers)
//! ├─────────────────────────────────────────┤
//! │ Argentina,45376763,2780400,America      │  one row per record,
//! │ Spain,47450795,505990,Europe            │  integers as plain digits
//! │ ...                                     │
//! └─────────────────────────────────────────┘
//! ```

mod csv_file;
mod store;

pub use csv_file::{read_rows, write_records, Row};
pub use store::{CountryStore, FieldUpdate, LoadReport, UpdateReport};
