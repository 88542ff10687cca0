//! # countrydb
//!
//! A small records manager for country data with:
//! - A CSV file as the single source of truth
//! - Skip-and-count validation of malformed rows on load
//! - Stable insertion sorts, filters, and summary statistics
//! - An interactive menu session and a one-shot CLI
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Session (menus)  /  CLI (subcommands)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │                (dispatch → Response)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Store    │          │    Query    │
//!   │  (records)  │          │ (stateless) │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  CSV file   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod validate;
pub mod record;
pub mod storage;
pub mod query;
pub mod protocol;
pub mod engine;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use config::Config;
pub use engine::Engine;
pub use record::{Country, Field, NumericField};
pub use storage::{CountryStore, LoadReport};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of countrydb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
