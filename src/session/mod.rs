//! Session Module
//!
//! Interactive, menu-driven front end over the `Engine`.
//!
//! ## Architecture
//! - `menu`: enum per menu level, parsed from the user's choice
//! - `display`: text rendering of tables, numbers and responses
//! - `controller`: the prompt loop, generic over any `BufRead` / `Write`
//!   pair so it runs the same against a terminal or a test buffer

mod controller;
mod display;
mod menu;

pub use controller::Session;
pub use display::{format_decimal, format_thousands, Renderer};
pub use menu::{FilterMenu, MainMenu, Menu, SortMenu, StatsMenu};
