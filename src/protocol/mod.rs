//! Protocol Module
//!
//! Typed requests and replies exchanged between the front ends (interactive
//! session, one-shot CLI) and the `Engine`.
//!
//! ```text
//!   Session / CLI ──Command──▶ Engine::execute ──Response──▶ display
//! ```
//!
//! Front ends never touch the store directly: every operation is a
//! `Command` variant and every result a `Response` variant.

mod command;
mod response;

pub use command::Command;
pub use response::Response;
