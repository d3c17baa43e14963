//! Core types for goal-lookup
//!
//! Goal records, the ordered goal book with its query resolver, and text
//! formatting shared by the HTTP API and the CLI.

mod book;
mod constants;
mod env_config;
mod format;
mod goal;

pub use book::*;
pub use constants::*;
pub use env_config::*;
pub use format::*;
pub use goal::*;
