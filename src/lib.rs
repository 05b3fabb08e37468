/// cinelist library
///
/// Watch-list catalog driven by free-form instructions: an interpreter
/// that turns text into catalog actions, and the tools that apply them.

pub mod catalog;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod interpreter;

// Re-exports for convenience
pub use catalog::{Catalog, MemoryCatalog, WatchStatus};
pub use config::Config;
pub use core::Orchestrator;
pub use db::Database;
pub use error::{CinelistError, Result};
