//! Locate `node_modules` directories under a root and reclaim their space.
//!
//! The library holds the non-interactive core: [`Scanner`] walks a tree,
//! [`reclaimer`] measures and deletes, and [`utils::format_bytes`] renders
//! sizes. None of it aborts on filesystem errors; failures are collected in
//! the returned reports.

pub mod cleaner;
pub mod config;
pub mod disk_info;
pub mod error;
pub mod reclaimer;
pub mod scanner;
pub mod utils;

pub use cleaner::{CleanSummary, Measurement, Reclamation, ScanReport};
pub use config::Config;
pub use error::CleanError;
pub use reclaimer::{directory_size, measure_only, reclaim, remove_tree};
pub use scanner::{Scanner, MARKER_DIR};
pub use utils::{format_bytes, format_size};
