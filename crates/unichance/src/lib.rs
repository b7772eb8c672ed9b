//! Admission chance scoring for university programs.
//!
//! The [`chances`] module holds the scoring engines, [`catalog`] loads the
//! program dataset they read from.

pub mod catalog;
pub mod chances;
pub mod config;
pub mod error;
pub mod telemetry;

pub use catalog::{Catalog, CatalogError};
pub use chances::ChanceEngine;
pub use error::AppError;
