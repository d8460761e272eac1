//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `std::fs`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod manifest;
pub mod report;

pub use config::{RootSource, ScaffoldConfig, validate_config_key, validate_config_value};
pub use error::{ApplyFailure, ConfigError, ProvisionError};
pub use manifest::{ContentMap, FileEntry, RelPath};
pub use report::{WriteOutcome, WriteReport, WrittenFile};
