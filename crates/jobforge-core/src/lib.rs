//! Core contracts shared across Jobforge crates.
//!
//! This crate defines the job record model, the structured staffing key,
//! the reference vocabulary bundle, and the tunable generation settings.

pub mod error;
pub mod record;
pub mod settings;
pub mod vocab;

pub use error::{Error, Result};
pub use record::{record_id, JobRecord, StaffingKey, JOB_COLUMNS, LIST_DELIMITER};
pub use settings::{Bounds, Cap, Settings};
pub use vocab::{Domains, LevelMeta, Locations, RolesLevels, Vocabulary, REMOTE_SENTINEL};
