//! Review configuration persisted at `.amag/config.json`
//!
//! The file always round-trips through [`AmagConfig`]: reads overlay stored
//! values on fresh defaults, so configs written by older versions pick up new
//! fields without losing user overrides.

mod review;
mod store;

pub use review::{AmagConfig, ReviewCli, ReviewConfig, ReviewRoleConfig, Setting, ThinkingLevel};
pub use store::{ConfigStore, coerce_value};
