//! Core orchestration layer for the AMAG installer
//!
//! This crate ties the static component catalog to the filesystem:
//!
//! - **Registry**: the ordered, immutable list of installable components
//! - **Layout**: where each component lives in the template tree and in a target project
//! - **Sync check**: registry/template drift detection, run before packaging
//! - **Config store**: the `.amag/config.json` review configuration with default merging
//! - **Installer**: init, update, add, remove, uninstall and doctor
//!
//! # Architecture
//!
//! ```text
//!        amag-cli
//!            |
//!        amag-core ---- templates/
//!            |
//!         amag-fs
//! ```
//!
//! Installation state is never stored: a component is installed exactly when
//! its destination file exists, and every command re-probes the filesystem.

pub mod config;
pub mod error;
pub mod installer;
pub mod layout;
pub mod registry;
pub mod sync_check;

pub use config::{
    AmagConfig, ConfigStore, ReviewCli, ReviewConfig, ReviewRoleConfig, Setting, ThinkingLevel,
};
pub use error::{Error, Result};
pub use installer::{
    Action, DoctorEntry, DoctorReport, InitOptions, InstallReport, Installer, ItemOutcome,
    UninstallOptions, UninstallReport, UpdateOptions,
};
pub use layout::{ProjectLayout, TemplateSource};
pub use registry::{Component, ComponentGroup, ComponentKind, ComponentShape, Registry};
pub use sync_check::{DriftDirection, RegistrySyncReport, SyncIssue, check_registry_sync, scan_templates};
