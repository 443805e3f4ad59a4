//! Shared test utilities for the AMAG workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each hand-roll temp directories. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`project`] - [`TestProject`](project::TestProject), a throwaway install target
//! - [`templates`] - [`TemplateTree`](templates::TemplateTree), a synthetic templates directory

pub mod project;
pub mod templates;
