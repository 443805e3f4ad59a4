//! Component registry
//!
//! The registry is the single source of truth for what the installer manages.
//! It is built once from a literal table and never mutated; adding a component
//! means adding an entry to the catalog and a template file.

mod catalog;
mod component;

pub use component::{Component, ComponentKind, ComponentShape};

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{Error, Result};

/// Components of one kind, as produced by [`Registry::describe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentGroup {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub label: &'static str,
    pub components: Vec<Component>,
}

/// Ordered, read-only catalog of components.
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<Component>,
}

impl Registry {
    /// The components shipped with this build, in catalog order.
    pub fn builtin() -> Self {
        Self::new(catalog::COMPONENTS.to_vec())
    }

    /// Build a registry from an explicit list.
    ///
    /// `(kind, name)` pairs are expected to be unique; this is not checked.
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn find(&self, kind: ComponentKind, name: &str) -> Option<&Component> {
        self.components
            .iter()
            .find(|c| c.kind == kind && c.name == name)
    }

    /// Resolve user input to a registered component.
    ///
    /// Fails with [`Error::InvalidComponentType`] for an unknown kind and
    /// [`Error::UnknownComponent`] for an unregistered name.
    pub fn lookup(&self, kind: &str, name: &str) -> Result<&Component> {
        let kind: ComponentKind = kind.parse()?;
        self.find(kind, name).ok_or_else(|| Error::UnknownComponent {
            kind,
            name: name.to_string(),
        })
    }

    /// All `"<kind>/<name>"` keys.
    pub fn keys(&self) -> BTreeSet<String> {
        self.components.iter().map(Component::key).collect()
    }

    /// Group components by kind for display, keeping catalog order within a group.
    pub fn describe(&self) -> Vec<ComponentGroup> {
        ComponentKind::ALL
            .into_iter()
            .map(|kind| ComponentGroup {
                kind,
                label: kind.label(),
                components: self
                    .components
                    .iter()
                    .filter(|c| c.kind == kind)
                    .copied()
                    .collect(),
            })
            .collect()
    }
}
