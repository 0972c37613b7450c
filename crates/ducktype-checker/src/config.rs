//! Checker configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Method names available on every object unconditionally.
const UNIVERSAL_METHODS: &[&str] = &[
    "clone",
    "equals",
    "hash",
    "inspect",
    "responds_to",
    "to_string",
    "type_name",
];

/// The universal base-object surface.
///
/// Interface methods whose names appear here are never required, so an
/// interface that only repeats universal methods is satisfied by any object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseSurface(BTreeSet<String>);

impl BaseSurface {
    /// A surface with no universal methods.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Add a universal method name.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.0.insert(name.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for BaseSurface {
    fn default() -> Self {
        Self::from_names(UNIVERSAL_METHODS.iter().copied())
    }
}

/// Configuration for a [`ConformanceChecker`](crate::ConformanceChecker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Universal methods excluded from every interface's required set.
    #[serde(default)]
    pub base_surface: BaseSurface,
    /// Stop at the first issue found.
    #[serde(default)]
    pub fail_fast: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_surface: BaseSurface::default(),
            fail_fast: false,
        }
    }
}
