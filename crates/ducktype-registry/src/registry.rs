//! Named catalog of method-set declarations.

use crate::declaration::MethodSet;
use crate::error::{RegistryError, RegistryResult};
use ducktype_types::MethodDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Serialized form of a method-set declaration.
///
/// Includes refer to method sets already declared in the same registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDocument {
    pub name: String,
    /// Mark the declared set as an interface.
    #[serde(default)]
    pub interface: bool,
    /// Names of included method sets, in inclusion order.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Default)]
struct Catalog {
    by_name: HashMap<String, Arc<MethodSet>>,
    order: Vec<String>,
}

/// Registry of method sets keyed by name.
pub struct InterfaceRegistry {
    catalog: RwLock<Catalog>,
}

impl InterfaceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(Catalog::default()),
        }
    }

    /// Register an already-built method set under its own name.
    pub fn register(&self, set: Arc<MethodSet>) -> RegistryResult<Arc<MethodSet>> {
        let mut catalog = self.catalog.write().map_err(|_| RegistryError::LockPoisoned)?;
        if catalog.by_name.contains_key(set.name()) {
            return Err(RegistryError::Duplicate(set.name().to_string()));
        }

        debug!(
            method_set = set.name(),
            methods = set.own_methods().len(),
            includes = set.includes().len(),
            interface = set.is_interface(),
            "Method set registered"
        );
        catalog.order.push(set.name().to_string());
        catalog.by_name.insert(set.name().to_string(), set.clone());
        Ok(set)
    }

    /// Build a method set from a document and register it.
    pub fn declare(&self, doc: InterfaceDocument) -> RegistryResult<Arc<MethodSet>> {
        let mut set = MethodSet::new(doc.name.clone());
        {
            let catalog = self.catalog.read().map_err(|_| RegistryError::LockPoisoned)?;
            for include in &doc.includes {
                let included = catalog.by_name.get(include).ok_or_else(|| {
                    RegistryError::UnknownInclude {
                        interface: doc.name.clone(),
                        include: include.clone(),
                    }
                })?;
                set = set.include(included.clone());
            }
        }
        for method in doc.methods {
            set = set.method(method);
        }
        if doc.interface {
            set.mark();
        }
        self.register(Arc::new(set))
    }

    /// Declare every document of a JSON array, in order.
    ///
    /// Documents declared before a failing one stay registered.
    pub fn load_json(&self, json: &str) -> RegistryResult<Vec<Arc<MethodSet>>> {
        let docs: Vec<InterfaceDocument> = serde_json::from_str(json)?;
        let declared = docs
            .into_iter()
            .map(|doc| self.declare(doc))
            .collect::<RegistryResult<Vec<_>>>()?;
        info!(count = declared.len(), "Interface documents loaded");
        Ok(declared)
    }

    /// Look up a method set by name.
    pub fn get(&self, name: &str) -> RegistryResult<Arc<MethodSet>> {
        let catalog = self.catalog.read().map_err(|_| RegistryError::LockPoisoned)?;
        catalog
            .by_name
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> RegistryResult<bool> {
        let catalog = self.catalog.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(catalog.by_name.contains_key(name))
    }

    /// Registered names in registration order.
    pub fn names(&self) -> RegistryResult<Vec<String>> {
        let catalog = self.catalog.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(catalog.order.clone())
    }

    /// Names of the registered sets that are interfaces.
    pub fn interfaces(&self) -> RegistryResult<Vec<String>> {
        let catalog = self.catalog.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(catalog
            .order
            .iter()
            .filter(|name| {
                catalog
                    .by_name
                    .get(name.as_str())
                    .is_some_and(|set| set.is_interface())
            })
            .cloned()
            .collect())
    }

    pub fn len(&self) -> RegistryResult<usize> {
        let catalog = self.catalog.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(catalog.order.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InterfaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
