//! Class shapes: an [`Introspectable`] adapter for class-based object models.
//!
//! A `ClassShape` records what a class defines (methods with visibility) and
//! what it inherits from. Method resolution walks the class first, then its
//! superclass chain, so a subclass definition shadows an inherited one, and a
//! non-public redefinition hides an inherited public method.

use crate::introspect::Introspectable;
use ducktype_types::MethodDescriptor;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Who may call a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// A method defined on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDef {
    pub descriptor: MethodDescriptor,
    pub visibility: Visibility,
}

/// The method table of a class plus its superclass link.
#[derive(Debug, Clone)]
pub struct ClassShape {
    name: String,
    methods: Vec<MethodDef>,
    superclass: Option<Arc<ClassShape>>,
}

impl ClassShape {
    /// A class with no methods and no superclass.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            superclass: None,
        }
    }

    /// A class inheriting from `superclass`.
    pub fn subclass_of(name: impl Into<String>, superclass: Arc<ClassShape>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            superclass: Some(superclass),
        }
    }

    /// Define a public method.
    pub fn def(self, method: MethodDescriptor) -> Self {
        self.define(method, Visibility::Public)
    }

    pub fn def_protected(self, method: MethodDescriptor) -> Self {
        self.define(method, Visibility::Protected)
    }

    pub fn def_private(self, method: MethodDescriptor) -> Self {
        self.define(method, Visibility::Private)
    }

    /// Define a method; redefining a name replaces the earlier definition.
    pub fn define(mut self, descriptor: MethodDescriptor, visibility: Visibility) -> Self {
        let def = MethodDef {
            descriptor,
            visibility,
        };
        match self
            .methods
            .iter_mut()
            .find(|m| m.descriptor.name == def.descriptor.name)
        {
            Some(existing) => *existing = def,
            None => self.methods.push(def),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&Arc<ClassShape>> {
        self.superclass.as_ref()
    }

    /// Resolve a method definition along the inheritance chain.
    pub fn lookup(&self, name: &str) -> Option<&MethodDef> {
        let mut class = Some(self);
        while let Some(c) = class {
            if let Some(def) = c.methods.iter().find(|m| m.descriptor.name == name) {
                return Some(def);
            }
            class = c.superclass.as_deref();
        }
        None
    }
}

impl Introspectable for ClassShape {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn public_method(&self, name: &str) -> Option<MethodDescriptor> {
        self.lookup(name)
            .filter(|def| def.visibility == Visibility::Public)
            .map(|def| def.descriptor.clone())
    }
}
