//! Object introspection.

use ducktype_types::MethodDescriptor;
use std::sync::Arc;

/// Exposes the publicly invocable methods of a candidate object.
///
/// Implement this on an adapter for whatever object model is being checked.
/// Resolution covers the object's own and inherited methods; anything not
/// publicly callable must not be returned.
pub trait Introspectable {
    /// Type name used in issue messages.
    fn type_name(&self) -> &str;

    /// Resolve the public method `name`, if the object has one.
    fn public_method(&self, name: &str) -> Option<MethodDescriptor>;

    fn responds_to(&self, name: &str) -> bool {
        self.public_method(name).is_some()
    }
}

impl<T: Introspectable + ?Sized> Introspectable for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn public_method(&self, name: &str) -> Option<MethodDescriptor> {
        (**self).public_method(name)
    }
}

impl<T: Introspectable + ?Sized> Introspectable for Box<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn public_method(&self, name: &str) -> Option<MethodDescriptor> {
        (**self).public_method(name)
    }
}

impl<T: Introspectable + ?Sized> Introspectable for Arc<T> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn public_method(&self, name: &str) -> Option<MethodDescriptor> {
        (**self).public_method(name)
    }
}
