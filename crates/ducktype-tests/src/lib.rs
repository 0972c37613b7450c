//! Shared fixtures for the ducktype integration and property tests.
//!
//! The fixtures model a small object model: three interfaces
//! (`EmptyInterface`, `SimpleCall`, and `ComposedCalls` which includes
//! `SimpleCall`) and five classes that implement them more or less well.

use std::sync::{Arc, Once};

use ducktype_checker::ClassShape;
use ducktype_registry::MethodSet;
use ducktype_types::MethodDescriptor;

static TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
/// Honors `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn complex_call() -> MethodDescriptor {
    MethodDescriptor::new("complex_call")
        .required("arg1")
        .optional("arg2")
        .optional("arg3")
}

/// Marked, with no interface-specific methods.
pub fn empty_interface() -> Arc<MethodSet> {
    Arc::new(MethodSet::interface("EmptyInterface"))
}

/// Marked; `simple_call()`.
pub fn simple_call() -> Arc<MethodSet> {
    Arc::new(MethodSet::interface("SimpleCall").method(MethodDescriptor::new("simple_call")))
}

/// Unmarked, but includes `SimpleCall`; adds `complex_call(arg1, arg2?, arg3?)`.
pub fn composed_calls() -> Arc<MethodSet> {
    Arc::new(
        MethodSet::new("ComposedCalls")
            .include(simple_call())
            .method(complex_call()),
    )
}

/// A class with nothing but the universal surface.
pub fn object() -> Arc<ClassShape> {
    Arc::new(ClassShape::new("Object"))
}

/// Implements `SimpleCall` only.
pub fn simple() -> Arc<ClassShape> {
    Arc::new(ClassShape::new("Simple").def(MethodDescriptor::new("simple_call")))
}

/// `simple_call(arg)`: wrong arity for `SimpleCall`.
pub fn buggy() -> Arc<ClassShape> {
    Arc::new(ClassShape::new("Buggy").def(MethodDescriptor::new("simple_call").required("arg")))
}

/// Extends `Simple` with a matching `complex_call`.
pub fn inherited() -> Arc<ClassShape> {
    Arc::new(ClassShape::subclass_of("Inherited", simple()).def(complex_call()))
}

/// Extends `Buggy` with `complex_call(arg1)`: both methods present, both wrong.
pub fn different() -> Arc<ClassShape> {
    Arc::new(
        ClassShape::subclass_of("Different", buggy())
            .def(MethodDescriptor::new("complex_call").required("arg1")),
    )
}
