//! # ducktype-registry
//!
//! Declares method sets and tags the ones meant to be checked as interfaces.
//!
//! A [`MethodSet`] is an ordered list of method descriptors plus any method
//! sets it includes. Marking a set makes it an interface for the rest of its
//! lifetime; a set that includes an interface is an interface too, so
//! interfaces compose by inclusion.
//!
//! ```rust
//! use std::sync::Arc;
//! use ducktype_registry::MethodSet;
//! use ducktype_types::MethodDescriptor;
//!
//! let simple =
//!     Arc::new(MethodSet::interface("SimpleCall").method(MethodDescriptor::new("simple_call")));
//! let composed = MethodSet::new("ComposedCalls")
//!     .include(simple)
//!     .method(MethodDescriptor::new("complex_call").required("arg1").optional("arg2"));
//!
//! assert!(composed.is_interface());
//! assert_eq!(composed.flattened_methods().len(), 2);
//! ```
//!
//! [`InterfaceRegistry`] is an optional named catalog on top, able to build
//! method sets from serialized [`InterfaceDocument`]s.

#![deny(unsafe_code)]

pub mod declaration;
pub mod error;
pub mod registry;

pub use declaration::MethodSet;
pub use error::{RegistryError, RegistryResult};
pub use registry::{InterfaceDocument, InterfaceRegistry};
