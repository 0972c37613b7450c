//! # ducktype-checker
//!
//! Runtime structural conformance: does an object provide a compatible
//! implementation of an interface, without having declared it?
//!
//! Only method names, parameter counts, parameter names and required/optional
//! kind are compared. Parameter and return types are not. Checking never
//! touches the object beyond asking it for its public methods.
//!
//! ## Components
//!
//! - **Introspectable** — adapter trait exposing an object's public methods
//! - **ClassShape** — `Introspectable` for class-based models with inheritance
//!   and visibility
//! - **ConformanceChecker** — `check`, `implements`, `assert_implements`,
//!   `assert_interface`, `report`
//! - **CheckerConfig / BaseSurface** — universal methods excluded from every
//!   interface, fail-fast switch
//!
//! ```rust
//! use ducktype_checker::{ClassShape, ConformanceChecker};
//! use ducktype_registry::MethodSet;
//! use ducktype_types::MethodDescriptor;
//!
//! let simple_call =
//!     MethodSet::interface("SimpleCall").method(MethodDescriptor::new("simple_call"));
//! let buggy = ClassShape::new("Buggy").def(MethodDescriptor::new("simple_call").required("arg"));
//!
//! let checker = ConformanceChecker::new();
//! assert!(!checker.implements(&buggy, &simple_call).unwrap());
//! let err = checker.assert_implements(&buggy, &simple_call).unwrap_err();
//! assert!(err.to_string().contains("expected to define 0 parameters but defines 1"));
//! ```

#![deny(unsafe_code)]

pub mod checker;
pub mod config;
pub mod error;
pub mod introspect;
pub mod report;
pub mod shape;

pub use checker::{assert_implements, check, implements, ConformanceChecker};
pub use config::{BaseSurface, CheckerConfig};
pub use error::{ConformanceError, ConformanceResult};
pub use introspect::Introspectable;
pub use report::{ConformanceReport, IssueCounts};
pub use shape::{ClassShape, MethodDef, Visibility};

pub use ducktype_registry::MethodSet;
pub use ducktype_types::{Issue, IssueKind, MethodDescriptor, ParamDescriptor, Requiredness};
