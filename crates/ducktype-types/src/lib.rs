//! # ducktype-types
//!
//! Value types shared by the interface registry and the conformance checker.
//!
//! - **MethodDescriptor / ParamDescriptor** — the checkable shape of a method:
//!   its name and its ordered parameters (name plus required/optional kind).
//! - **Issue / IssueKind** — one itemized conformance mismatch, rendered into a
//!   human-readable message at construction time.
//!
//! Parameter types and return types are never part of a descriptor.

pub mod descriptor;
pub mod issue;

pub use descriptor::{MethodDescriptor, ParamDescriptor, Requiredness};
pub use issue::{Issue, IssueKind};
