//! Error types for conformance checking.

use ducktype_types::Issue;
use thiserror::Error;

/// Faults raised by the checker.
///
/// Both are programmer errors. A non-conformant object is not a fault for
/// [`check`](crate::ConformanceChecker::check); it only becomes one when the
/// caller asks for an assertion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConformanceError {
    #[error("interface must be a marked interface but {interface} is not")]
    NotAnInterface { interface: String },

    #[error("{type_name} fails to implement interface {interface}:\n{}", render_issues(.issues))]
    InterfaceNotImplemented {
        type_name: String,
        interface: String,
        issues: Vec<Issue>,
    },
}

impl ConformanceError {
    /// Issues carried by an `InterfaceNotImplemented` error.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::InterfaceNotImplemented { issues, .. } => issues,
            Self::NotAnInterface { .. } => &[],
        }
    }
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convenience result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;
