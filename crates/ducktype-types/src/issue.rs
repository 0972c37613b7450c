//! Conformance issues.
//!
//! An [`Issue`] is one itemized mismatch between an interface's expected
//! method and what a candidate object actually provides. Issues are data:
//! a check returns them in the order methods, then parameters, were examined.

use crate::descriptor::Requiredness;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of mismatch was found, with the data describing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// The object has no public method with the expected name.
    MissingMethod,
    /// Parameter counts differ. Supersedes any per-parameter comparison.
    ArityMismatch { expected: usize, actual: usize },
    /// The parameter at `index` has a different name.
    ParamNameMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
    /// Names match at `index` but required/optional kind differs.
    ParamRequirednessMismatch {
        index: usize,
        param: String,
        expected: Requiredness,
        actual: Requiredness,
    },
}

impl IssueKind {
    /// Short label, stable across releases.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingMethod => "missing_method",
            Self::ArityMismatch { .. } => "arity_mismatch",
            Self::ParamNameMismatch { .. } => "param_name_mismatch",
            Self::ParamRequirednessMismatch { .. } => "param_requiredness_mismatch",
        }
    }

    /// Parameter index, for per-parameter issues.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::ParamNameMismatch { index, .. }
            | Self::ParamRequirednessMismatch { index, .. } => Some(*index),
            Self::MissingMethod | Self::ArityMismatch { .. } => None,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One conformance mismatch.
///
/// Immutable once built. The message is always rendered from the other
/// fields, including on deserialization, where any incoming `message` is
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "IssueRecord")]
pub struct Issue {
    type_name: String,
    interface: String,
    method: String,
    #[serde(flatten)]
    kind: IssueKind,
    message: String,
}

/// Wire form of an [`Issue`] without its rendered message.
#[derive(Deserialize)]
struct IssueRecord {
    type_name: String,
    interface: String,
    method: String,
    #[serde(flatten)]
    kind: IssueKind,
}

impl From<IssueRecord> for Issue {
    fn from(record: IssueRecord) -> Self {
        Self::new(&record.type_name, &record.interface, &record.method, record.kind)
    }
}

impl Issue {
    fn new(type_name: &str, interface: &str, method: &str, kind: IssueKind) -> Self {
        let message = render(type_name, interface, method, &kind);
        Self {
            type_name: type_name.to_string(),
            interface: interface.to_string(),
            method: method.to_string(),
            kind,
            message,
        }
    }

    pub fn missing_method(type_name: &str, interface: &str, method: &str) -> Self {
        Self::new(type_name, interface, method, IssueKind::MissingMethod)
    }

    pub fn arity_mismatch(
        type_name: &str,
        interface: &str,
        method: &str,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::new(
            type_name,
            interface,
            method,
            IssueKind::ArityMismatch { expected, actual },
        )
    }

    pub fn param_name_mismatch(
        type_name: &str,
        interface: &str,
        method: &str,
        index: usize,
        expected: &str,
        actual: &str,
    ) -> Self {
        Self::new(
            type_name,
            interface,
            method,
            IssueKind::ParamNameMismatch {
                index,
                expected: expected.to_string(),
                actual: actual.to_string(),
            },
        )
    }

    pub fn param_requiredness_mismatch(
        type_name: &str,
        interface: &str,
        method: &str,
        index: usize,
        param: &str,
        expected: Requiredness,
        actual: Requiredness,
    ) -> Self {
        Self::new(
            type_name,
            interface,
            method,
            IssueKind::ParamRequirednessMismatch {
                index,
                param: param.to_string(),
                expected,
                actual,
            },
        )
    }

    /// Type name of the checked object.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the interface the object was checked against.
    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Interface method the issue concerns.
    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn kind(&self) -> &IssueKind {
        &self.kind
    }

    /// Rendered, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn render(type_name: &str, interface: &str, method: &str, kind: &IssueKind) -> String {
    match kind {
        IssueKind::MissingMethod => {
            format!("{} does not implement {}'s method {}", type_name, interface, method)
        }
        IssueKind::ArityMismatch { expected, actual } => format!(
            "{}'s method {} expected to define {} parameters but defines {}",
            type_name, method, expected, actual
        ),
        IssueKind::ParamNameMismatch {
            index,
            expected,
            actual,
        } => format!(
            "{}'s method {} expected parameter {} to be {} but got {}",
            type_name, method, index, expected, actual
        ),
        IssueKind::ParamRequirednessMismatch {
            index,
            param,
            expected,
            actual,
        } => format!(
            "{}'s method {} parameter {} ({}) expected to be {} but is {}",
            type_name, method, index, param, expected, actual
        ),
    }
}
