//! Conformance reports.
//!
//! A report bundles the issues of one check with what was checked, and
//! renders them as an itemized listing.

use crate::error::{ConformanceError, ConformanceResult};
use ducktype_types::{Issue, IssueKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-kind issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub missing_methods: usize,
    pub arity_mismatches: usize,
    pub param_name_mismatches: usize,
    pub param_requiredness_mismatches: usize,
}

impl IssueCounts {
    pub fn total(&self) -> usize {
        self.missing_methods
            + self.arity_mismatches
            + self.param_name_mismatches
            + self.param_requiredness_mismatches
    }
}

/// Outcome of checking one object against one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Type name of the checked object.
    pub type_name: String,
    /// Interface checked against.
    pub interface: String,
    /// Number of required (non-universal) interface methods.
    pub required: usize,
    /// Issues in examination order.
    pub issues: Vec<Issue>,
}

impl ConformanceReport {
    pub fn new(
        type_name: impl Into<String>,
        interface: impl Into<String>,
        required: usize,
        issues: Vec<Issue>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            interface: interface.into(),
            required,
            issues,
        }
    }

    pub fn is_conformant(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn counts(&self) -> IssueCounts {
        let mut counts = IssueCounts::default();
        for issue in &self.issues {
            match issue.kind() {
                IssueKind::MissingMethod => counts.missing_methods += 1,
                IssueKind::ArityMismatch { .. } => counts.arity_mismatches += 1,
                IssueKind::ParamNameMismatch { .. } => counts.param_name_mismatches += 1,
                IssueKind::ParamRequirednessMismatch { .. } => {
                    counts.param_requiredness_mismatches += 1
                }
            }
        }
        counts
    }

    /// Names of required methods the object lacks.
    pub fn missing_methods(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|i| *i.kind() == IssueKind::MissingMethod)
            .map(|i| i.method())
            .collect()
    }

    /// `Ok(())` when conformant, otherwise an `InterfaceNotImplemented` error
    /// carrying every issue.
    pub fn into_result(self) -> ConformanceResult<()> {
        if self.issues.is_empty() {
            return Ok(());
        }
        Err(ConformanceError::InterfaceNotImplemented {
            type_name: self.type_name,
            interface: self.interface,
            issues: self.issues,
        })
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} vs {} ({} required methods)",
            self.type_name, self.interface, self.required
        )?;
        if self.is_conformant() {
            return writeln!(f, "  [+] CONFORMANT");
        }
        writeln!(f, "  [x] {} issues", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "      - {}", issue)?;
        }
        Ok(())
    }
}
