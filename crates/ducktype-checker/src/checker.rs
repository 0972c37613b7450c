//! The conformance checker.
//!
//! Checking walks the interface's required methods in declaration order and
//! compares each against the object's public method of the same name:
//!
//! 1. Presence: no such public method records `MissingMethod`, and the method
//!    is not examined further.
//! 2. Arity: differing parameter counts record one `ArityMismatch`, and no
//!    parameter is compared.
//! 3. Parameters, position by position: a differing name records
//!    `ParamNameMismatch` and skips the requiredness comparison at that
//!    position; otherwise differing requiredness records
//!    `ParamRequirednessMismatch`.

use crate::config::CheckerConfig;
use crate::error::{ConformanceError, ConformanceResult};
use crate::introspect::Introspectable;
use crate::report::ConformanceReport;
use ducktype_registry::MethodSet;
use ducktype_types::{Issue, MethodDescriptor};
use tracing::{debug, warn};

/// Checks objects against interfaces. Holds configuration only; every check
/// is a pure function of its two inputs.
#[derive(Debug, Clone, Default)]
pub struct ConformanceChecker {
    config: CheckerConfig,
}

impl ConformanceChecker {
    /// Create a checker with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Fail with `NotAnInterface` unless `interface` is marked, directly or
    /// through an included set.
    pub fn assert_interface(&self, interface: &MethodSet) -> ConformanceResult<()> {
        if interface.is_interface() {
            return Ok(());
        }
        Err(ConformanceError::NotAnInterface {
            interface: interface.name().to_string(),
        })
    }

    /// The interface's flattened methods minus the universal base surface.
    pub fn required_methods(&self, interface: &MethodSet) -> Vec<MethodDescriptor> {
        interface
            .flattened_methods()
            .into_iter()
            .filter(|m| !self.config.base_surface.contains(&m.name))
            .collect()
    }

    /// Every mismatch between `obj` and `interface`, in examination order.
    /// An empty list means `obj` conforms. With `fail_fast` set, examination
    /// stops at the first mismatching method and only its first issue is kept.
    pub fn check<O>(&self, obj: &O, interface: &MethodSet) -> ConformanceResult<Vec<Issue>>
    where
        O: Introspectable + ?Sized,
    {
        self.assert_interface(interface)?;
        let required = self.required_methods(interface);
        Ok(self.compare(obj, interface.name(), &required, self.config.fail_fast))
    }

    /// Whether `obj` conforms to `interface`.
    pub fn implements<O>(&self, obj: &O, interface: &MethodSet) -> ConformanceResult<bool>
    where
        O: Introspectable + ?Sized,
    {
        Ok(self.check(obj, interface)?.is_empty())
    }

    /// Fail with `InterfaceNotImplemented`, carrying every issue, unless `obj`
    /// conforms to `interface`. `fail_fast` does not shorten the issue list.
    pub fn assert_implements<O>(&self, obj: &O, interface: &MethodSet) -> ConformanceResult<()>
    where
        O: Introspectable + ?Sized,
    {
        let result = self.report(obj, interface)?.into_result();
        if let Err(ref err) = result {
            warn!(
                type_name = obj.type_name(),
                interface = interface.name(),
                issues = err.issues().len(),
                "Interface not implemented"
            );
        }
        result
    }

    /// Check `obj` in full and bundle the outcome into a report.
    pub fn report<O>(&self, obj: &O, interface: &MethodSet) -> ConformanceResult<ConformanceReport>
    where
        O: Introspectable + ?Sized,
    {
        self.assert_interface(interface)?;
        let required = self.required_methods(interface);
        let issues = self.compare(obj, interface.name(), &required, false);
        Ok(ConformanceReport::new(
            obj.type_name(),
            interface.name(),
            required.len(),
            issues,
        ))
    }

    fn compare<O>(
        &self,
        obj: &O,
        interface: &str,
        required: &[MethodDescriptor],
        stop_at_first: bool,
    ) -> Vec<Issue>
    where
        O: Introspectable + ?Sized,
    {
        let type_name = obj.type_name();
        let mut issues = Vec::new();

        for expected in required {
            match obj.public_method(&expected.name) {
                None => {
                    issues.push(Issue::missing_method(type_name, interface, &expected.name));
                }
                Some(actual) => {
                    compare_signature(type_name, interface, expected, &actual, &mut issues);
                }
            }
            if stop_at_first && !issues.is_empty() {
                issues.truncate(1);
                break;
            }
        }

        debug!(
            type_name = type_name,
            interface = interface,
            required = required.len(),
            issues = issues.len(),
            "Conformance checked"
        );
        issues
    }
}

fn compare_signature(
    type_name: &str,
    interface: &str,
    expected: &MethodDescriptor,
    actual: &MethodDescriptor,
    issues: &mut Vec<Issue>,
) {
    if expected.arity() != actual.arity() {
        issues.push(Issue::arity_mismatch(
            type_name,
            interface,
            &expected.name,
            expected.arity(),
            actual.arity(),
        ));
        return;
    }

    for (index, (want, got)) in expected.params.iter().zip(&actual.params).enumerate() {
        if want.name != got.name {
            issues.push(Issue::param_name_mismatch(
                type_name,
                interface,
                &expected.name,
                index,
                &want.name,
                &got.name,
            ));
        } else if want.required != got.required {
            issues.push(Issue::param_requiredness_mismatch(
                type_name,
                interface,
                &expected.name,
                index,
                &got.name,
                want.required,
                got.required,
            ));
        }
    }
}

/// [`ConformanceChecker::check`] with the default configuration.
pub fn check<O>(obj: &O, interface: &MethodSet) -> ConformanceResult<Vec<Issue>>
where
    O: Introspectable + ?Sized,
{
    ConformanceChecker::new().check(obj, interface)
}

/// [`ConformanceChecker::implements`] with the default configuration.
pub fn implements<O>(obj: &O, interface: &MethodSet) -> ConformanceResult<bool>
where
    O: Introspectable + ?Sized,
{
    ConformanceChecker::new().implements(obj, interface)
}

/// [`ConformanceChecker::assert_implements`] with the default configuration.
pub fn assert_implements<O>(obj: &O, interface: &MethodSet) -> ConformanceResult<()>
where
    O: Introspectable + ?Sized,
{
    ConformanceChecker::new().assert_implements(obj, interface)
}
