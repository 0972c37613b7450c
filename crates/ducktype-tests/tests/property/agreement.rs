//! Property tests: the predicate, the assertion and the issue list agree.

use ducktype_checker::{ClassShape, ConformanceChecker, ConformanceError};
use ducktype_registry::MethodSet;
use ducktype_types::{MethodDescriptor, ParamDescriptor, Requiredness};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_param() -> impl Strategy<Value = ParamDescriptor> {
    ("[a-d]{1,2}", any::<bool>())
        .prop_map(|(name, required)| ParamDescriptor::new(name, Requiredness::from(required)))
}

fn arb_method(name_pattern: &'static str) -> impl Strategy<Value = MethodDescriptor> {
    (name_pattern, prop::collection::vec(arb_param(), 0..4))
        .prop_map(|(name, params)| MethodDescriptor::with_params(name, params))
}

fn arb_interface() -> impl Strategy<Value = MethodSet> {
    prop::collection::vec(arb_method("m_[a-e]"), 0..6).prop_map(|methods| {
        methods
            .into_iter()
            .fold(MethodSet::interface("Generated"), |set, m| set.method(m))
    })
}

/// Public methods drawn from the same small name space, so objects
/// sometimes match, sometimes miss, sometimes mismatch.
fn arb_object() -> impl Strategy<Value = ClassShape> {
    prop::collection::vec(arb_method("m_[a-e]"), 0..6).prop_map(|methods| {
        methods
            .into_iter()
            .fold(ClassShape::new("Candidate"), |class, m| class.def(m))
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// `implements` is exactly "the issue list is empty".
    #[test]
    fn predicate_matches_issue_list(iface in arb_interface(), obj in arb_object()) {
        let checker = ConformanceChecker::new();
        let issues = checker.check(&obj, &iface).unwrap();
        prop_assert_eq!(checker.implements(&obj, &iface).unwrap(), issues.is_empty());
    }

    /// `assert_implements` fails iff `implements` is false, and carries the
    /// same issues `check` returns.
    #[test]
    fn assertion_matches_predicate(iface in arb_interface(), obj in arb_object()) {
        let checker = ConformanceChecker::new();
        let implements = checker.implements(&obj, &iface).unwrap();
        match checker.assert_implements(&obj, &iface) {
            Ok(()) => prop_assert!(implements),
            Err(ConformanceError::InterfaceNotImplemented { issues, .. }) => {
                prop_assert!(!implements);
                prop_assert_eq!(issues, checker.check(&obj, &iface).unwrap());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Repeated checks return identical ordered lists.
    #[test]
    fn check_is_idempotent(iface in arb_interface(), obj in arb_object()) {
        let checker = ConformanceChecker::new();
        prop_assert_eq!(
            checker.check(&obj, &iface).unwrap(),
            checker.check(&obj, &iface).unwrap()
        );
    }

    /// Every object conforms to an interface without specific methods.
    #[test]
    fn empty_interface_always_satisfied(obj in arb_object()) {
        let empty = MethodSet::interface("EmptyInterface");
        prop_assert!(ConformanceChecker::new().implements(&obj, &empty).unwrap());
    }

    /// Issues follow the interface's method order, and a method yields at
    /// most one issue per parameter, or exactly one presence/arity issue.
    #[test]
    fn issues_are_ordered_and_bounded(iface in arb_interface(), obj in arb_object()) {
        let checker = ConformanceChecker::new();
        let required = checker.required_methods(&iface);
        let issues = checker.check(&obj, &iface).unwrap();

        let positions: Vec<usize> = issues
            .iter()
            .map(|i| required.iter().position(|m| m.name == i.method()).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));

        for method in &required {
            let count = issues.iter().filter(|i| i.method() == method.name).count();
            prop_assert!(count <= method.arity().max(1));
        }
    }

    /// `fail_fast` never changes whether an object conforms, and never
    /// shortens a report or an assertion error.
    #[test]
    fn fail_fast_preserves_verdict(iface in arb_interface(), obj in arb_object()) {
        let full = ConformanceChecker::new();
        let fast = ConformanceChecker::with_config(ducktype_checker::CheckerConfig {
            fail_fast: true,
            ..Default::default()
        });
        let full_issues = full.check(&obj, &iface).unwrap();
        let fast_issues = fast.check(&obj, &iface).unwrap();
        prop_assert_eq!(full_issues.is_empty(), fast_issues.is_empty());
        prop_assert!(fast_issues.len() <= 1);
        prop_assert_eq!(fast_issues.first(), full_issues.first());
        prop_assert_eq!(&fast.report(&obj, &iface).unwrap().issues, &full_issues);
        if let Err(err) = fast.assert_implements(&obj, &iface) {
            prop_assert_eq!(err.issues(), full_issues.as_slice());
        }
    }
}
