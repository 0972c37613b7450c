//! End-to-end: the fixture classes against the fixture interfaces.

use ducktype_checker::{implements, CheckerConfig, ConformanceChecker, ConformanceError};
use ducktype_registry::MethodSet;
use ducktype_tests::*;

#[test]
fn any_object_implements_the_empty_interface() {
    init_tracing();
    assert!(implements(&object(), &empty_interface()).unwrap());
    assert!(implements(&different(), &empty_interface()).unwrap());
}

#[test]
fn simple_implements_simple_call() {
    assert!(implements(&simple(), &simple_call()).unwrap());
}

#[test]
fn object_does_not_implement_simple_call() {
    assert!(!implements(&object(), &simple_call()).unwrap());
}

#[test]
fn buggy_does_not_implement_simple_call() {
    assert!(!implements(&buggy(), &simple_call()).unwrap());
}

#[test]
fn inherited_implements_composed_calls() {
    assert!(implements(&inherited(), &composed_calls()).unwrap());
}

#[test]
fn inherited_also_implements_simple_call() {
    assert!(implements(&inherited(), &simple_call()).unwrap());
}

#[test]
fn simple_does_not_implement_composed_calls() {
    assert!(!implements(&simple(), &composed_calls()).unwrap());
}

#[test]
fn different_does_not_implement_composed_calls() {
    assert!(!implements(&different(), &composed_calls()).unwrap());
}

#[test]
fn unmarked_declaration_is_rejected_everywhere() {
    init_tracing();
    let plain = MethodSet::new("Plain");
    let checker = ConformanceChecker::new();

    assert_eq!(
        checker.assert_interface(&plain),
        Err(ConformanceError::NotAnInterface {
            interface: "Plain".into()
        })
    );
    assert!(checker.check(&simple(), &plain).is_err());
    assert!(checker.implements(&simple(), &plain).is_err());
    assert!(checker.assert_implements(&simple(), &plain).is_err());
    assert!(checker.report(&simple(), &plain).is_err());
}

#[test]
fn composing_a_marked_interface_is_enough() {
    let checker = ConformanceChecker::new();
    assert!(checker.assert_interface(&composed_calls()).is_ok());
    assert!(checker.assert_interface(&simple_call()).is_ok());
}

#[test]
fn marking_later_makes_a_declaration_checkable() {
    let late = MethodSet::new("Late");
    let checker = ConformanceChecker::new();
    assert!(checker.assert_interface(&late).is_err());
    late.mark();
    assert!(checker.assert_interface(&late).is_ok());
    assert!(checker.implements(&object(), &late).unwrap());
}

#[test]
fn assertion_error_lists_every_issue() {
    init_tracing();
    let err = ConformanceChecker::new()
        .assert_implements(&different(), &composed_calls())
        .unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("Different fails to implement interface ComposedCalls:"));
    assert!(text
        .contains("Different's method simple_call expected to define 0 parameters but defines 1"));
    assert!(text
        .contains("Different's method complex_call expected to define 3 parameters but defines 1"));
    assert_eq!(err.issues().len(), 2);
}

#[test]
fn fail_fast_assertion_still_lists_every_issue() {
    init_tracing();
    let checker = ConformanceChecker::with_config(CheckerConfig {
        fail_fast: true,
        ..CheckerConfig::default()
    });
    assert_eq!(checker.check(&different(), &composed_calls()).unwrap().len(), 1);

    let err = checker
        .assert_implements(&different(), &composed_calls())
        .unwrap_err();
    let full = ConformanceChecker::new()
        .check(&different(), &composed_calls())
        .unwrap();
    assert_eq!(err.issues(), full.as_slice());
    assert_eq!(err.issues().len(), 2);
}
