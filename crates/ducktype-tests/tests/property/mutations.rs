//! Property tests: an exact implementation conforms, and each single
//! mutation of it produces exactly the expected issue.

use ducktype_checker::{check, ClassShape};
use ducktype_registry::MethodSet;
use ducktype_types::{IssueKind, MethodDescriptor, ParamDescriptor, Requiredness};
use proptest::prelude::*;

fn arb_params(min: usize) -> impl Strategy<Value = Vec<ParamDescriptor>> {
    prop::collection::vec(("[a-z]{1,6}", any::<bool>()), min..5).prop_map(|params| {
        params
            .into_iter()
            .map(|(name, required)| ParamDescriptor::new(name, Requiredness::from(required)))
            .collect()
    })
}

/// Methods with distinct names, in a stable order.
fn arb_methods(min_params: usize) -> impl Strategy<Value = Vec<MethodDescriptor>> {
    prop::collection::btree_map("op_[a-z]{1,5}", arb_params(min_params), 1..6).prop_map(|map| {
        map.into_iter()
            .map(|(name, params)| MethodDescriptor::with_params(name, params))
            .collect()
    })
}

fn interface_of(methods: &[MethodDescriptor]) -> MethodSet {
    methods
        .iter()
        .cloned()
        .fold(MethodSet::interface("Generated"), |set, m| set.method(m))
}

fn class_of(methods: &[MethodDescriptor]) -> ClassShape {
    methods
        .iter()
        .cloned()
        .fold(ClassShape::new("Exact"), |class, m| class.def(m))
}

proptest! {
    #[test]
    fn exact_implementation_conforms(methods in arb_methods(0)) {
        let iface = interface_of(&methods);
        prop_assert!(check(&class_of(&methods), &iface).unwrap().is_empty());
    }

    #[test]
    fn dropping_a_method_is_one_missing_issue(
        methods in arb_methods(0),
        pick in any::<prop::sample::Index>(),
    ) {
        let iface = interface_of(&methods);
        let dropped = pick.index(methods.len());
        let mut kept = methods.clone();
        let removed = kept.remove(dropped);

        let issues = check(&class_of(&kept), &iface).unwrap();
        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(issues[0].kind(), &IssueKind::MissingMethod);
        prop_assert_eq!(issues[0].method(), removed.name.as_str());
    }

    #[test]
    fn extra_parameter_is_one_arity_issue(
        methods in arb_methods(0),
        pick in any::<prop::sample::Index>(),
    ) {
        let iface = interface_of(&methods);
        let target = pick.index(methods.len());
        let mut actual = methods.clone();
        actual[target].params.push(ParamDescriptor::optional("extra"));

        let issues = check(&class_of(&actual), &iface).unwrap();
        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(
            issues[0].kind(),
            &IssueKind::ArityMismatch {
                expected: methods[target].arity(),
                actual: methods[target].arity() + 1,
            }
        );
    }

    #[test]
    fn flipped_requiredness_is_one_issue_at_that_index(
        methods in arb_methods(1),
        method_pick in any::<prop::sample::Index>(),
        param_pick in any::<prop::sample::Index>(),
    ) {
        let iface = interface_of(&methods);
        let m = method_pick.index(methods.len());
        let p = param_pick.index(methods[m].params.len());
        let mut actual = methods.clone();
        let param = &mut actual[m].params[p];
        param.required = Requiredness::from(!param.required.is_required());

        let issues = check(&class_of(&actual), &iface).unwrap();
        prop_assert_eq!(issues.len(), 1);
        prop_assert_eq!(issues[0].kind().index(), Some(p));
        let is_requiredness = matches!(
            issues[0].kind(),
            IssueKind::ParamRequirednessMismatch { .. }
        );
        prop_assert!(is_requiredness);
    }

    #[test]
    fn renamed_parameter_is_one_name_issue(
        methods in arb_methods(1),
        method_pick in any::<prop::sample::Index>(),
        param_pick in any::<prop::sample::Index>(),
    ) {
        let iface = interface_of(&methods);
        let m = method_pick.index(methods.len());
        let p = param_pick.index(methods[m].params.len());
        let mut actual = methods.clone();
        actual[m].params[p].name.push_str("_renamed");
        let flipped = !methods[m].params[p].required.is_required();
        actual[m].params[p].required = Requiredness::from(flipped);

        let issues = check(&class_of(&actual), &iface).unwrap();
        prop_assert_eq!(issues.len(), 1);
        let is_name = matches!(issues[0].kind(), IssueKind::ParamNameMismatch { .. });
        prop_assert!(is_name);
        prop_assert_eq!(issues[0].kind().index(), Some(p));
    }
}
