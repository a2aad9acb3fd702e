//! Property-based tests for predicates.
//!
//! `evaluate` is an alias of `test`: for every predicate and every input,
//! including absent (`None`) inputs for the null-aware predicates, both
//! methods must agree, and must keep agreeing when called repeatedly.

use libmultimap::functors::*;
use proptest::prelude::*;

fn agrees<T, P>(predicate: &P, input: &T) -> bool
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    let tested = predicate.test(input);
    predicate.evaluate(input) == tested && predicate.test(input) == tested
}

fn even(value: &i32) -> bool {
    value % 2 == 0
}

fn arb_option() -> impl Strategy<Value = Option<i32>> {
    prop::option::of(-100..100i32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn value_predicates_evaluate_equals_test(input in -100..100i32, target in -100..100i32) {
        let predicates: Vec<Box<dyn Predicate<i32>>> = vec![
            Box::new(TruePredicate),
            Box::new(FalsePredicate),
            Box::new(EqualPredicate::new(target)),
            Box::new(even),
            Box::new(NotPredicate::new(even)),
            Box::new(AndPredicate::new(even, EqualPredicate::new(target))),
            Box::new(OrPredicate::new(even, EqualPredicate::new(target))),
            Box::new(AllPredicate::new([EqualPredicate::new(target), EqualPredicate::new(input)])),
            Box::new(AnyPredicate::new([EqualPredicate::new(target), EqualPredicate::new(0)])),
            Box::new((|v: &i32| *v > 0).and(even).or(FalsePredicate).negate()),
        ];

        for predicate in &predicates {
            prop_assert!(agrees(&**predicate, &input));
        }
    }

    #[test]
    fn null_aware_predicates_evaluate_equals_test(input in arb_option()) {
        let predicates: Vec<Box<dyn Predicate<Option<i32>>>> = vec![
            Box::new(NullPredicate),
            Box::new(NotNullPredicate),
            Box::new(NullIsTruePredicate::new(even)),
            Box::new(NullIsFalsePredicate::new(even)),
            Box::new(TruePredicate),
            Box::new(EqualPredicate::new(None)),
            Box::new(NotPredicate::new(NullPredicate)),
        ];

        for predicate in &predicates {
            prop_assert!(agrees(&**predicate, &input));
        }
    }

    #[test]
    fn null_aware_predicates_handle_absence(input in arb_option()) {
        prop_assert_eq!(NullPredicate.test(&input), input.is_none());
        prop_assert_eq!(NotNullPredicate.test(&input), input.is_some());
        prop_assert_eq!(
            NullIsTruePredicate::new(even).test(&input),
            input.map_or(true, |v| even(&v))
        );
        prop_assert_eq!(
            NullIsFalsePredicate::new(even).test(&input),
            input.map_or(false, |v| even(&v))
        );
    }

    #[test]
    fn combinators_follow_boolean_logic(input in -100..100i32, target in -100..100i32) {
        let equal = EqualPredicate::new(target);

        prop_assert_eq!(even.and(equal.clone()).test(&input), even(&input) && input == target);
        prop_assert_eq!(even.or(equal.clone()).test(&input), even(&input) || input == target);
        prop_assert_eq!(equal.negate().test(&input), input != target);
    }
}
