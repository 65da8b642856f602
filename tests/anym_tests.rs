//! Scenario tests for `AnyM` and the comprehension builder.

use kindling::anym::{AnyM, For};
use kindling::hkt::WitnessRegistry;
use kindling::instances::{Either, Id, List, Maybe};
use kindling::typeclass::monoid::{self, Sum};
use kindling::typeclass::Identity;
use kindling::KindError;
use rstest::rstest;

// =============================================================================
// Core combinators on the sequence family
// =============================================================================

#[rstest]
fn map_doubles_every_element() {
    let doubled = AnyM::<List, i32>::of(vec![1, 2, 3]).map(|n| n * 2);
    assert_eq!(doubled.unwrap(), vec![2, 4, 6]);
}

#[rstest]
fn flat_map_replicates() {
    let replicated =
        AnyM::<List, usize>::of(vec![1, 2, 3]).flat_map(|n| AnyM::of(vec![n; n]));
    assert_eq!(replicated.unwrap(), vec![1, 2, 2, 3, 3, 3]);
}

#[rstest]
#[case(1, Some(2))]
#[case(5, None)]
fn filter_on_a_unit(#[case] threshold: i32, #[case] expected: Option<i32>) {
    let filtered = AnyM::<Maybe, i32>::unit(2).filter(move |n| *n > threshold);
    assert_eq!(filtered.unwrap(), expected);
}

#[rstest]
fn filter_to_nothing_is_empty() {
    let filtered = AnyM::<List, i32>::unit(2).filter(|n| *n > 5);
    assert_eq!(filtered, AnyM::empty());
}

#[rstest]
fn two_level_comprehension() {
    let pairs = For::any_m(AnyM::<List, i32>::of(vec![1, 2]))
        .any_m(|(a,)| AnyM::of((*a..*a + 2).collect()))
        .yield_with(|(a, b)| (a, b));
    assert_eq!(pairs.unwrap(), vec![(1, 1), (1, 2), (2, 2), (2, 3)]);
}

#[rstest]
fn left_and_right_folds_agree_on_addition() {
    let numbers = AnyM::<List, i32>::of(vec![1, 2, 3, 4]);
    assert_eq!(numbers.clone().fold_left(0, |acc, n| acc + n), 10);
    assert_eq!(numbers.fold_right(0, |n, acc| acc + n), 10);
}

#[rstest]
#[case(vec![1, 2, 3], Some(vec![2, 4, 6]))]
#[case(vec![1, 0, 3], None)]
#[case(vec![], Some(vec![]))]
fn traverse_into_maybe(#[case] input: Vec<i32>, #[case] expected: Option<Vec<i32>>) {
    let traversed = AnyM::<List, i32>::of(input)
        .traverse(|n| AnyM::<Maybe, _>::of((n != 0).then_some(n * 2)));
    assert_eq!(traversed.unwrap(), expected);
}

// =============================================================================
// Other families through the same surface
// =============================================================================

fn describe<W: kindling::hkt::Witness>(numbers: AnyM<W, i32>) -> AnyM<W, String> {
    numbers
        .flat_map(|n| AnyM::unit(n + 1))
        .map(|n| format!("n={n}"))
}

#[rstest]
fn one_generic_function_serves_every_family() {
    let lists = describe(AnyM::<List, _>::of(vec![1, 2]));
    assert_eq!(lists.unwrap(), vec!["n=2", "n=3"]);
    assert_eq!(describe(AnyM::<Maybe, _>::of(None)).unwrap(), None);
    assert_eq!(
        describe(AnyM::<Either<&'static str>, _>::of(Ok(41))).unwrap(),
        Ok("n=42".to_string())
    );
    let identity = describe(AnyM::<Id, _>::of(Identity(0)));
    assert_eq!(identity.unwrap(), Identity("n=1".to_string()));
}

#[rstest]
fn either_short_circuits_on_first_error() {
    let result = AnyM::<Either<String>, i32>::of(Ok(1))
        .flat_map(|_| AnyM::of(Err("first".to_string())))
        .flat_map(|n: i32| AnyM::of(if n > 0 { Err(n.to_string()) } else { Ok(n) }));
    assert_eq!(result.unwrap(), Err("first".to_string()));
}

#[rstest]
fn zip_is_cartesian_for_lists() {
    let zipped = AnyM::<List, i32>::of(vec![1, 2]).zip(AnyM::of(vec!['a', 'b']));
    let expected = vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')];
    assert_eq!(zipped.unwrap(), expected);
}

#[rstest]
fn zip_with_combines_present_values() {
    let total = AnyM::<Maybe, i32>::of(Some(40)).zip_with(AnyM::of(Some(2)), |a, b| a + b);
    assert_eq!(total.unwrap(), Some(42));
}

#[rstest]
fn plus_follows_the_family_policy() {
    let lists = AnyM::<List, i32>::of(vec![1]).plus(AnyM::of(vec![2, 3]));
    assert_eq!(lists.unwrap(), vec![1, 2, 3]);

    let maybes = AnyM::<Maybe, i32>::of(None).plus(AnyM::of(Some(7)));
    assert_eq!(maybes.unwrap(), Some(7));
    let first_wins = AnyM::<Maybe, i32>::of(Some(1)).plus(AnyM::of(Some(7)));
    assert_eq!(first_wins.unwrap(), Some(1));
}

#[rstest]
fn plus_with_a_caller_supplied_monoid() {
    use kindling::hkt::Higher;

    let empty = Higher::<Maybe, i32>::widen(None);
    let last_present = monoid::of(empty, |left: Higher<Maybe, i32>, right: Higher<Maybe, i32>| {
        if right.as_concrete().is_some() {
            right
        } else {
            left
        }
    });
    let combined = AnyM::<Maybe, i32>::of(Some(1)).plus_with(AnyM::of(Some(7)), &last_present);
    assert_eq!(combined.unwrap(), Some(7));
}

#[rstest]
fn fold_map_with_sum() {
    let total: i64 = AnyM::<List, i32>::of(vec![1, 2, 3]).fold_map(&Sum, i64::from);
    assert_eq!(total, 6);
}

#[rstest]
fn for_each_helpers_agree_with_the_builder() {
    let via_helper = AnyM::<List, i32>::of(vec![1, 2])
        .for_each2(|a| AnyM::of(vec![*a, a * 10]), |a, b| a + b);
    let via_builder = For::any_m(AnyM::<List, i32>::of(vec![1, 2]))
        .any_m(|(a,)| AnyM::of(vec![*a, a * 10]))
        .yield_with(|(a, b)| a + b);
    assert_eq!(via_helper, via_builder);
}

// =============================================================================
// Crossing an erasure boundary
// =============================================================================

#[rstest]
fn erased_values_come_back_through_the_registry() {
    let registry = WitnessRegistry::standard();
    let erased = AnyM::<List, i32>::of(vec![1, 2]).erase();
    let restored = AnyM::<List, i32>::restore(erased, &registry).unwrap();
    assert_eq!(restored.unwrap(), vec![1, 2]);
}

#[rstest]
fn restoring_into_a_foreign_family_fails() {
    let registry = WitnessRegistry::standard();
    let erased = AnyM::<List, i32>::of(vec![1, 2]).erase();
    let error = AnyM::<Maybe, i32>::restore(erased, &registry).unwrap_err();
    assert_eq!(
        error,
        KindError::WitnessMismatch {
            expected: "maybe",
            found: "list",
        }
    );
}

#[rstest]
fn restoring_an_unregistered_family_fails() {
    let registry = WitnessRegistry::builder()
        .register::<List>()
        .build()
        .unwrap();
    let erased = AnyM::<Maybe, i32>::of(Some(1)).erase();
    let error = AnyM::<Maybe, i32>::restore(erased, &registry).unwrap_err();
    assert_eq!(error, KindError::UnregisteredWitness { name: "maybe" });
}

#[rstest]
fn zipping_with_a_foreign_erased_value_fails_fast() {
    let foreign = AnyM::<Maybe, char>::of(Some('x')).erase();
    let result = AnyM::<List, i32>::of(vec![1]).zip_erased(foreign);
    assert!(matches!(result, Err(KindError::WitnessMismatch { expected: "list", found: "maybe" })));
}

#[rstest]
fn try_from_checks_the_tag() {
    let erased = AnyM::<Maybe, i32>::of(Some(3)).erase();
    let back = AnyM::<Maybe, i32>::try_from(erased).unwrap();
    assert_eq!(back.unwrap(), Some(3));
}

#[rstest]
fn debug_names_the_family() {
    let value = AnyM::<Maybe, i32>::of(Some(1));
    assert_eq!(format!("{value:?}"), "AnyM(\"maybe\", Some(1))");
}
