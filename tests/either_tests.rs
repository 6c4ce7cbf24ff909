//! Unit tests for Either<L, R>.
//!
//! Either is right-biased:
//! - `Left(L)`: the failure channel, passed through by every combinator
//! - `Right(R)`: the success channel, transformed by `map` and `flat_map`

#![cfg(feature = "control")]

use kleisli::control::{Either, EitherCases, IntoEither, Maybe};
use kleisli::typeclass::{Applicative, Bifunctor, Foldable, Semigroup, lift_a4, lift_a5};
use rstest::rstest;

// =============================================================================
// Construction and queries
// =============================================================================

#[rstest]
fn of_is_right() {
    let value: Either<String, i32> = Either::of(1);
    assert!(value.is_right());
    assert!(!value.is_left());
    assert_eq!(value.right(), Some(1));
}

#[rstest]
fn left_extraction() {
    let value: Either<String, i32> = Either::Left("e".to_string());
    assert_eq!(value.clone().left(), Some("e".to_string()));
    assert_eq!(value.right_ref(), None);
}

#[rstest]
#[case(Maybe::Some(4), Either::Right(4))]
#[case(Maybe::None, Either::Left(String::new()))]
fn from_maybe_uses_default_left(#[case] maybe: Maybe<i32>, #[case] expected: Either<String, i32>) {
    assert_eq!(Either::from_maybe(maybe), expected);
}

#[rstest]
fn from_nullable_and_result() {
    assert_eq!(Either::<String, i32>::from_nullable(None), Either::Left(String::new()));
    assert_eq!(Either::from_result(Ok::<i32, String>(2)), Either::Right(2));
    let failed: Result<i32, String> = Either::Left("bad".to_string()).into_result();
    assert_eq!(failed, Err("bad".to_string()));
}

// =============================================================================
// Right-biased combinators
// =============================================================================

#[rstest]
fn map_skips_left() {
    let left: Either<String, i32> = Either::Left("stop".to_string());
    let mapped: Either<String, i32> = left.map(|_: i32| -> i32 { panic!("must not run") });
    assert_eq!(mapped, Either::Left("stop".to_string()));
}

#[rstest]
fn ap_applies_right_function() {
    let double: Either<String, fn(i32) -> i32> = Either::Right(|x| x * 2);
    assert_eq!(double.ap(Either::Right(21)), Either::Right(42));
}

#[rstest]
fn ap_propagates_left_of_either_side() {
    let double: Either<String, fn(i32) -> i32> = Either::Right(|x| x * 2);
    assert_eq!(double.ap(Either::Left("arg".to_string())), Either::Left("arg".to_string()));

    let missing: Either<String, fn(i32) -> i32> = Either::Left("fn".to_string());
    assert_eq!(missing.ap(Either::Right(1)), Either::Left("fn".to_string()));
}

#[rstest]
fn flat_map_chains_until_left() {
    let positive = |n: i32| {
        if n > 0 {
            Either::Right(n - 1)
        } else {
            Either::Left(format!("{n} exhausted"))
        }
    };
    assert_eq!(Either::of(2).flat_map(positive).flat_map(positive), Either::Right(0));
    assert_eq!(
        Either::of(1).flat_map(positive).flat_map(positive),
        Either::Left("0 exhausted".to_string())
    );
}

#[rstest]
fn fold_swap_and_bimap() {
    let left: Either<i32, String> = Either::Left(3);
    assert_eq!(left.clone().fold(|n| n * 10, |text| text.len() as i32), 30);
    assert_eq!(left.clone().swap(), Either::Right(3));
    assert_eq!(
        left.bimap(|n| n + 1, |text| text.len()),
        Either::<i32, usize>::Left(4)
    );
}

#[rstest]
#[case(Either::Left("no".to_string()), -2)]
#[case(Either::Right(5), 5)]
fn cata_picks_the_named_case(#[case] value: Either<String, i32>, #[case] expected: i32) {
    let folded = value.cata(EitherCases {
        left: |text: String| -(text.len() as i32),
        right: |n| n,
    });
    assert_eq!(folded, expected);
}

#[rstest]
fn recovery_helpers() {
    let left: Either<String, i32> = Either::Left("e".to_string());
    assert_eq!(left.clone().or_get(5), 5);
    assert_eq!(left.or_else(6), Either::Right(6));
    assert_eq!(Either::<String, i32>::Right(1).or_else(6), Either::Right(1));
}

#[rstest]
fn concat_combines_rights_and_keeps_first_left() {
    let first: Either<String, Vec<i32>> = Either::Right(vec![1]);
    let second: Either<String, Vec<i32>> = Either::Right(vec![2]);
    assert_eq!(first.clone().concat(second), Either::Right(vec![1, 2]));

    let failure: Either<String, Vec<i32>> = Either::Left("a".to_string());
    let other_failure: Either<String, Vec<i32>> = Either::Left("b".to_string());
    assert_eq!(failure.clone().concat(first.clone()), failure);
    assert_eq!(first.concat(other_failure.clone()), other_failure);
    assert_eq!(failure.clone().concat(other_failure), failure);
}

#[rstest]
fn flatten_removes_one_level() {
    let nested: Either<String, Either<String, i32>> = Either::Right(Either::Right(1));
    assert_eq!(nested.flatten(), Either::Right(1));
}

// =============================================================================
// Capturing failures
// =============================================================================

#[rstest]
fn try_fn_captures_panic_as_left() {
    let exploding = Either::<String, i32>::try_fn(|_: ()| -> Option<i32> { panic!("boom") });
    assert_eq!(exploding(()), Either::Left("boom".to_string()));
}

#[rstest]
fn try_fn_converts_errors() {
    let parse = Either::try_fn(|text: &str| text.parse::<u8>());
    assert_eq!(parse("7"), Either::Right(7));
    assert!(parse("700").is_left());
}

#[rstest]
fn into_either_for_option_and_maybe() {
    assert_eq!(Some(1).into_either(), Either::Right(1));
    assert_eq!(Maybe::<i32>::None.into_either(), Either::Left(String::new()));
}

#[rstest]
fn is_checks_runtime_type() {
    assert!(Either::<String, i32>::is(&Either::<String, i32>::Right(1)));
    assert!(!Either::<String, i32>::is(&Either::<i32, i32>::Right(1)));
}

// =============================================================================
// Type classes
// =============================================================================

#[rstest]
fn bifunctor_and_applicative() {
    let value: Either<String, i32> = Either::Right(2);
    assert_eq!(
        Bifunctor::bimap(value.clone(), |text: String| text.len(), |n| n * 2),
        Either::Right(4)
    );
    assert_eq!(value.map2(Either::Right(3), |a, b| a + b), Either::Right(5));
}

#[rstest]
fn lift_a4_keeps_the_leftmost_left() {
    let result = lift_a4(
        |a: i32, b: i32, c: i32, d: i32| a + b + c + d,
        Either::<String, i32>::Right(1),
        Either::Left("second".to_string()),
        Either::Right(3),
        Either::Left("fourth".to_string()),
    );
    assert_eq!(result, Either::Left("second".to_string()));
}

#[rstest]
fn lift_a5_joins_five_rights() {
    let result = lift_a5(
        |a: i32, b: i32, c: i32, d: i32, e: i32| a * b * c * d * e,
        Either::<String, i32>::Right(1),
        Either::Right(2),
        Either::Right(3),
        Either::Right(4),
        Either::Right(5),
    );
    assert_eq!(result, Either::Right(120));
}

#[rstest]
fn bifunctor_first_and_second_touch_one_channel() {
    let failed: Either<&str, i32> = Either::Left("bad");
    assert_eq!(Bifunctor::first(failed, str::len), Either::Left(3));
    assert_eq!(Bifunctor::second(failed, |n: i32| n + 1), Either::Left("bad"));
}

#[rstest]
fn foldable_and_semigroup() {
    let value: Either<String, i32> = Either::Right(2);
    assert_eq!(value.fold_left(10, |acc, n| acc + n), 12);
    let combined = Either::<String, String>::Right("a".to_string())
        .combine(Either::Right("b".to_string()));
    assert_eq!(combined, Either::Right("ab".to_string()));
}

#[rstest]
fn display_shows_variant() {
    assert_eq!(Either::<String, i32>::Right(1).to_string(), "Right(1)");
    assert_eq!(Either::<String, i32>::Left("e".to_string()).to_string(), "Left(e)");
}
