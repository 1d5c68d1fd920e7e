//! Traversals: lifting a whole collection through a monad.
//!
//! Every function here folds its input into a single wrapped `Vec`, binding
//! each element inside every branch the accumulator currently holds:
//!
//! ```text
//! acc = pure([])
//! for m in inputs:
//!     acc = acc >>= |prefix| m >>= |x| pure(prefix ++ [x])
//! acc
//! ```
//!
//! For `Maybe` that gives short-circuiting ("all present, or absent"); for
//! `List` it gives the Cartesian product in row-major order. Once a step
//! leaves no branch alive the result can no longer change, so the remaining
//! input is not pulled and its element functions are never called.
//!
//! Empty input yields `pure(vec![])`, except [`fold`], which has no initial
//! wrapped value to return and yields `empty()` instead.

use crate::typeclass::{Apply, Kinded, Monad, MonadZero};

use super::chain::Chain;

macro_rules! trace_short_circuit {
    ($operation:expr, $position:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "monadic::traverse",
            operation = $operation,
            position = $position,
            "no branch survived; remaining input skipped"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = ($operation, $position);
    };
}

/// Binds each step into every live branch of the accumulator, extending the
/// branch's chain with `extend`. Stops at the first step after which no
/// branch was extended.
///
/// Cost per step: the step is cloned once for each live branch, since the
/// contract's `bind` may call its continuation any number of times. For a
/// single-branch variant such as `Maybe` that is one payload clone and one
/// `Rc` link allocation per element. The finished chain is unshared, so
/// `finish` moves the payloads out without cloning them again.
fn accumulate<K, X, O, I, S>(operation: &'static str, steps: I, mut extend: S) -> Apply<K, Chain<O>>
where
    K: Monad,
    I: IntoIterator<Item = Apply<K, X>>,
    Apply<K, X>: Clone,
    S: FnMut(&Chain<O>, X) -> Chain<O>,
{
    let mut accumulator = K::pure(Chain::<O>::new());
    for (position, step) in steps.into_iter().enumerate() {
        let mut advanced = false;
        accumulator = K::bind::<Chain<O>, Chain<O>, _>(accumulator, |prefix| {
            K::bind::<X, Chain<O>, _>(step.clone(), |value| {
                advanced = true;
                K::pure(extend(&prefix, value))
            })
        });
        if !advanced {
            trace_short_circuit!(operation, position);
            break;
        }
    }
    accumulator
}

fn finish<K, O>(chain: Apply<K, Chain<O>>) -> Apply<K, Vec<O>>
where
    K: Monad,
    O: Clone,
{
    K::bind::<Chain<O>, Vec<O>, _>(chain, |chain| K::pure(chain.into_vec()))
}

/// Turns a collection of wrapped values into a wrapped collection.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::sequence;
/// use monadic::{absent, list, maybe, Maybe};
///
/// assert_eq!(sequence(vec![maybe(1), maybe(2)]), maybe(vec![1, 2]));
/// assert_eq!(sequence(vec![maybe(1), absent()]), Maybe::absent());
///
/// let product = sequence(vec![list!['a', 'b'], list!['c', 'd']]);
/// assert_eq!(product.len(), 4);
/// ```
pub fn sequence<M, I>(monads: I) -> Apply<M::Kind, Vec<M::Inner>>
where
    I: IntoIterator<Item = M>,
    M: Kinded,
    M::Kind: Monad,
    M::Inner: Clone,
    Apply<M::Kind, M::Inner>: Clone,
{
    let steps = monads.into_iter().map(Kinded::into_kind);
    finish::<M::Kind, _>(accumulate::<M::Kind, M::Inner, M::Inner, _, _>(
        "sequence",
        steps,
        Chain::push,
    ))
}

/// `sequence` over `items` mapped through `function`. Elements after the
/// point where no branch survives are not mapped.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::map;
/// use monadic::{absent, maybe, Maybe};
///
/// let halve = |x: i32| if x % 2 == 0 { maybe(x / 2) } else { absent() };
/// assert_eq!(map(halve, vec![2, 4, 6]), maybe(vec![1, 2, 3]));
/// assert_eq!(map(halve, vec![2, 3, 6]), Maybe::absent());
/// ```
pub fn map<T, N, I, F>(function: F, items: I) -> Apply<N::Kind, Vec<N::Inner>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> N,
    N: Kinded,
    N::Kind: Monad,
    N::Inner: Clone,
    Apply<N::Kind, N::Inner>: Clone,
{
    let steps = items.into_iter().map(function).map(Kinded::into_kind);
    finish::<N::Kind, _>(accumulate::<N::Kind, N::Inner, N::Inner, _, _>(
        "map",
        steps,
        Chain::push,
    ))
}

/// Like [`map`] for a function returning a wrapped pair; the pairs are
/// split into two vectors of equal length.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::map_unzip;
/// use monadic::maybe;
///
/// let result = map_unzip(|x: i32| maybe((x, x * x)), vec![1, 2, 3]);
/// assert_eq!(result, maybe((vec![1, 2, 3], vec![1, 4, 9])));
/// ```
pub fn map_unzip<T, B, C, N, I, F>(function: F, items: I) -> Apply<N::Kind, (Vec<B>, Vec<C>)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> N,
    N: Kinded<Inner = (B, C)>,
    N::Kind: Monad,
    B: Clone,
    C: Clone,
    Apply<N::Kind, (B, C)>: Clone,
{
    let steps = items.into_iter().map(function).map(Kinded::into_kind);
    let chain = accumulate::<N::Kind, (B, C), (B, C), _, _>("map_unzip", steps, Chain::push);
    <N::Kind as Monad>::bind::<Chain<(B, C)>, (Vec<B>, Vec<C>), _>(chain, |chain| {
        let halves: (Vec<B>, Vec<C>) = chain.into_vec().into_iter().unzip();
        <N::Kind as Monad>::pure(halves)
    })
}

/// Keeps the items whose wrapped predicate holds, in input order.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::filter;
/// use monadic::{absent, list, maybe, Maybe};
///
/// let even = |x: &i32| maybe(x % 2 == 0);
/// assert_eq!(filter(even, vec![1, 2, 3, 4]), maybe(vec![2, 4]));
///
/// let guarded = |x: &i32| if *x < 0 { absent() } else { maybe(true) };
/// assert_eq!(filter(guarded, vec![1, -1]), Maybe::absent());
///
/// // Every subset: the predicate answers both ways for every item.
/// let powerset = filter(|_: &i32| list![true, false], vec![1, 2]);
/// assert_eq!(powerset, list![vec![1, 2], vec![1], vec![2], vec![]]);
/// ```
pub fn filter<T, N, I, F>(mut predicate: F, items: I) -> Apply<N::Kind, Vec<T>>
where
    I: IntoIterator<Item = T>,
    T: Clone,
    F: FnMut(&T) -> N,
    N: Kinded<Inner = bool>,
    N::Kind: Monad,
    Apply<N::Kind, Option<T>>: Clone,
{
    let steps = items.into_iter().map(|item| {
        let verdict = predicate(&item).into_kind();
        <N::Kind as Monad>::bind::<bool, Option<T>, _>(verdict, |keep| {
            <N::Kind as Monad>::pure(keep.then(|| item.clone()))
        })
    });
    let chain = accumulate::<N::Kind, Option<T>, T, _, _>("filter", steps, |prefix, kept| {
        kept.map_or_else(|| prefix.clone(), |item| prefix.push(item))
    });
    finish::<N::Kind, _>(chain)
}

/// Combines `first` and `second` pairwise through `function`, stopping at
/// the end of the shorter input.
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::zip;
/// use monadic::{absent, maybe, Maybe};
///
/// let divide = |x: i32, y: i32| if y == 0 { absent() } else { maybe(x / y) };
/// assert_eq!(zip(divide, vec![6, 8], vec![3, 2, 1]), maybe(vec![2, 4]));
/// assert_eq!(zip(divide, vec![6, 8], vec![3, 0]), Maybe::absent());
/// ```
pub fn zip<A, B, N, I, J, F>(mut function: F, first: I, second: J) -> Apply<N::Kind, Vec<N::Inner>>
where
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
    F: FnMut(A, B) -> N,
    N: Kinded,
    N::Kind: Monad,
    N::Inner: Clone,
    Apply<N::Kind, N::Inner>: Clone,
{
    let steps = first
        .into_iter()
        .zip(second)
        .map(|(left, right)| function(left, right).into_kind());
    finish::<N::Kind, _>(accumulate::<N::Kind, N::Inner, N::Inner, _, _>(
        "zip",
        steps,
        Chain::push,
    ))
}

/// Left fold whose step function returns a wrapped accumulator.
///
/// The first step is applied to `initial` directly; every later step is
/// bound into the wrapped accumulator. An empty `items` yields
/// [`MonadZero::empty`].
///
/// # Examples
///
/// ```rust
/// use monadic::combinator::fold;
/// use monadic::{absent, maybe, Maybe};
///
/// let divide = |acc: f64, x: i32| if x == 0 { absent() } else { maybe(acc / f64::from(x)) };
/// assert_eq!(fold(divide, 1000.0, vec![1, 2, 3]), maybe(1000.0 / 6.0));
/// assert_eq!(fold(divide, 1000.0, vec![1, 0, 3]), Maybe::absent());
/// assert_eq!(fold(divide, 1000.0, Vec::new()), Maybe::absent());
/// ```
pub fn fold<T, A, N, I, F>(mut function: F, initial: A, items: I) -> Apply<N::Kind, A>
where
    I: IntoIterator<Item = T>,
    T: Clone,
    F: FnMut(A, T) -> N,
    N: Kinded<Inner = A>,
    N::Kind: MonadZero,
{
    let mut items = items.into_iter();
    let Some(first) = items.next() else {
        return <N::Kind as MonadZero>::empty::<A>();
    };
    let mut accumulator = function(initial, first).into_kind();
    for (offset, item) in items.enumerate() {
        let mut advanced = false;
        accumulator = <N::Kind as Monad>::bind::<A, A, _>(accumulator, |value| {
            advanced = true;
            function(value, item.clone()).into_kind()
        });
        if !advanced {
            trace_short_circuit!("fold", offset + 1);
            break;
        }
    }
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identity, List, Maybe, absent, list, maybe};
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn halve(value: i32) -> Maybe<i32> {
        if value % 2 == 0 {
            maybe(value / 2)
        } else {
            absent()
        }
    }

    // =========================================================================
    // sequence
    // =========================================================================

    #[rstest]
    #[case(vec![maybe(1), maybe(2)], maybe(vec![1, 2]))]
    #[case(vec![maybe(1), maybe(2), absent()], absent())]
    #[case(vec![absent(), maybe(2)], absent())]
    #[case(Vec::new(), maybe(Vec::new()))]
    fn sequence_on_maybe(#[case] input: Vec<Maybe<i32>>, #[case] expected: Maybe<Vec<i32>>) {
        assert_eq!(sequence(input), expected);
    }

    #[rstest]
    fn sequence_on_list_is_cartesian_product() {
        let result = sequence(vec![list!['a', 'b'], list!['c', 'd']]);
        assert_eq!(
            result,
            list![
                vec!['a', 'c'],
                vec!['a', 'd'],
                vec!['b', 'c'],
                vec!['b', 'd'],
            ]
        );
    }

    #[rstest]
    fn sequence_on_list_with_empty_member_is_empty() {
        let result = sequence(vec![list![1, 2], List::new(), list![3]]);
        assert!(result.is_empty());
    }

    #[rstest]
    fn sequence_of_no_lists_is_one_empty_row() {
        let result = sequence(Vec::<List<i32>>::new());
        assert_eq!(result, list![Vec::new()]);
    }

    #[rstest]
    fn sequence_on_identity_collects() {
        assert_eq!(
            sequence(vec![Identity(1), Identity(2)]),
            Identity(vec![1, 2])
        );
    }

    #[rstest]
    fn sequence_handles_long_input() {
        let input: Vec<Maybe<usize>> = (0..10_000).map(maybe).collect();
        let expected: Vec<usize> = (0..10_000).collect();
        assert_eq!(sequence(input), maybe(expected));
    }

    #[derive(Debug)]
    struct Tracked {
        id: usize,
        clones: Rc<Cell<usize>>,
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                id: self.id,
                clones: Rc::clone(&self.clones),
            }
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(64)]
    fn sequence_on_maybe_clones_each_payload_once(#[case] size: usize) {
        let clones = Rc::new(Cell::new(0));
        let input: Vec<Maybe<Tracked>> = (0..size)
            .map(|id| {
                maybe(Tracked {
                    id,
                    clones: Rc::clone(&clones),
                })
            })
            .collect();

        let ids: Vec<usize> = sequence(input)
            .into_value()
            .map(|tracked| tracked.iter().map(|item| item.id).collect())
            .unwrap_or_default();

        assert_eq!(ids, (0..size).collect::<Vec<_>>());
        assert_eq!(clones.get(), size);
    }

    #[rstest]
    fn sequence_on_list_clones_per_live_branch() {
        let clones = Rc::new(Cell::new(0));
        let tracked = |id| Tracked {
            id,
            clones: Rc::clone(&clones),
        };
        let input = vec![list![tracked(0)], list![tracked(1), tracked(2)]];

        let rows: Vec<Vec<usize>> = sequence(input)
            .into_iter()
            .map(|row| row.iter().map(|item| item.id).collect())
            .collect();

        assert_eq!(rows, vec![vec![0, 1], vec![0, 2]]);
        // Each step once for the single live branch, then the link both rows
        // share is copied out for the first row and moved into the second.
        assert_eq!(clones.get(), 1 + 2 + 1);
    }

    // =========================================================================
    // map
    // =========================================================================

    #[rstest]
    #[case(vec![2, 4, 6], maybe(vec![1, 2, 3]))]
    #[case(vec![2, 3, 6], absent())]
    #[case(Vec::new(), maybe(Vec::new()))]
    fn map_halve(#[case] input: Vec<i32>, #[case] expected: Maybe<Vec<i32>>) {
        assert_eq!(map(halve, input), expected);
    }

    #[rstest]
    fn map_stops_calling_after_absence() {
        let mut calls = 0;
        let result = map(
            |x: i32| {
                calls += 1;
                halve(x)
            },
            vec![2, 3, 4, 6, 8],
        );
        assert_eq!(result, absent());
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn map_on_list_branches() {
        let result = map(|x: i32| list![x, -x], vec![1, 2]);
        assert_eq!(
            result,
            list![vec![1, 2], vec![1, -2], vec![-1, 2], vec![-1, -2]]
        );
    }

    // =========================================================================
    // map_unzip
    // =========================================================================

    #[rstest]
    fn map_unzip_splits_pairs() {
        let result = map_unzip(|x: i32| maybe((x, x.to_string())), vec![1, 2]);
        assert_eq!(
            result,
            maybe((vec![1, 2], vec!["1".to_string(), "2".to_string()]))
        );
    }

    #[rstest]
    fn map_unzip_propagates_absence() {
        let result = map_unzip(
            |x: i32| if x > 1 { absent() } else { maybe((x, x)) },
            vec![1, 2, 3],
        );
        assert_eq!(result, absent());
    }

    #[rstest]
    fn map_unzip_on_list_keeps_halves_aligned() {
        let result = map_unzip(|x: i32| list![(x, 'l'), (x, 'r')], vec![1]);
        assert_eq!(result, list![(vec![1], vec!['l']), (vec![1], vec!['r'])]);
    }

    // =========================================================================
    // filter
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 3, 4], maybe(vec![2, 4]))]
    #[case(vec![1, 3], maybe(Vec::new()))]
    #[case(Vec::new(), maybe(Vec::new()))]
    fn filter_even(#[case] input: Vec<i32>, #[case] expected: Maybe<Vec<i32>>) {
        assert_eq!(filter(|x: &i32| maybe(x % 2 == 0), input), expected);
    }

    #[rstest]
    fn filter_propagates_absent_verdict() {
        let result = filter(
            |x: &i32| if *x == 3 { absent() } else { maybe(true) },
            vec![1, 2, 3, 4],
        );
        assert_eq!(result, absent());
    }

    #[rstest]
    fn filter_on_list_enumerates_subsets() {
        let result = filter(|_: &char| list![true, false], vec!['a', 'b']);
        assert_eq!(
            result,
            list![vec!['a', 'b'], vec!['a'], vec!['b'], Vec::new()]
        );
    }

    // =========================================================================
    // zip
    // =========================================================================

    #[rstest]
    #[case(vec![1, 2, 3], vec![10, 20], maybe(vec![11, 22]))]
    #[case(vec![1], vec![10, 20, 30], maybe(vec![11]))]
    #[case(Vec::new(), vec![1], maybe(Vec::new()))]
    fn zip_stops_at_shorter(
        #[case] first: Vec<i32>,
        #[case] second: Vec<i32>,
        #[case] expected: Maybe<Vec<i32>>,
    ) {
        assert_eq!(zip(|x: i32, y: i32| maybe(x + y), first, second), expected);
    }

    #[rstest]
    fn zip_propagates_absence() {
        let result = zip(
            |x: i32, y: i32| if y == 0 { absent() } else { maybe(x / y) },
            vec![4, 4],
            vec![2, 0],
        );
        assert_eq!(result, absent());
    }

    #[rstest]
    fn zip_on_list_branches_per_pair() {
        let result = zip(|x: i32, y: i32| list![x + y, x - y], vec![5], vec![1]);
        assert_eq!(result, list![vec![6], vec![4]]);
    }

    // =========================================================================
    // fold
    // =========================================================================

    fn divide(accumulator: f64, divisor: i32) -> Maybe<f64> {
        if divisor == 0 {
            absent()
        } else {
            maybe(accumulator / f64::from(divisor))
        }
    }

    #[rstest]
    fn fold_divides_through() {
        assert_eq!(fold(divide, 1000.0, vec![1, 2, 3]), maybe(1000.0 / 6.0));
    }

    #[rstest]
    fn fold_propagates_absence() {
        assert_eq!(fold(divide, 1000.0, vec![1, 0, 3]), absent());
    }

    #[rstest]
    fn fold_on_empty_input_is_empty() {
        assert_eq!(fold(divide, 1000.0, Vec::new()), absent());
        let list: List<i32> = fold(|acc: i32, x: i32| list![acc + x], 0, Vec::new());
        assert!(list.is_empty());
    }

    #[rstest]
    fn fold_stops_calling_after_absence() {
        let mut calls = 0;
        let result = fold(
            |acc: f64, x: i32| {
                calls += 1;
                divide(acc, x)
            },
            1.0,
            vec![1, 0, 3, 4],
        );
        assert_eq!(result, absent());
        assert_eq!(calls, 2);
    }

    #[rstest]
    fn fold_on_list_accumulates_every_path() {
        let result = fold(|acc: i32, x: i32| list![acc + x, acc * x], 1, vec![2, 3]);
        assert_eq!(result, list![6, 9, 5, 6]);
    }
}
